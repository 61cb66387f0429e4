use super::probability::Probabilities;
use crate::model::{network::StationId, RouletteError};
use rand::{seq::IndexedRandom, Rng};

/// draws a station by walking the probabilities in order and returning the
/// first one whose running sum exceeds `random_value`. if the running sum
/// never does (probabilities summing to less than 1, or all zero), the last
/// station is returned, so a degenerate distribution always yields the last
/// station.
pub fn select_weighted(
    probabilities: &Probabilities,
    random_value: f64,
) -> Result<StationId, RouletteError> {
    if !(0.0..1.0).contains(&random_value) {
        return Err(RouletteError::InvalidRandomValue(random_value));
    }
    let mut running_sum = 0.0;
    for (station, p) in probabilities.iter() {
        running_sum += p;
        if random_value < running_sum {
            return Ok(station.clone());
        }
    }
    probabilities
        .last()
        .map(|(station, _)| station.clone())
        .ok_or(RouletteError::EmptyCandidates)
}

/// draws uniformly from `stations` with `exclude` removed.
pub fn select_uniform<R: Rng + ?Sized>(
    stations: &[StationId],
    exclude: &StationId,
    rng: &mut R,
) -> Result<StationId, RouletteError> {
    let candidates: Vec<&StationId> = stations.iter().filter(|s| *s != exclude).collect();
    candidates
        .choose(rng)
        .map(|s| (*s).clone())
        .ok_or(RouletteError::EmptyCandidates)
}
