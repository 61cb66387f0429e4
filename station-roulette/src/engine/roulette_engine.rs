use crate::{
    algorithm::{self, probability},
    config::RouletteConfig,
    model::{
        network::{DistanceTable, Edge, StationGraph, StationId},
        RouletteError,
    },
};
use indexmap::IndexMap;
use rand::Rng;

/// destination counts from repeated spins, in order of first draw
pub type SpinHistogram = IndexMap<StationId, usize>;

/// draws destinations for teams. the engine holds only its rules; every
/// call builds its own graph and distance table and shares nothing, so one
/// engine can serve concurrent callers as long as each brings its own rng.
#[derive(Debug, Clone, Default)]
pub struct RouletteEngine {
    config: RouletteConfig,
}

impl RouletteEngine {
    pub fn new(config: RouletteConfig) -> RouletteEngine {
        RouletteEngine { config }
    }

    /// shortest travel time and hop count from `source` to every station
    pub fn distances(&self, edges: &[Edge], source: &StationId) -> DistanceTable {
        let graph = StationGraph::new(edges);
        algorithm::shortest_distances(&graph, source)
    }

    /// number of stations left to ride from `source` to `destination`
    pub fn remaining_stations(
        &self,
        edges: &[Edge],
        source: &StationId,
        destination: &StationId,
    ) -> Result<usize, RouletteError> {
        let graph = StationGraph::new(edges);
        algorithm::remaining_stations(&graph, source, destination)
    }

    /// draws a destination for a team at `start`. candidates are filtered by
    /// the minimum distance and the exclusion rule over `occupied`, weighted
    /// by travel time, and sampled with a value drawn from `rng`.
    pub fn spin<R: Rng + ?Sized>(
        &self,
        edges: &[Edge],
        start: &StationId,
        occupied: &[StationId],
        rng: &mut R,
    ) -> Result<StationId, RouletteError> {
        let graph = StationGraph::new(edges);
        self.spin_on_graph(&graph, start, occupied, rng)
    }

    fn spin_on_graph<R: Rng + ?Sized>(
        &self,
        graph: &StationGraph,
        start: &StationId,
        occupied: &[StationId],
        rng: &mut R,
    ) -> Result<StationId, RouletteError> {
        let distances = algorithm::shortest_distances(graph, start);
        let eligible = algorithm::eligible_distances(
            &distances,
            self.config.min_minutes,
            occupied,
            self.config.exclusion_policy,
        );
        if eligible.is_empty() {
            return Err(RouletteError::EmptyCandidates);
        }
        let probabilities = self.config.weighting_policy.to_probabilities(&eligible);
        if probability::is_degenerate(&probabilities) {
            log::warn!(
                "degenerate distribution from '{}' over {} candidates with '{}' weighting, the last candidate will be drawn",
                start,
                probabilities.len(),
                self.config.weighting_policy
            );
        }
        let random_value: f64 = rng.random();
        let selected = algorithm::select_weighted(&probabilities, random_value)?;
        log::debug!("spin from '{start}' drew {random_value:.4} -> '{selected}'");
        Ok(selected)
    }

    /// draws uniformly among `stations` other than `start`, ignoring
    /// distances and game rules.
    pub fn spin_uniform<R: Rng + ?Sized>(
        &self,
        stations: &[StationId],
        start: &StationId,
        rng: &mut R,
    ) -> Result<StationId, RouletteError> {
        algorithm::select_uniform(stations, start, rng)
    }

    /// repeats [`RouletteEngine::spin`] `runs` times from the same state and
    /// counts the destinations. the graph is built once and reused.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        edges: &[Edge],
        start: &StationId,
        occupied: &[StationId],
        runs: usize,
        rng: &mut R,
    ) -> Result<SpinHistogram, RouletteError> {
        let graph = StationGraph::new(edges);
        let mut histogram = SpinHistogram::new();
        for _ in 0..runs {
            let selected = self.spin_on_graph(&graph, start, occupied, rng)?;
            *histogram.entry(selected).or_default() += 1;
        }
        Ok(histogram)
    }
}
