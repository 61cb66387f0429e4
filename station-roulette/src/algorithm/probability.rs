use crate::model::network::{DistanceTable, StationId};
use clap::ValueEnum;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// selection probability per station, in distance table order
pub type Probabilities = IndexMap<StationId, f64>;

/// how the denominator of the travel-time weighting is computed. in both
/// cases farther stations receive proportionally more weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightingPolicy {
    /// sum every entry, unreachable ones included. a single unreachable
    /// station makes the total infinite and every probability zero, which
    /// sends the weighted sampler to its last-entry fallback.
    #[default]
    IncludeUnreachable,
    /// sum reachable entries only.
    ReachableOnly,
}

impl std::fmt::Display for WeightingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightingPolicy::IncludeUnreachable => write!(f, "include unreachable"),
            WeightingPolicy::ReachableOnly => write!(f, "reachable only"),
        }
    }
}

impl WeightingPolicy {
    /// converts a distance table into probabilities proportional to travel
    /// time. unreachable stations always get zero.
    pub fn to_probabilities(&self, distances: &DistanceTable) -> Probabilities {
        let total: f64 = match self {
            WeightingPolicy::IncludeUnreachable => {
                distances.iter().map(|(_, e)| e.time_minutes).sum()
            }
            WeightingPolicy::ReachableOnly => {
                distances.reachable().map(|(_, e)| e.time_minutes).sum()
            }
        };

        distances
            .iter()
            .map(|(station, entry)| {
                let p = if entry.is_reachable() && total.is_finite() && total != 0.0 {
                    entry.time_minutes / total
                } else {
                    0.0
                };
                (station.clone(), p)
            })
            .collect()
    }
}

/// true when no station carries any weight, in which case weighted
/// sampling always falls back to the last station.
pub fn is_degenerate(probabilities: &Probabilities) -> bool {
    probabilities.values().all(|p| *p == 0.0)
}
