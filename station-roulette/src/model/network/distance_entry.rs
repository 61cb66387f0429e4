use serde::{Deserialize, Serialize};

/// shortest cumulative travel time and hop count from a fixed source.
/// an unreached station carries `f64::INFINITY` minutes and `None` hops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceEntry {
    pub time_minutes: f64,
    pub stations_number: Option<usize>,
}

impl DistanceEntry {
    pub fn new(time_minutes: f64, stations_number: usize) -> DistanceEntry {
        DistanceEntry {
            time_minutes,
            stations_number: Some(stations_number),
        }
    }

    /// the entry of a search origin
    pub fn origin() -> DistanceEntry {
        DistanceEntry::new(0.0, 0)
    }

    /// the entry of a station not (yet) reached
    pub fn unreached() -> DistanceEntry {
        DistanceEntry {
            time_minutes: f64::INFINITY,
            stations_number: None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.time_minutes.is_finite()
    }
}
