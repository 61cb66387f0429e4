use super::StationId;
use serde::{Deserialize, Serialize};

/// a directed, timed connection between two stations. a bidirectional
/// connection is modeled as two edges. `minutes` is expected to be
/// non-negative but is not validated; negative weights break the
/// shortest-path guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: StationId,
    pub to: StationId,
    pub minutes: f64,
}

impl Edge {
    pub fn new(from: impl Into<StationId>, to: impl Into<StationId>, minutes: f64) -> Edge {
        Edge {
            from: from.into(),
            to: to.into(),
            minutes,
        }
    }
}

/// an outgoing adjacency stored in a [`super::StationGraph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutEdge {
    pub to: StationId,
    pub minutes: f64,
}
