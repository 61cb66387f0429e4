mod distance_entry;
mod distance_table;
mod edge;
pub mod network_ops;
mod station_graph;
mod station_id;

pub use distance_entry::DistanceEntry;
pub use distance_table::DistanceTable;
pub use edge::{Edge, OutEdge};
pub use station_graph::StationGraph;
pub use station_id::StationId;
