pub mod eligibility;
pub mod probability;
pub mod sampling;
mod shortest_distance;

pub use eligibility::{eligible_distances, ExclusionPolicy};
pub use probability::{Probabilities, WeightingPolicy};
pub use sampling::{select_uniform, select_weighted};
pub use shortest_distance::{remaining_stations, shortest_distances};
