// Public modules
pub mod algorithms;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::bounded_permutation::BoundedPermutationSearch;
pub use error::PlanError;
pub use algorithms::nearest_neighbor::NearestNeighbor;
pub use algorithms::RoutePlanner;
pub use models::{Cell, CostModel, Location, PlannedRoute, PlannerConfig};
