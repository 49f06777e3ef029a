// Models module - exports all model types

mod cell;
mod config;
mod cost_model;
mod location;
mod route;

// Re-export model types
pub use self::cell::{cells_from_points, distinct_cells, Cell};
pub use self::config::PlannerConfig;
pub use self::cost_model::CostModel;
pub use self::location::Location;
pub use self::route::PlannedRoute;

// Common type aliases for improved code readability
pub type CellId = usize;
pub type Distance = f64;
pub type Reward = f64;
pub type Time = f64;
