// Location model representing coordinates in 2D space

use serde::{Deserialize, Serialize};

use crate::models::Distance;
use crate::utils::distance::euclidean_distance;

/// Represents a location with (x, y) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    /// Creates a new location with the given coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the Euclidean distance between two locations
    pub fn distance_to(&self, other: &Location) -> Distance {
        euclidean_distance(self, other)
    }
}

impl From<Location> for geo::Point<f64> {
    fn from(location: Location) -> Self {
        geo::Point::new(location.x, location.y)
    }
}
