// Cost model: distance, time and reward of a route

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{Cell, Distance, Reward, Time};
use crate::utils::distance::cell_distance;

/// Time charged per distinct searched cell and per unit of travelled distance.
///
/// Search time is paid once per distinct cell no matter how often a route
/// passes through it; travel time is paid on every traversal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// Seconds spent searching one cell
    pub search_time_per_cell: Time,

    /// Seconds spent travelling one unit of distance
    pub travel_time_per_unit: Time,
}

impl CostModel {
    pub const DEFAULT_SEARCH_TIME_PER_CELL: Time = 6.0;
    pub const DEFAULT_TRAVEL_TIME_PER_UNIT: Time = 0.5;

    /// Creates a cost model with explicit constants
    pub fn new(search_time_per_cell: Time, travel_time_per_unit: Time) -> Self {
        Self {
            search_time_per_cell,
            travel_time_per_unit,
        }
    }

    /// Euclidean distance between two cells
    pub fn distance(&self, a: &Cell, b: &Cell) -> Distance {
        cell_distance(a, b)
    }

    /// Sum of the distances between consecutive cells, without deduplication
    pub fn path_distance(&self, route: &[Cell]) -> Distance {
        route
            .windows(2)
            .map(|pair| self.distance(&pair[0], &pair[1]))
            .sum()
    }

    /// Search time for every distinct cell plus travel time along the route
    pub fn path_time(&self, route: &[Cell]) -> Time {
        self.time_for(distinct_count(route), self.path_distance(route))
    }

    /// Time for a route with `distinct` cells covering `distance` units
    pub fn time_for(&self, distinct: usize, distance: Distance) -> Time {
        self.search_time_per_cell * distinct as f64 + self.travel_time_per_unit * distance
    }

    /// Sum of the rewards of the distinct cells in the route
    pub fn total_reward(&self, route: &[Cell]) -> Reward {
        let mut seen = HashSet::new();
        route
            .iter()
            .filter(|cell| seen.insert(cell.id))
            .map(|cell| cell.reward)
            .sum()
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_SEARCH_TIME_PER_CELL,
            Self::DEFAULT_TRAVEL_TIME_PER_UNIT,
        )
    }
}

fn distinct_count(route: &[Cell]) -> usize {
    route.iter().map(|cell| cell.id).collect::<HashSet<_>>().len()
}
