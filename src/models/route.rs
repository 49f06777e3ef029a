// Route model bundling a visiting order with its costs

use serde::{Deserialize, Serialize};

use crate::models::{Cell, CellId, CostModel, Distance, Reward, Time};

/// A closed route together with the costs computed when it was planned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedRoute {
    /// Cells in visiting order, starting and ending at the start cell
    pub cells: Vec<Cell>,

    /// Total travelled distance, return leg included
    pub distance: Distance,

    /// Total time under the cost model used for planning
    pub time: Time,

    /// Reward of the distinct cells visited
    pub reward: Reward,
}

impl PlannedRoute {
    /// Scores `cells` with `cost` and bundles the result
    pub fn from_cells(cells: Vec<Cell>, cost: &CostModel) -> Self {
        let distance = cost.path_distance(&cells);
        let time = cost.path_time(&cells);
        let reward = cost.total_reward(&cells);

        Self {
            cells,
            distance,
            time,
            reward,
        }
    }

    /// Ids in visiting order
    pub fn ids(&self) -> Vec<CellId> {
        self.cells.iter().map(|cell| cell.id).collect()
    }

    /// Number of cells searched, the start included
    pub fn searched_count(&self) -> usize {
        // A closed route lists its start twice
        match (self.cells.first(), self.cells.last()) {
            (Some(first), Some(last)) if self.cells.len() > 1 && first.id == last.id => {
                self.cells.len() - 1
            }
            _ => self.cells.len(),
        }
    }

    /// True when the route only leaves and returns to the start
    pub fn is_start_only(&self) -> bool {
        self.searched_count() <= 1
    }

    /// Whether the route fits within `budget`
    pub fn fits(&self, budget: Time) -> bool {
        self.time <= budget
    }
}
