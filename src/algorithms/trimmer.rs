// Feasibility trimming: drop the lowest-reward cells until a route fits

use tracing::trace;

use crate::error::PlanError;
use crate::models::{Cell, CostModel, Time};

/// Sorts cells by descending reward.
///
/// The sort is stable: among equal rewards the input order is kept, so the
/// trimmer drops the later of two equally rewarded cells first.
pub fn sort_by_reward_desc(cells: &mut [Cell]) {
    cells.sort_by(|a, b| b.reward.total_cmp(&a.reward));
}

/// Outcome of trimming one candidate
#[derive(Debug, Clone, PartialEq)]
pub struct Trimmed {
    /// Closed feasible route `[start] + kept + [start]`
    pub route: Vec<Cell>,

    /// Removed cells, in the order they were dropped
    pub dropped: Vec<Cell>,
}

/// Shrinks a reward-ordered candidate until its time fits the budget
#[derive(Debug, Clone, Copy)]
pub struct FeasibilityTrimmer {
    cost: CostModel,
    budget: Time,
}

impl FeasibilityTrimmer {
    pub fn new(cost: CostModel, budget: Time) -> Self {
        Self { cost, budget }
    }

    /// Returns the longest prefix of `ordered_rest` whose closed route from
    /// `start` fits the budget.
    ///
    /// `ordered_rest` is expected in descending reward order (see
    /// [`sort_by_reward_desc`]); cells are removed from its tail one at a time.
    ///
    /// # Errors
    ///
    /// `PlanError::Infeasible` when even `[start, start]` exceeds the budget.
    pub fn trim(&self, start: Cell, ordered_rest: Vec<Cell>) -> Result<Trimmed, PlanError> {
        let mut route = Vec::with_capacity(ordered_rest.len() + 2);
        route.push(start);
        route.extend(ordered_rest);
        route.push(start);

        let mut dropped = Vec::new();
        let mut time = self.cost.path_time(&route);

        while time > self.budget {
            if route.len() <= 2 {
                return Err(PlanError::Infeasible {
                    budget: self.budget,
                    minimum_time: time,
                });
            }
            let removed = route.remove(route.len() - 2);
            time = self.cost.path_time(&route);
            trace!(
                cell = removed.id,
                reward = removed.reward,
                time,
                "dropped lowest-reward cell"
            );
            dropped.push(removed);
        }

        Ok(Trimmed { route, dropped })
    }
}
