// Nearest-neighbor heuristic

use tracing::{debug, trace};

use crate::algorithms::{prepare, RoutePlanner};
use crate::error::PlanError;
use crate::models::{Cell, CellId, Distance, PlannedRoute, PlannerConfig, Time};

/// Greedily extends the route to the unvisited cell closest to its end.
///
/// Rewards are ignored: the heuristic visits as many cells as it can and
/// stops at the first nearest cell whose closed route would exceed the
/// budget. Ties on distance go to the earliest cell in input order.
#[derive(Debug, Clone)]
pub struct NearestNeighbor {
    config: PlannerConfig,
}

impl NearestNeighbor {
    /// Creates a heuristic planner with the given configuration
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Builds the greedy route; see [`RoutePlanner::plan`]
    ///
    /// # Errors
    ///
    /// `EmptyCellSet`, `StartNotFound` or `InvalidInput` for bad input and
    /// `Infeasible` when the budget cannot cover the start cell.
    pub fn greedy_route(
        &self,
        cells: &[Cell],
        start: Option<CellId>,
    ) -> Result<PlannedRoute, PlanError> {
        let prepared = prepare(cells, start, &self.config)?;
        let start = prepared.start;
        let cost = self.config.cost;
        let budget = self.config.budget;

        let mut must_visit = prepared.others();
        let mut path = vec![start];
        let mut open_distance: Distance = 0.0;

        // Time of `path` closed back to the start, plus one more cell when given
        let closed_time = |path: &[Cell], open_distance: Distance, next: Option<&Cell>| -> Time {
            let last = path[path.len() - 1];
            match next {
                Some(next) => cost.time_for(
                    path.len() + 1,
                    open_distance + cost.distance(&last, next) + cost.distance(next, &start),
                ),
                None => cost.time_for(path.len(), open_distance + cost.distance(&last, &start)),
            }
        };

        while !must_visit.is_empty() && closed_time(&path, open_distance, None) < budget {
            let last = path[path.len() - 1];
            let nearest = must_visit
                .iter()
                .enumerate()
                .map(|(index, cell)| (index, cost.distance(&last, cell)))
                .min_by(|a, b| a.1.total_cmp(&b.1));
            let Some((index, step)) = nearest else {
                break;
            };

            let candidate = must_visit[index];
            let time = closed_time(&path, open_distance, Some(&candidate));
            if time > budget {
                trace!(cell = candidate.id, time, "nearest cell does not fit");
                break;
            }

            trace!(cell = candidate.id, step, time, "appended nearest cell");
            path.push(must_visit.remove(index));
            open_distance += step;
        }
        path.push(start);

        let planned = PlannedRoute::from_cells(path, &cost);
        debug!(
            visited = planned.searched_count(),
            unvisited = must_visit.len(),
            distance = planned.distance,
            time = planned.time,
            reward = planned.reward,
            "nearest neighbor route finished"
        );

        Ok(planned)
    }
}

impl Default for NearestNeighbor {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

impl RoutePlanner for NearestNeighbor {
    fn name(&self) -> &'static str {
        "Nearest Neighbour"
    }

    fn plan(&self, cells: &[Cell], start: Option<CellId>) -> Result<PlannedRoute, PlanError> {
        self.greedy_route(cells, start)
    }
}
