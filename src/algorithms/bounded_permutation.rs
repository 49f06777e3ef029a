// Bounded permutation search ("brute force" strategy)

use itertools::Itertools;
use tracing::{debug, trace};

use crate::algorithms::trimmer::{sort_by_reward_desc, FeasibilityTrimmer};
use crate::algorithms::{prepare, RoutePlanner};
use crate::error::PlanError;
use crate::models::{Cell, CellId, Distance, PlannedRoute, PlannerConfig};

/// Enumerates a capped number of permutations of the cell set and keeps the
/// shortest feasible route built from them.
///
/// Each permutation that begins at the start cell is turned into the
/// candidate `[start] + rest sorted by descending reward + [start]` and
/// trimmed to the budget; the minimum-distance trimmed candidate wins, the
/// earliest one on ties.
///
/// The cap counts raw permutations in lexicographic index order, including
/// those rejected for not beginning at the start cell. With a start other than
/// the first input cell the first `(n - 1)!` permutations are all rejected.
#[derive(Debug, Clone)]
pub struct BoundedPermutationSearch {
    config: PlannerConfig,
}

impl BoundedPermutationSearch {
    /// Creates a search with the given configuration
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Runs the search; see [`RoutePlanner::plan`]
    ///
    /// # Errors
    ///
    /// `EmptyCellSet`, `StartNotFound` or `InvalidInput` for bad input,
    /// `Infeasible` when the budget cannot cover the start cell, and
    /// `NoCandidateFound` when no enumerated permutation begins at the start.
    pub fn search(&self, cells: &[Cell], start: Option<CellId>) -> Result<PlannedRoute, PlanError> {
        let prepared = prepare(cells, start, &self.config)?;
        let start = prepared.start;
        let cost = self.config.cost;
        let trimmer = FeasibilityTrimmer::new(cost, self.config.budget);

        let mut best: Option<(Distance, Vec<Cell>)> = None;
        let mut examined = 0usize;
        let mut retained = 0usize;

        let size = prepared.cells.len();
        for permutation in prepared
            .cells
            .iter()
            .copied()
            .permutations(size)
            .take(self.config.max_permutations)
        {
            examined += 1;
            if permutation[0].id != start.id {
                continue;
            }
            retained += 1;

            let mut rest = permutation[1..].to_vec();
            sort_by_reward_desc(&mut rest);
            let trimmed = trimmer.trim(start, rest)?;
            let distance = cost.path_distance(&trimmed.route);
            trace!(
                permutation = examined,
                distance,
                dropped = trimmed.dropped.len(),
                "trimmed candidate"
            );

            if best.as_ref().map_or(true, |(shortest, _)| distance < *shortest) {
                best = Some((distance, trimmed.route));
            }
        }

        let (_, route) = best.ok_or(PlanError::NoCandidateFound {
            max_permutations: self.config.max_permutations,
        })?;
        let planned = PlannedRoute::from_cells(route, &cost);
        debug!(
            examined,
            retained,
            distance = planned.distance,
            time = planned.time,
            reward = planned.reward,
            "bounded permutation search finished"
        );

        Ok(planned)
    }
}

impl Default for BoundedPermutationSearch {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

impl RoutePlanner for BoundedPermutationSearch {
    fn name(&self) -> &'static str {
        "Brute force"
    }

    fn plan(&self, cells: &[Cell], start: Option<CellId>) -> Result<PlannedRoute, PlanError> {
        self.search(cells, start)
    }
}
