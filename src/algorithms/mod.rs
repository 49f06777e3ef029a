pub mod bounded_permutation;
pub mod nearest_neighbor;
pub mod trimmer;

use crate::error::PlanError;
use crate::models::{distinct_cells, Cell, CellId, PlannedRoute, PlannerConfig};

/// Trait for budget-constrained route planners
pub trait RoutePlanner {
    /// Short name used when reporting results
    fn name(&self) -> &'static str;

    /// Plans a closed route over `cells`, starting and ending at `start`
    /// (the first cell when `None`)
    fn plan(&self, cells: &[Cell], start: Option<CellId>) -> Result<PlannedRoute, PlanError>;
}

/// Cell set prepared for a planning run: validated, deduplicated by id, with
/// the start resolved and separated from the rest
#[derive(Debug, Clone)]
pub(crate) struct PreparedCells {
    pub start: Cell,
    /// Distinct cells in input order, the start included
    pub cells: Vec<Cell>,
}

impl PreparedCells {
    /// Distinct cells other than the start, in input order
    pub fn others(&self) -> Vec<Cell> {
        self.cells
            .iter()
            .filter(|cell| cell.id != self.start.id)
            .copied()
            .collect()
    }
}

/// Validates inputs shared by every strategy.
///
/// Works on a private copy of `cells`; the caller's slice is untouched.
pub(crate) fn prepare(
    cells: &[Cell],
    start: Option<CellId>,
    config: &PlannerConfig,
) -> Result<PreparedCells, PlanError> {
    config.validate()?;

    let distinct = distinct_cells(cells);
    if distinct.is_empty() {
        return Err(PlanError::EmptyCellSet);
    }
    if let Some(cell) = distinct.iter().find(|cell| !is_finite(cell)) {
        return Err(PlanError::InvalidInput(format!(
            "cell {} has a non-finite coordinate or reward ({}, {}, {})",
            cell.id, cell.location.x, cell.location.y, cell.reward
        )));
    }
    let start = match start {
        Some(id) => *distinct
            .iter()
            .find(|cell| cell.id == id)
            .ok_or(PlanError::StartNotFound { id })?,
        None => *distinct.first().ok_or(PlanError::EmptyCellSet)?,
    };

    let minimum_time = config.cost.path_time(&[start, start]);
    if minimum_time > config.budget {
        return Err(PlanError::Infeasible {
            budget: config.budget,
            minimum_time,
        });
    }

    Ok(PreparedCells {
        start,
        cells: distinct,
    })
}

fn is_finite(cell: &Cell) -> bool {
    cell.location.x.is_finite() && cell.location.y.is_finite() && cell.reward.is_finite()
}
