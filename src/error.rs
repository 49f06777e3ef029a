use thiserror::Error;

use crate::models::{CellId, Time};

/// Failure outcomes of a planning run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("cell set is empty")]
    EmptyCellSet,

    #[error("start cell {id} is not part of the cell set")]
    StartNotFound { id: CellId },

    #[error("invalid planner input: {0}")]
    InvalidInput(String),

    #[error("budget {budget} is below the {minimum_time} needed to search the start cell alone")]
    Infeasible { budget: Time, minimum_time: Time },

    #[error("no permutation starting at the start cell within the first {max_permutations}")]
    NoCandidateFound { max_permutations: usize },
}
