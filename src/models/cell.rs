// Cell model representing a searchable point of interest

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::models::{CellId, Location, Reward};

/// A point of interest with coordinates and a reward collected when searched.
///
/// Two cells are the same cell iff they share an `id`; coordinates and reward
/// play no part in "visited" bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Stable identifier, normally the index into the provider's output
    pub id: CellId,

    /// Position of the cell
    pub location: Location,

    /// Reward collected when the cell is searched
    pub reward: Reward,
}

impl Cell {
    /// Creates a new cell
    pub fn new(id: CellId, location: Location, reward: Reward) -> Self {
        Self {
            id,
            location,
            reward,
        }
    }

    /// Shorthand for a cell at `(x, y)`
    pub fn at(id: CellId, x: f64, y: f64, reward: Reward) -> Self {
        Self::new(id, Location::new(x, y), reward)
    }
}

/// Builds cells from raw `(x, y, reward)` triples.
///
/// Ids follow input position, except that a triple identical by value to an
/// earlier one reuses that earlier id, so accounting treats both as one cell.
pub fn cells_from_points(points: &[(f64, f64, Reward)]) -> Vec<Cell> {
    let mut first_seen: HashMap<(u64, u64, u64), CellId> = HashMap::new();

    points
        .iter()
        .enumerate()
        .map(|(index, &(x, y, reward))| {
            let key = (x.to_bits(), y.to_bits(), reward.to_bits());
            let id = *first_seen.entry(key).or_insert(index);
            Cell::at(id, x, y, reward)
        })
        .collect()
}

/// Returns the cells with distinct ids, keeping the first occurrence of each
/// and preserving input order.
pub fn distinct_cells<'a, I>(cells: I) -> Vec<Cell>
where
    I: IntoIterator<Item = &'a Cell>,
{
    let mut seen = HashSet::new();
    cells
        .into_iter()
        .filter(|cell| seen.insert(cell.id))
        .copied()
        .collect()
}
