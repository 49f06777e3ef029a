use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use crate::error::PlanError;
use crate::models::{cells_from_points, Cell, Reward};

/// Seed used by the demo grids so runs are reproducible
pub const DEFAULT_SEED: u64 = 996;

/// Coordinates of a `columns x rows` unit grid, column by column
pub fn grid_points(columns: usize, rows: usize) -> Vec<(f64, f64)> {
    (0..columns)
        .flat_map(|x| (0..rows).map(move |y| (x as f64, y as f64)))
        .collect()
}

/// Grid where every cell carries the same reward
pub fn uniform_reward_grid(columns: usize, rows: usize, reward: Reward) -> Vec<Cell> {
    let points: Vec<(f64, f64, Reward)> = grid_points(columns, rows)
        .into_iter()
        .map(|(x, y)| (x, y, reward))
        .collect();
    cells_from_points(&points)
}

/// Grid whose rewards are drawn without replacement from `0..reward_range`.
///
/// The generator is seeded explicitly; the same seed always yields the same
/// grid.
///
/// # Errors
///
/// `PlanError::InvalidInput` when `reward_range` is smaller than the number
/// of cells, since rewards must be distinct.
pub fn random_reward_grid(
    columns: usize,
    rows: usize,
    reward_range: usize,
    seed: u64,
) -> Result<Vec<Cell>, PlanError> {
    let coordinates = grid_points(columns, rows);
    if reward_range < coordinates.len() {
        return Err(PlanError::InvalidInput(format!(
            "cannot draw {} distinct rewards from 0..{}",
            coordinates.len(),
            reward_range
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let rewards = index::sample(&mut rng, reward_range, coordinates.len());

    let points: Vec<(f64, f64, Reward)> = coordinates
        .into_iter()
        .zip(rewards.iter())
        .map(|((x, y), reward)| (x, y, reward as Reward))
        .collect();
    Ok(cells_from_points(&points))
}
