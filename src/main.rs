use cell_route_planner::models::{Cell, PlannedRoute, PlannerConfig};
use cell_route_planner::utils::init_cells::{random_reward_grid, uniform_reward_grid, DEFAULT_SEED};
use cell_route_planner::{BoundedPermutationSearch, NearestNeighbor, RoutePlanner};
use std::error::Error;
use std::fs;
use tracing_subscriber::EnvFilter;

const GRID_COLUMNS: usize = 5;
const GRID_ROWS: usize = 6;
const REWARD_RANGE: usize = 40;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Reads a planner configuration from the JSON file named by the first
/// argument, or falls back to the defaults
fn load_config() -> Result<PlannerConfig, Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!("Loading planner configuration from {}", path);
            serde_json::from_str(&fs::read_to_string(path)?)?
        }
        None => PlannerConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn report(planner: &dyn RoutePlanner, cells: &[Cell]) -> Option<PlannedRoute> {
    let start_time = std::time::Instant::now();
    let result = planner.plan(cells, None);
    let elapsed = start_time.elapsed();

    match result {
        Ok(route) => {
            println!("{} route (found in {:.2?}):", planner.name(), elapsed);
            println!("  Cells: {:?}", route.ids());
            println!("  Total distance travelled: {:.2}", route.distance);
            println!("  Total time: {:.2} seconds", route.time);
            println!("  Total reward: {:.1}", route.reward);
            Some(route)
        }
        Err(e) => {
            tracing::error!("{} failed: {}", planner.name(), e);
            None
        }
    }
}

fn compare(title: &str, cells: &[Cell], config: PlannerConfig) {
    println!(
        "\n{} ({} cells, time limit: {}s, max permutations: {})",
        title,
        cells.len(),
        config.budget,
        config.max_permutations
    );
    println!("------------------------------------------");

    let brute_force = report(&BoundedPermutationSearch::new(config), cells);
    let nearest = report(&NearestNeighbor::new(config), cells);

    if let (Some(brute_force), Some(nearest)) = (brute_force, nearest) {
        println!(
            "  Nearest neighbour collects {:+.1} reward over {:+.2} distance relative to brute force.",
            nearest.reward - brute_force.reward,
            nearest.distance - brute_force.distance
        );
    }
}

fn main() {
    enable_tracing();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Error loading planner configuration: {}", e);
            return;
        }
    };

    let uniform = uniform_reward_grid(GRID_COLUMNS, GRID_ROWS, 1.0);
    compare("Uniform reward", &uniform, config);

    match random_reward_grid(GRID_COLUMNS, GRID_ROWS, REWARD_RANGE, DEFAULT_SEED) {
        Ok(random) => compare("Random reward", &random, config),
        Err(e) => tracing::error!("Error generating random rewards: {}", e),
    }
}
