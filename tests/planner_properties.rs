// Integration tests for the budget, accounting and determinism guarantees
use cell_route_planner::models::{cells_from_points, Cell, CostModel, PlannerConfig};
use cell_route_planner::utils::init_cells::random_reward_grid;
use cell_route_planner::{BoundedPermutationSearch, NearestNeighbor, PlanError, RoutePlanner};
use itertools::Itertools;

fn planners(config: PlannerConfig) -> Vec<Box<dyn RoutePlanner>> {
    vec![
        Box::new(BoundedPermutationSearch::new(config)),
        Box::new(NearestNeighbor::new(config)),
    ]
}

#[test]
fn test_routes_never_exceed_budget() {
    for seed in 0..5 {
        let cells = random_reward_grid(3, 3, 20, seed).unwrap();
        for budget in [6.0, 10.0, 25.0, 40.0, 80.0, 500.0] {
            for planner in planners(PlannerConfig::new(budget, 500)) {
                let route = planner.plan(&cells, None).unwrap();
                assert!(
                    route.fits(budget),
                    "{} exceeded budget {} with {}",
                    planner.name(),
                    budget,
                    route.time
                );
            }
        }
    }
}

#[test]
fn test_two_cells_on_a_line_are_both_visited() {
    let cells = cells_from_points(&[(0.0, 0.0, 0.0), (1.0, 0.0, 5.0), (2.0, 0.0, 5.0)]);
    let config = PlannerConfig::new(20.0, 2);

    let route = BoundedPermutationSearch::new(config).plan(&cells, None).unwrap();

    assert_eq!(route.searched_count(), 3);
    assert!(route.fits(20.0));
    assert_eq!(route.reward, 10.0);
}

#[test]
fn test_budget_below_search_cost_is_infeasible() {
    let cells = cells_from_points(&[(0.0, 0.0, 0.0), (1.0, 0.0, 5.0), (2.0, 0.0, 5.0)]);

    for planner in planners(PlannerConfig::new(3.0, 10)) {
        assert_eq!(
            planner.plan(&cells, None).unwrap_err(),
            PlanError::Infeasible {
                budget: 3.0,
                minimum_time: 6.0
            }
        );
    }
}

#[test]
fn test_collinear_equal_rewards() {
    let cells = cells_from_points(&[
        (0.0, 0.0, 1.0),
        (2.0, 0.0, 1.0),
        (1.0, 0.0, 1.0),
        (3.0, 0.0, 1.0),
    ]);
    let config = PlannerConfig::new(500.0, 24);

    let nearest = NearestNeighbor::new(config).plan(&cells, None).unwrap();
    assert_eq!(nearest.ids(), vec![0, 2, 1, 3, 0]);

    // The shortest start-fixed ordering over all permutations
    let shortest = cells[1..]
        .iter()
        .copied()
        .permutations(3)
        .map(|rest| {
            let mut route = vec![cells[0]];
            route.extend(rest);
            route.push(cells[0]);
            config.cost.path_distance(&route)
        })
        .fold(f64::INFINITY, f64::min);

    let brute_force = BoundedPermutationSearch::new(config).plan(&cells, None).unwrap();
    assert_eq!(brute_force.distance, shortest);
    assert_eq!(brute_force.distance, 6.0);
}

#[test]
fn test_duplicate_cells_are_counted_once() {
    let cells = cells_from_points(&[
        (0.0, 0.0, 0.0),
        (3.0, 4.0, 4.0),
        (3.0, 4.0, 4.0),
        (0.0, 4.0, 2.0),
    ]);
    let cost = CostModel::default();

    let with_duplicate = vec![cells[0], cells[1], cells[2], cells[3], cells[0]];
    assert_eq!(cost.total_reward(&with_duplicate), 6.0);
    // 3 distinct cells, 5 + 0 + 3 + 4 units of travel
    assert_eq!(cost.path_time(&with_duplicate), 18.0 + 6.0);

    for planner in planners(PlannerConfig::new(100.0, 24)) {
        let route = planner.plan(&cells, None).unwrap();
        assert_eq!(route.searched_count(), 3);
        assert_eq!(route.reward, 6.0);
        assert!(route.ids().iter().filter(|id| **id == 1).count() == 1);
    }
}

#[test]
fn test_reward_ignores_order_of_non_start_cells() {
    let cells = random_reward_grid(2, 3, 10, 7).unwrap();
    let cost = CostModel::default();
    let start = cells[0];

    let rewards: Vec<f64> = cells[1..]
        .iter()
        .copied()
        .permutations(cells.len() - 1)
        .take(50)
        .map(|rest| {
            let mut route = vec![start];
            route.extend(rest);
            route.push(start);
            cost.total_reward(&route)
        })
        .collect();

    assert!(rewards.iter().all(|r| *r == rewards[0]));
}

#[test]
fn test_path_distance_zero_only_without_movement() {
    let cost = CostModel::default();
    let a = Cell::at(0, 1.0, 1.0, 0.0);
    let b = Cell::at(1, 1.0, 1.0, 3.0);
    let c = Cell::at(2, 2.0, 1.0, 3.0);

    assert_eq!(cost.path_distance(&[a]), 0.0);
    assert_eq!(cost.path_distance(&[a, b, a]), 0.0);
    assert!(cost.path_distance(&[a, c, a]) > 0.0);
}

#[test]
fn test_cost_functions_are_pure() {
    let cells = random_reward_grid(3, 2, 10, 3).unwrap();
    let cost = CostModel::default();
    let mut route = cells.clone();
    route.push(cells[0]);

    assert_eq!(cost.path_distance(&route), cost.path_distance(&route));
    assert_eq!(cost.path_time(&route), cost.path_time(&route));
    assert_eq!(cost.total_reward(&route), cost.total_reward(&route));
}

#[test]
fn test_nearest_neighbor_is_deterministic() {
    let cells = random_reward_grid(4, 4, 30, 11).unwrap();
    let planner = NearestNeighbor::new(PlannerConfig::new(90.0, 1));

    let first = planner.plan(&cells, Some(5)).unwrap();
    for _ in 0..3 {
        assert_eq!(planner.plan(&cells, Some(5)).unwrap(), first);
    }
}

#[test]
fn test_invalid_input_fails_fast() {
    let cells = cells_from_points(&[(0.0, 0.0, 0.0)]);

    for planner in planners(PlannerConfig::default()) {
        assert_eq!(planner.plan(&[], None).unwrap_err(), PlanError::EmptyCellSet);
        assert_eq!(
            planner.plan(&cells, Some(42)).unwrap_err(),
            PlanError::StartNotFound { id: 42 }
        );
    }
    // A NaN coordinate would make every time comparison false
    let with_nan = cells_from_points(&[(0.0, 0.0, 0.0), (f64::NAN, 0.0, 5.0), (1.0, 0.0, 1.0)]);
    for planner in planners(PlannerConfig::new(20.0, 10)) {
        assert!(matches!(
            planner.plan(&with_nan, None),
            Err(PlanError::InvalidInput(_))
        ));
    }
    for planner in planners(PlannerConfig::new(20.0, 0)) {
        assert!(matches!(
            planner.plan(&cells, None),
            Err(PlanError::InvalidInput(_))
        ));
    }
}
