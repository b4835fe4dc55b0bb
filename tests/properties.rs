//! Property checks for the planners, pruning and geodetic helpers.

use std::collections::VecDeque;
use std::f64::consts::SQRT_2;

use akash_nav::core::{GeoPoint, GridCoord};
use akash_nav::geo::{GeoGrid, offset_meters};
use akash_nav::grid::{ObstacleRect, OccupancyGrid};
use akash_nav::pathfinding::astar::{AStarPlanner, find_path};
use akash_nav::pathfinding::hybrid::{HybridAStarPlanner, KinematicPose};
use akash_nav::pathfinding::simplify::simplify;
use akash_nav::NavError;
use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Deterministic pseudo-random obstacle grid (LCG).
fn random_grid(rows: usize, cols: usize, density: f64, seed: u64) -> OccupancyGrid {
    let mut state = seed;
    let mut grid = OccupancyGrid::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let sample = (state >> 11) as f64 / (1u64 << 53) as f64;
            if sample < density {
                grid.set(GridCoord::new(row, col), true).unwrap();
            }
        }
    }
    grid
}

fn octile(a: GridCoord, b: GridCoord) -> f64 {
    let dr = a.row.abs_diff(b.row) as f64;
    let dc = a.col.abs_diff(b.col) as f64;
    dr.max(dc) + (SQRT_2 - 1.0) * dr.min(dc)
}

fn cuts_corner(grid: &OccupancyGrid, from: GridCoord, to: GridCoord) -> bool {
    if from.row == to.row || from.col == to.col {
        return false;
    }
    grid.is_occupied(GridCoord::new(from.row, to.col))
        && grid.is_occupied(GridCoord::new(to.row, from.col))
}

/// Breadth-first reachability under the same move rules as the planner.
fn reachable(grid: &OccupancyGrid, start: GridCoord, goal: GridCoord) -> bool {
    if grid.is_occupied(goal) {
        return false;
    }
    let mut seen = vec![false; grid.rows() * grid.cols()];
    let mut queue = VecDeque::from([start]);
    seen[start.row * grid.cols() + start.col] = true;

    while let Some(cell) = queue.pop_front() {
        if cell == goal {
            return true;
        }
        for d_row in -1isize..=1 {
            for d_col in -1isize..=1 {
                let Some(next) = cell.offset(d_row, d_col) else {
                    continue;
                };
                if !grid.is_valid_coord(next) || grid.is_occupied(next) || cuts_corner(grid, cell, next) {
                    continue;
                }
                let idx = next.row * grid.cols() + next.col;
                if !seen[idx] {
                    seen[idx] = true;
                    queue.push_back(next);
                }
            }
        }
    }
    false
}

#[test]
fn astar_cost_is_octile_distance_on_free_grids() {
    for (rows, cols) in [(1, 12), (7, 7), (13, 29), (40, 17)] {
        let grid = OccupancyGrid::new(rows, cols);
        let corners = [
            GridCoord::new(0, 0),
            GridCoord::new(rows - 1, cols - 1),
            GridCoord::new(rows / 2, 0),
            GridCoord::new(0, cols / 3),
            GridCoord::new(rows - 1, cols / 2),
        ];
        for &start in &corners {
            for &goal in &corners {
                let result = find_path(&grid, start, goal).unwrap();
                assert_relative_eq!(result.cost, octile(start, goal), epsilon = 1e-9);
                assert_eq!(result.path.len(), start.chebyshev_distance(&goal) + 1);
            }
        }
    }
}

#[test]
fn astar_finds_path_exactly_when_one_exists() {
    for seed in 0..20 {
        let mut grid = random_grid(24, 24, 0.3, seed);
        let start = GridCoord::new(0, 0);
        let goal = GridCoord::new(23, 23);
        grid.set(start, false).unwrap();
        grid.set(goal, false).unwrap();

        let expected = reachable(&grid, start, goal);
        match find_path(&grid, start, goal) {
            Ok(result) => {
                assert!(expected, "seed {seed}: path found but goal unreachable");
                assert_eq!(result.path.first(), Some(&start));
                assert_eq!(result.path.last(), Some(&goal));
                for pair in result.path.windows(2) {
                    assert!(pair[0].chebyshev_distance(&pair[1]) == 1);
                    assert!(grid.is_free(pair[1]));
                    assert!(!cuts_corner(&grid, pair[0], pair[1]), "seed {seed}: corner cut");
                }
            }
            Err(NavError::NoPathFound { .. }) => assert!(!expected, "seed {seed}: missed a path"),
            Err(e) => panic!("seed {seed}: unexpected error {e}"),
        }
    }
}

#[test]
fn astar_matches_dijkstra_cost_on_cluttered_grids() {
    for seed in 100..110 {
        let mut grid = random_grid(30, 30, 0.25, seed);
        let start = GridCoord::new(2, 1);
        let goal = GridCoord::new(27, 28);
        grid.set(start, false).unwrap();
        grid.set(goal, false).unwrap();

        let planner = AStarPlanner::with_defaults(&grid);
        match (
            planner.find_path(start, goal),
            planner.find_path_with_heuristic(start, goal, |_, _| 0.0),
        ) {
            (Ok(a), Ok(d)) => assert_relative_eq!(a.cost, d.cost, epsilon = 1e-9),
            (Err(_), Err(_)) => {}
            (a, d) => panic!("seed {seed}: planners disagree: {a:?} vs {d:?}"),
        }
    }
}

#[test]
fn enclosed_goal_is_unreachable() {
    let mut grid = OccupancyGrid::new(20, 20);
    grid.fill_rect(ObstacleRect::from_corners(GridCoord::new(8, 8), GridCoord::new(13, 13)));
    for row in 9..12 {
        for col in 9..12 {
            grid.set(GridCoord::new(row, col), false).unwrap();
        }
    }

    let err = find_path(&grid, GridCoord::new(0, 0), GridCoord::new(10, 10)).unwrap_err();
    assert!(matches!(err, NavError::NoPathFound { .. }));
}

#[test]
fn pruning_is_idempotent_on_planned_paths() {
    for seed in 0..10 {
        let mut grid = random_grid(32, 32, 0.2, seed + 500);
        let start = GridCoord::new(0, 31);
        let goal = GridCoord::new(31, 0);
        grid.set(start, false).unwrap();
        grid.set(goal, false).unwrap();

        let Ok(result) = find_path(&grid, start, goal) else {
            continue;
        };
        let once = simplify(&result.path);
        assert_eq!(simplify(&once), once);
        assert_eq!(once.first(), result.path.first());
        assert_eq!(once.last(), result.path.last());
        assert!(once.len() <= result.path.len());
    }
}

#[test]
fn geodetic_zero_offset_and_magnitude() {
    for lat in [-80.0, -33.3, 0.0, 38.1614, 60.0, 89.0] {
        let p = GeoPoint::new(lat, 151.2);
        assert_eq!(offset_meters(p, 0.0, 0.0).unwrap(), p);
    }

    let north = offset_meters(GeoPoint::new(0.0, 0.0), 111_320.0, 0.0).unwrap();
    assert_abs_diff_eq!(north.lat, 1.0, epsilon = 1e-2);
    assert_eq!(north.lon, 0.0);

    assert!(matches!(
        offset_meters(GeoPoint::new(90.0, 0.0), 1.0, 1.0),
        Err(NavError::InvalidLatitude(_))
    ));
}

#[test]
fn grid_round_trip_on_axis_samples() {
    let geo = GeoGrid::new(38.1598, 38.163, -122.457, -122.451, 200, 200).unwrap();
    for i in [0, 1, 57, 123, 198, 199] {
        let p = GeoPoint::new(geo.lat_samples()[i], geo.lon_samples()[199 - i]);
        let back = geo.to_geo(geo.to_cell(p).unwrap()).unwrap();
        assert_eq!(back, p);
    }
}

#[test]
fn hybrid_path_is_kinematically_feasible_around_obstacles() {
    let geo = GeoGrid::new(0.0, 0.001, 0.0, 0.001, 51, 51).unwrap();
    let mut grid = OccupancyGrid::new(51, 51);
    grid.fill_rect(ObstacleRect::from_corners(GridCoord::new(0, 24), GridCoord::new(35, 27)));
    let planner = HybridAStarPlanner::with_defaults(&geo, &grid).unwrap();

    let path = planner
        .find_path(
            KinematicPose::new(0.0002, 0.0002, 0.0),
            GeoPoint::new(0.0002, 0.0009),
        )
        .unwrap();

    for w in &path.waypoints {
        assert!(!grid.is_occupied(GridCoord::new(w.y, w.x)) || w == &path.waypoints[0]);
    }
    for pair in path.waypoints.windows(2) {
        let from = pair[0].pose();
        let to = pair[1].pose();
        let steps = planner
            .steering_angles()
            .iter()
            .filter(|&&steer| {
                let next = planner.model().step(&from, steer);
                next.lat == to.lat && next.lon == to.lon && next.yaw == to.yaw
            })
            .count();
        assert!(steps >= 1, "{from:?} -> {to:?} is not one model step");
    }
}
