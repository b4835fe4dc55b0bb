//! Hybrid A* over a position and heading configuration space.
//!
//! Successors come from integrating a kinematic bicycle one fixed step under
//! each steering angle in `[+max, -max]`. Every step costs 1, the heuristic
//! is the Manhattan distance in cells, and the goal is reached when the
//! current cell equals the goal cell whatever the heading.

mod motion;
mod planner;
mod types;

pub use motion::{BicycleModel, KinematicPose, heading_bucket};
pub use planner::HybridAStarPlanner;
pub use types::{ConfigState, HybridConfig, KinematicPath, KinematicWaypoint};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GeoPoint, GridCoord};
    use crate::error::NavError;
    use crate::geo::GeoGrid;
    use crate::grid::{ObstacleRect, OccupancyGrid};

    /// 51x51 box with 2e-5° spacing, one model step per cell.
    fn small_box() -> GeoGrid {
        GeoGrid::new(0.0, 0.001, 0.0, 0.001, 51, 51).unwrap()
    }

    #[test]
    fn test_reaches_goal_cell() {
        let geo = small_box();
        let grid = OccupancyGrid::new(51, 51);
        let planner = HybridAStarPlanner::with_defaults(&geo, &grid).unwrap();

        let goal = GeoPoint::new(0.0008, 0.0008);
        let path = planner
            .find_path(KinematicPose::new(0.0002, 0.0002, 0.0), goal)
            .unwrap();

        let last = path.waypoints.last().unwrap();
        let goal_cell = geo.to_cell(goal).unwrap();
        assert_eq!((last.y, last.x), (goal_cell.row, goal_cell.col));
        assert_eq!(path.waypoints[0].pose(), KinematicPose::new(0.0002, 0.0002, 0.0));
        assert!(path.nodes_expanded >= path.len());
    }

    #[test]
    fn test_consecutive_poses_follow_the_model() {
        let geo = small_box();
        let grid = OccupancyGrid::new(51, 51);
        let planner = HybridAStarPlanner::with_defaults(&geo, &grid).unwrap();

        let path = planner
            .find_path(
                KinematicPose::new(0.0005, 0.0001, 0.0),
                GeoPoint::new(0.0001, 0.0006),
            )
            .unwrap();

        for pair in path.waypoints.windows(2) {
            let from = pair[0].pose();
            let to = pair[1].pose();
            let feasible = planner.steering_angles().iter().any(|&steer| {
                let next = planner.model().step(&from, steer);
                (next.lat - to.lat).abs() < 1e-15
                    && (next.lon - to.lon).abs() < 1e-15
                    && (next.yaw - to.yaw).abs() < 1e-12
            });
            assert!(feasible, "no steering angle explains {from:?} -> {to:?}");
        }
    }

    #[test]
    fn test_closed_pairs_are_unique() {
        let geo = small_box();
        let grid = OccupancyGrid::new(51, 51);
        let planner = HybridAStarPlanner::with_defaults(&geo, &grid).unwrap();

        let path = planner
            .find_path(
                KinematicPose::new(0.0002, 0.0002, 0.0),
                GeoPoint::new(0.0009, 0.0003),
            )
            .unwrap();

        let mut seen = std::collections::HashSet::new();
        for w in &path.waypoints {
            let key = (heading_bucket(w.yaw, 45), w.y, w.x);
            assert!(seen.insert(key), "state {key:?} visited twice");
        }
    }

    #[test]
    fn test_manhattan_heuristic_overestimates_diagonal_runs() {
        let geo = small_box();
        let grid = OccupancyGrid::new(51, 51);
        let planner = HybridAStarPlanner::with_defaults(&geo, &grid).unwrap();

        let start = KinematicPose::new(0.0002, 0.0002, std::f64::consts::FRAC_PI_4);
        let goal = GeoPoint::new(0.0006, 0.0006);
        let path = planner.find_path(start, goal).unwrap();

        // Each diagonal step costs 1 but shrinks the Manhattan estimate by ~1.41,
        // so the start estimate exceeds the cost actually paid.
        let start_cell = geo.to_cell(start.position()).unwrap();
        let goal_cell = geo.to_cell(goal).unwrap();
        let estimate = start_cell.manhattan_distance(&goal_cell);
        assert!(path.len() - 1 < estimate);
    }

    #[test]
    fn test_thick_wall_blocks() {
        let geo = small_box();
        let mut grid = OccupancyGrid::new(51, 51);
        grid.fill_rect(ObstacleRect::from_corners(
            GridCoord::new(24, 0),
            GridCoord::new(27, 51),
        ));
        let planner = HybridAStarPlanner::with_defaults(&geo, &grid).unwrap();

        let err = planner
            .find_path(
                KinematicPose::new(0.0002, 0.0005, 0.0),
                GeoPoint::new(0.0009, 0.0005),
            )
            .unwrap_err();
        assert!(matches!(err, NavError::NoPathFound { expanded } if expanded > 0));
    }

    #[test]
    fn test_start_in_goal_cell() {
        let geo = small_box();
        let grid = OccupancyGrid::new(51, 51);
        let planner = HybridAStarPlanner::with_defaults(&geo, &grid).unwrap();

        let path = planner
            .find_path(
                KinematicPose::new(0.0004, 0.0004, 1.0),
                GeoPoint::new(0.0004, 0.0004),
            )
            .unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.nodes_expanded, 1);
    }

    #[test]
    fn test_successors_leaving_the_box_are_discarded() {
        let geo = small_box();
        let grid = OccupancyGrid::new(51, 51);
        let planner = HybridAStarPlanner::with_defaults(&geo, &grid).unwrap();

        // On the east edge heading north: every right turn exits the box
        let start = KinematicPose::new(0.0002, geo.lon_max(), std::f64::consts::FRAC_PI_2);
        let right = planner.steering_angles()[planner.steering_angles().len() - 1];
        let outward = planner.model().step(&planner.model().step(&start, right), 0.0);
        assert!(!geo.contains(outward.position()));

        let goal = GeoPoint::new(0.0008, 0.0003);
        let path = planner.find_path(start, goal).unwrap();

        assert!(path.waypoints.iter().all(|w| geo.contains(w.position())));
        let last = path.waypoints.last().unwrap();
        let goal_cell = geo.to_cell(goal).unwrap();
        assert_eq!((last.y, last.x), (goal_cell.row, goal_cell.col));
    }

    #[test]
    fn test_out_of_bounds_endpoints() {
        let geo = small_box();
        let grid = OccupancyGrid::new(51, 51);
        let planner = HybridAStarPlanner::with_defaults(&geo, &grid).unwrap();

        let err = planner
            .find_path(KinematicPose::new(0.002, 0.0005, 0.0), GeoPoint::new(0.0005, 0.0005))
            .unwrap_err();
        assert!(matches!(err, NavError::OutOfBounds { .. }));

        let err = planner
            .find_path(KinematicPose::new(0.0005, 0.0005, 0.0), GeoPoint::new(0.0005, -0.1))
            .unwrap_err();
        assert!(matches!(err, NavError::OutOfBounds { .. }));
    }

    #[test]
    fn test_state_space_overflow_rejected() {
        let geo = small_box();
        let grid = OccupancyGrid::new(51, 51);
        let config = HybridConfig {
            heading_cells: usize::MAX,
            ..HybridConfig::default()
        };
        assert!(matches!(
            HybridAStarPlanner::new(&geo, &grid, config),
            Err(NavError::InvalidGrid(_))
        ));
    }

    #[test]
    fn test_grid_shape_mismatch() {
        let geo = small_box();
        let grid = OccupancyGrid::new(50, 51);
        assert!(matches!(
            HybridAStarPlanner::with_defaults(&geo, &grid),
            Err(NavError::InvalidGrid(_))
        ));
    }
}
