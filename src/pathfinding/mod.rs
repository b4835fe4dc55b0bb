//! Path planning over the geographic grid.
//!
//! - **A\* Search**: shortest 8-connected path between cells
//! - **Hybrid A\***: kinematically feasible path under a bicycle model
//! - **Simplification**: drop collinear intermediate waypoints
//! - **Routing**: geographic endpoints in, geographic waypoints out
//!
//! ## A* Pathfinding
//!
//! ```rust,ignore
//! use akash_nav::pathfinding::{AStarPlanner, AStarConfig};
//!
//! let planner = AStarPlanner::new(&grid, AStarConfig::default());
//! let result = planner.find_path(start, goal)?;
//! println!("{} cells, cost {:.2}", result.len(), result.cost);
//! ```
//!
//! ## Geographic routes
//!
//! ```rust,ignore
//! use akash_nav::pathfinding::RoutePlanner;
//!
//! let route = RoutePlanner::new(geo, grid)?.plan_discrete(home, target)?;
//! for wp in &route.waypoints {
//!     println!("{:.7}, {:.7}", wp.lat, wp.lon);
//! }
//! ```

pub mod astar;
pub mod hybrid;
pub mod route;
pub mod simplify;

pub use astar::{AStarConfig, AStarPlanner, Heuristic, PathResult, find_path, path_exists};
pub use hybrid::{
    BicycleModel, HybridAStarPlanner, HybridConfig, KinematicPath, KinematicPose,
    KinematicWaypoint,
};
pub use route::{GeoRoute, RoutePlanner};
pub use simplify::{DEFAULT_COLLINEARITY_EPSILON, PlanarPoint, simplify, simplify_path};
