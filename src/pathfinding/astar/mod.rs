//! A* pathfinding algorithm.
//!
//! Implements A* search on the occupancy grid with:
//! - 8-connected movement (cardinal cost 1, diagonal cost √2)
//! - No corner cutting between two blocked orthogonal cells
//! - Deterministic tie-breaking by insertion order

mod planner;
mod types;

pub use planner::AStarPlanner;
pub use types::{AStarConfig, Heuristic, PathResult};

use crate::core::GridCoord;
use crate::error::Result;
use crate::grid::OccupancyGrid;

/// Quick path finding with default configuration
pub fn find_path(grid: &OccupancyGrid, start: GridCoord, goal: GridCoord) -> Result<PathResult> {
    AStarPlanner::with_defaults(grid).find_path(start, goal)
}

/// Check if a path exists
pub fn path_exists(grid: &OccupancyGrid, start: GridCoord, goal: GridCoord) -> bool {
    find_path(grid, start, goal).is_ok()
}
