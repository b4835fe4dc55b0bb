//! A* planner implementation.

use log::{debug, trace};
use std::collections::BinaryHeap;
use std::f64::consts::SQRT_2;

use crate::core::GridCoord;
use crate::error::{NavError, Result};
use crate::grid::OccupancyGrid;

use super::types::{AStarConfig, OpenEntry, PathResult, SearchNode};

/// 8-connected move set as (d_row, d_col, cost). Row decreases northward on
/// screen, matching the obstacle authoring convention.
const ACTIONS: [(isize, isize, f64); 8] = [
    (0, -1, 1.0),     // west
    (0, 1, 1.0),      // east
    (-1, 0, 1.0),     // north
    (1, 0, 1.0),      // south
    (-1, 1, SQRT_2),  // north-east
    (-1, -1, SQRT_2), // north-west
    (1, -1, SQRT_2),  // south-west
    (1, 1, SQRT_2),   // south-east
];

/// A* pathfinder over an 8-connected [`OccupancyGrid`].
///
/// A cell is expanded at most once. With an admissible heuristic (the
/// default Euclidean one) the returned path is cost-optimal.
pub struct AStarPlanner<'a> {
    grid: &'a OccupancyGrid,
    config: AStarConfig,
}

impl<'a> AStarPlanner<'a> {
    /// Create a new A* planner
    pub fn new(grid: &'a OccupancyGrid, config: AStarConfig) -> Self {
        Self { grid, config }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a OccupancyGrid) -> Self {
        Self::new(grid, AStarConfig::default())
    }

    /// Find a path from start to goal using the configured heuristic.
    pub fn find_path(&self, start: GridCoord, goal: GridCoord) -> Result<PathResult> {
        let heuristic = self.config.heuristic;
        self.find_path_with_heuristic(start, goal, |from, to| heuristic.estimate(from, to))
    }

    /// Find a path from start to goal with a caller-supplied heuristic.
    ///
    /// Optimality holds only if `h` never overestimates the remaining cost.
    pub fn find_path_with_heuristic<H>(
        &self,
        start: GridCoord,
        goal: GridCoord,
        h: H,
    ) -> Result<PathResult>
    where
        H: Fn(GridCoord, GridCoord) -> f64,
    {
        trace!(
            "[AStar] find_path: start=({},{}) goal=({},{})",
            start.row, start.col, goal.row, goal.col
        );

        for coord in [start, goal] {
            if !self.grid.is_valid_coord(coord) {
                debug!("[AStar] FAILED: cell ({},{}) outside grid", coord.row, coord.col);
                return Err(NavError::CellOutOfBounds {
                    row: coord.row,
                    col: coord.col,
                });
            }
        }

        let cell_count = self.grid.rows() * self.grid.cols();
        let index = |c: GridCoord| c.row * self.grid.cols() + c.col;

        let mut nodes = vec![SearchNode {
            coord: start,
            g_cost: 0.0,
            parent: None,
        }];
        let mut best_g = vec![f64::INFINITY; cell_count];
        let mut closed = vec![false; cell_count];
        let mut open_set = BinaryHeap::new();
        let mut seq = 0u64;

        best_g[index(start)] = 0.0;
        open_set.push(OpenEntry {
            f_cost: h(start, goal),
            seq,
            node: 0,
        });

        let mut nodes_expanded = 0;

        while let Some(entry) = open_set.pop() {
            let current = nodes[entry.node];
            let current_idx = index(current.coord);

            if closed[current_idx] || current.g_cost > best_g[current_idx] {
                continue;
            }
            closed[current_idx] = true;
            nodes_expanded += 1;

            if current.coord == goal {
                return Ok(self.reconstruct_path(&nodes, entry.node, nodes_expanded));
            }

            for &(d_row, d_col, move_cost) in &ACTIONS {
                let Some(neighbor) = current.coord.offset(d_row, d_col) else {
                    continue;
                };
                if !self.grid.is_free(neighbor) {
                    continue;
                }
                if d_row != 0 && d_col != 0 && self.cuts_corner(current.coord, d_row, d_col) {
                    continue;
                }

                let neighbor_idx = index(neighbor);
                if closed[neighbor_idx] {
                    continue;
                }

                let tentative_g = current.g_cost + move_cost;
                if tentative_g < best_g[neighbor_idx] {
                    best_g[neighbor_idx] = tentative_g;
                    nodes.push(SearchNode {
                        coord: neighbor,
                        g_cost: tentative_g,
                        parent: Some(entry.node),
                    });
                    seq += 1;
                    open_set.push(OpenEntry {
                        f_cost: tentative_g + h(neighbor, goal),
                        seq,
                        node: nodes.len() - 1,
                    });
                }
            }
        }

        debug!("[AStar] FAILED: NoPath after expanding {} nodes", nodes_expanded);
        Err(NavError::NoPathFound {
            expanded: nodes_expanded,
        })
    }

    /// A diagonal move cuts a corner when both orthogonal cells it passes
    /// between are blocked or off the grid.
    fn cuts_corner(&self, from: GridCoord, d_row: isize, d_col: isize) -> bool {
        let blocked = |c: Option<GridCoord>| c.is_none_or(|c| self.grid.is_occupied(c));
        blocked(from.offset(d_row, 0)) && blocked(from.offset(0, d_col))
    }

    /// Walk parent links from the goal node back to the start.
    fn reconstruct_path(&self, nodes: &[SearchNode], goal_node: usize, nodes_expanded: usize) -> PathResult {
        let cost = nodes[goal_node].g_cost;
        let mut path = Vec::new();
        let mut current = Some(goal_node);

        while let Some(idx) = current {
            path.push(nodes[idx].coord);
            current = nodes[idx].parent;
        }
        path.reverse();

        trace!(
            "[AStar] SUCCESS: path length={} cells, cost={:.3}, nodes_expanded={}",
            path.len(),
            cost,
            nodes_expanded
        );

        PathResult {
            path,
            cost,
            nodes_expanded,
        }
    }
}
