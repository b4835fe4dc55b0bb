//! A* pathfinding types.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::GridCoord;

/// Entry in the open set. `node` indexes the search arena.
#[derive(Clone, Copy, Debug)]
pub(super) struct OpenEntry {
    pub f_cost: f64,
    /// Insertion counter; earlier entries win ties.
    pub seq: u64,
    pub node: usize,
}

impl Eq for OpenEntry {}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f_cost
            .total_cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Arena record: a cell reached with cost `g_cost` from `parent`.
#[derive(Clone, Copy, Debug)]
pub(super) struct SearchNode {
    pub coord: GridCoord,
    pub g_cost: f64,
    pub parent: Option<usize>,
}

/// Distance estimate from a cell to the goal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Straight-line distance in cells (admissible for 8-connected moves)
    #[default]
    Euclidean,
    /// Exact obstacle-free 8-connected cost (admissible, tighter)
    Octile,
    /// |dr| + |dc| (overestimates diagonals; not admissible here)
    Manhattan,
    /// Always 0 (Dijkstra)
    Zero,
}

impl Heuristic {
    /// Evaluate the heuristic between two cells.
    pub fn estimate(self, from: GridCoord, to: GridCoord) -> f64 {
        let dr = from.row.abs_diff(to.row) as f64;
        let dc = from.col.abs_diff(to.col) as f64;
        match self {
            Heuristic::Euclidean => (dr * dr + dc * dc).sqrt(),
            Heuristic::Octile => {
                let (min, max) = (dr.min(dc), dr.max(dc));
                max + (std::f64::consts::SQRT_2 - 1.0) * min
            }
            Heuristic::Manhattan => dr + dc,
            Heuristic::Zero => 0.0,
        }
    }
}

/// A* pathfinding configuration
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AStarConfig {
    /// Heuristic used by [`AStarPlanner::find_path`](super::AStarPlanner::find_path)
    pub heuristic: Heuristic,
}

impl AStarConfig {
    /// Create with a specific heuristic
    pub fn with_heuristic(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }
}

/// Result of a successful A* search
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    /// Cells from start to goal inclusive
    pub path: Vec<GridCoord>,
    /// Total move cost (1 per cardinal step, √2 per diagonal step)
    pub cost: f64,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
}

impl PathResult {
    /// Path length in cells
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// True only for a degenerate result with no cells
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
