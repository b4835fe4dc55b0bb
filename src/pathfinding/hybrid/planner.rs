//! Hybrid A* planner implementation.

use log::{debug, trace};
use std::collections::BinaryHeap;

use crate::core::{GeoPoint, GridCoord};
use crate::error::{NavError, Result};
use crate::geo::GeoGrid;
use crate::grid::OccupancyGrid;

use super::motion::{BicycleModel, KinematicPose, heading_bucket};
use super::types::{ConfigState, HybridConfig, KinematicPath, KinematicWaypoint, OpenEntry};

/// Hybrid A* over `(x, y, heading bucket)`.
///
/// A `(heading bucket, cell)` pair is closed as soon as a state reaches it,
/// so later states landing in the same pair are dropped even when their
/// continuous heading differs. The search is complete over that finite space
/// but not optimal, and the Manhattan heuristic is not admissible for this
/// motion model.
pub struct HybridAStarPlanner<'a> {
    geo: &'a GeoGrid,
    grid: &'a OccupancyGrid,
    config: HybridConfig,
    model: BicycleModel,
    steering: Vec<f64>,
    closed_len: usize,
}

impl<'a> HybridAStarPlanner<'a> {
    /// Create a new planner. The occupancy grid must match the geo grid shape.
    pub fn new(geo: &'a GeoGrid, grid: &'a OccupancyGrid, config: HybridConfig) -> Result<Self> {
        if geo.rows() != grid.rows() || geo.cols() != grid.cols() {
            return Err(NavError::InvalidGrid(format!(
                "occupancy grid {}x{} does not match geo grid {}x{}",
                grid.rows(),
                grid.cols(),
                geo.rows(),
                geo.cols()
            )));
        }
        if config.heading_cells == 0 {
            return Err(NavError::InvalidGrid("heading_cells must be at least 1".to_string()));
        }
        let closed_len = config
            .heading_cells
            .checked_mul(geo.rows())
            .and_then(|n| n.checked_mul(geo.cols()))
            .ok_or_else(|| {
                NavError::InvalidGrid(format!(
                    "{} heading cells over a {}x{} grid overflow the state space",
                    config.heading_cells,
                    geo.rows(),
                    geo.cols()
                ))
            })?;

        let model = BicycleModel::new(config.forward_speed, config.wheelbase);
        let steering = config.steering_angles();
        Ok(Self {
            geo,
            grid,
            config,
            model,
            steering,
            closed_len,
        })
    }

    /// Create with default configuration
    pub fn with_defaults(geo: &'a GeoGrid, grid: &'a OccupancyGrid) -> Result<Self> {
        Self::new(geo, grid, HybridConfig::default())
    }

    pub fn config(&self) -> &HybridConfig {
        &self.config
    }

    pub fn model(&self) -> &BicycleModel {
        &self.model
    }

    /// Steering angles tried at each expansion (radians)
    pub fn steering_angles(&self) -> &[f64] {
        &self.steering
    }

    /// Search from a start pose to the cell containing `goal`.
    ///
    /// The goal test compares cells only; the final heading is free.
    pub fn find_path(&self, start: KinematicPose, goal: GeoPoint) -> Result<KinematicPath> {
        let start_cell = self.geo.to_cell(start.position())?;
        let goal_cell = self.geo.to_cell(goal)?;

        trace!(
            "[HybridAStar] find_path: start=({},{}) yaw={:.3} goal=({},{})",
            start_cell.col, start_cell.row, start.yaw, goal_cell.col, goal_cell.row
        );

        let rows = self.geo.rows();
        let cols = self.geo.cols();
        let heading_cells = self.config.heading_cells;
        let closed_index = |heading: usize, row: usize, col: usize| (heading * rows + row) * cols + col;
        let heuristic = |cell: GridCoord| cell.manhattan_distance(&goal_cell) as f64;

        let mut closed = vec![false; self.closed_len];
        let mut states = Vec::new();
        let mut open_set = BinaryHeap::new();
        let mut seq = 0u64;

        let start_heading = heading_bucket(start.yaw, heading_cells);
        states.push(ConfigState {
            pose: start,
            cell: start_cell,
            heading: start_heading,
            g_cost: 0.0,
            f_cost: heuristic(start_cell),
            parent: None,
        });
        closed[closed_index(start_heading, start_cell.row, start_cell.col)] = true;
        open_set.push(OpenEntry {
            f_cost: states[0].f_cost,
            seq,
            state: 0,
        });

        let mut nodes_expanded = 0;

        while let Some(entry) = open_set.pop() {
            let current = states[entry.state];
            nodes_expanded += 1;

            if current.cell == goal_cell {
                let path = self.reconstruct_path(&states, entry.state, nodes_expanded);
                trace!(
                    "[HybridAStar] SUCCESS: {} states, nodes_expanded={}",
                    path.len(),
                    nodes_expanded
                );
                return Ok(path);
            }

            for &steer in &self.steering {
                let pose = self.model.step(&current.pose, steer);
                if !self.geo.contains(pose.position()) {
                    continue;
                }
                let cell = self.geo.to_cell(pose.position())?;
                let heading = heading_bucket(pose.yaw, heading_cells);
                let slot = closed_index(heading, cell.row, cell.col);

                if closed[slot] || self.grid.is_occupied(cell) {
                    continue;
                }

                let g_cost = current.g_cost + 1.0;
                let f_cost = g_cost + heuristic(cell);
                states.push(ConfigState {
                    pose,
                    cell,
                    heading,
                    g_cost,
                    f_cost,
                    parent: Some(entry.state),
                });
                closed[slot] = true;
                seq += 1;
                open_set.push(OpenEntry {
                    f_cost,
                    seq,
                    state: states.len() - 1,
                });
            }
        }

        debug!(
            "[HybridAStar] FAILED: NoPath after expanding {} states",
            nodes_expanded
        );
        Err(NavError::NoPathFound {
            expanded: nodes_expanded,
        })
    }

    fn reconstruct_path(&self, states: &[ConfigState], last: usize, nodes_expanded: usize) -> KinematicPath {
        let mut waypoints = Vec::new();
        let mut current = Some(last);

        while let Some(idx) = current {
            let state = &states[idx];
            waypoints.push(KinematicWaypoint {
                x: state.x(),
                y: state.y(),
                lat: state.pose.lat,
                lon: state.pose.lon,
                yaw: state.pose.yaw,
            });
            current = state.parent;
        }
        waypoints.reverse();

        KinematicPath {
            waypoints,
            nodes_expanded,
        }
    }
}
