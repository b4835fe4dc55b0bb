//! End-to-end route planning in geographic coordinates.
//!
//! Geographic endpoints are mapped to cells, searched, simplified on cells
//! and converted back to lat/lon waypoints.

use log::{debug, info};

use crate::core::{GeoPoint, GridCoord};
use crate::error::{NavError, Result};
use crate::geo::GeoGrid;
use crate::grid::OccupancyGrid;

use super::astar::{AStarConfig, AStarPlanner};
use super::hybrid::{HybridAStarPlanner, HybridConfig, KinematicPath, KinematicPose};
use super::simplify::{DEFAULT_COLLINEARITY_EPSILON, simplify_path};

/// Discrete route in both grid and geographic form.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoRoute {
    /// Full cell path from the search
    pub cells: Vec<GridCoord>,
    /// Cell path after collinear pruning
    pub simplified: Vec<GridCoord>,
    /// Geographic waypoints of the simplified path
    pub waypoints: Vec<GeoPoint>,
    /// Move cost in cells (1 cardinal, √2 diagonal)
    pub cost: f64,
    pub nodes_expanded: usize,
}

/// Owns a grid pair and runs either planner on geographic endpoints.
#[derive(Clone, Debug)]
pub struct RoutePlanner {
    geo: GeoGrid,
    grid: OccupancyGrid,
    astar: AStarConfig,
    hybrid: HybridConfig,
    epsilon: f64,
}

impl RoutePlanner {
    /// The occupancy grid must have the geo grid's shape.
    pub fn new(geo: GeoGrid, grid: OccupancyGrid) -> Result<Self> {
        if geo.rows() != grid.rows() || geo.cols() != grid.cols() {
            return Err(NavError::InvalidGrid(format!(
                "occupancy grid {}x{} does not match geo grid {}x{}",
                grid.rows(),
                grid.cols(),
                geo.rows(),
                geo.cols()
            )));
        }
        Ok(Self {
            geo,
            grid,
            astar: AStarConfig::default(),
            hybrid: HybridConfig::default(),
            epsilon: DEFAULT_COLLINEARITY_EPSILON,
        })
    }

    pub fn with_astar_config(mut self, config: AStarConfig) -> Self {
        self.astar = config;
        self
    }

    pub fn with_hybrid_config(mut self, config: HybridConfig) -> Self {
        self.hybrid = config;
        self
    }

    /// Collinearity threshold used when pruning cell paths
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn geo(&self) -> &GeoGrid {
        &self.geo
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Mutable access for obstacle edits between plans
    pub fn grid_mut(&mut self) -> &mut OccupancyGrid {
        &mut self.grid
    }

    /// 8-connected A* between two geographic points.
    pub fn plan_discrete(&self, start: GeoPoint, goal: GeoPoint) -> Result<GeoRoute> {
        let start_cell = self.geo.to_cell(start)?;
        let goal_cell = self.geo.to_cell(goal)?;
        info!(
            "[Route] discrete: ({:.6}, {:.6}) -> ({:.6}, {:.6})",
            start.lat, start.lon, goal.lat, goal.lon
        );

        let result = AStarPlanner::new(&self.grid, self.astar.clone())
            .find_path(start_cell, goal_cell)
            .inspect_err(|e| debug!("[Route] discrete search failed: {e}"))?;

        let simplified = simplify_path(&result.path, self.epsilon);
        let waypoints = self.geo.path_to_geo(&simplified)?;
        debug!(
            "[Route] {} cells pruned to {} waypoints, cost={:.3}",
            result.len(),
            waypoints.len(),
            result.cost
        );

        Ok(GeoRoute {
            cells: result.path,
            simplified,
            waypoints,
            cost: result.cost,
            nodes_expanded: result.nodes_expanded,
        })
    }

    /// Hybrid A* from a start pose to the cell containing `goal`.
    pub fn plan_kinematic(&self, start: KinematicPose, goal: GeoPoint) -> Result<KinematicPath> {
        info!(
            "[Route] kinematic: ({:.6}, {:.6}, yaw={:.3}) -> ({:.6}, {:.6})",
            start.lat, start.lon, start.yaw, goal.lat, goal.lon
        );
        let path = HybridAStarPlanner::new(&self.geo, &self.grid, self.hybrid.clone())?
            .find_path(start, goal)
            .inspect_err(|e| debug!("[Route] kinematic search failed: {e}"))?;
        debug!(
            "[Route] kinematic path with {} states, nodes_expanded={}",
            path.len(),
            path.nodes_expanded
        );
        Ok(path)
    }
}
