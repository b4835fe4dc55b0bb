//! Pathfinding configuration section.

use serde::{Deserialize, Serialize};

use crate::pathfinding::Heuristic;

use super::defaults;

/// Pathfinding settings section
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathfindingSection {
    /// A* algorithm settings
    #[serde(default)]
    pub astar: AStarSettings,

    /// Waypoint pruning settings
    #[serde(default)]
    pub simplify: SimplifySettings,

    /// Hybrid A* settings
    #[serde(default)]
    pub hybrid: HybridSettings,
}

/// A* algorithm settings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AStarSettings {
    #[serde(default)]
    pub heuristic: Heuristic,
}

/// Collinear waypoint pruning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimplifySettings {
    /// Prune collinear waypoints from discrete routes
    #[serde(default = "enabled")]
    pub enabled: bool,

    /// Determinant threshold for collinearity
    #[serde(default = "defaults::collinearity_epsilon")]
    pub epsilon: f64,
}

fn enabled() -> bool {
    true
}

impl Default for SimplifySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            epsilon: 1e-6,
        }
    }
}

/// Hybrid A* settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HybridSettings {
    #[serde(default = "defaults::heading_cells")]
    pub heading_cells: usize,

    /// Steering range is [-max, +max] (degrees)
    #[serde(default = "defaults::max_steering_deg")]
    pub max_steering_deg: f64,

    #[serde(default = "defaults::steering_step_deg")]
    pub steering_step_deg: f64,

    /// Step length per expansion (degrees of lat/lon)
    #[serde(default = "defaults::forward_speed")]
    pub forward_speed: f64,

    /// Wheelbase (degrees of lat/lon)
    #[serde(default = "defaults::wheelbase")]
    pub wheelbase: f64,
}

impl Default for HybridSettings {
    fn default() -> Self {
        Self {
            heading_cells: 45,
            max_steering_deg: 35.0,
            steering_step_deg: 5.0,
            forward_speed: 2e-5,
            wheelbase: 1e-4,
        }
    }
}
