//! Main AkashConfig and conversion methods.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::math::deg_to_rad;
use crate::error::Result;
use crate::geo::GeoGrid;
use crate::geolocation::CameraModel;
use crate::grid::{ObstacleRect, OccupancyGrid};
use crate::mission::{MissionParams, SquarePattern};
use crate::pathfinding::{AStarConfig, HybridConfig, RoutePlanner};

use super::camera::{CameraSection, MissionSection};
use super::error::ConfigLoadError;
use super::grid::GridSection;
use super::pathfinding::PathfindingSection;

/// Largest grid accepted from configuration
const MAX_GRID_CELLS: usize = 16_000_000;

/// Finest heading discretization accepted from configuration (one per degree)
const MAX_HEADING_CELLS: usize = 360;

/// Full configuration loaded from YAML
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AkashConfig {
    /// Geographic box and resolution
    #[serde(default)]
    pub grid: GridSection,

    /// Obstacle rectangles applied to a fresh occupancy grid
    #[serde(default)]
    pub obstacles: Vec<ObstacleRect>,

    /// Pathfinding settings
    #[serde(default)]
    pub pathfinding: PathfindingSection,

    /// Camera settings
    #[serde(default)]
    pub camera: CameraSection,

    /// Mission settings
    #[serde(default)]
    pub mission: MissionSection,
}

impl AkashConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        let config = Self::from_yaml(&contents)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> std::result::Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the planners cannot work with.
    pub fn validate(&self) -> std::result::Result<(), ConfigLoadError> {
        let invalid = |msg: &str| Err(ConfigLoadError::Invalid(msg.to_string()));

        if self.grid.rows.saturating_mul(self.grid.cols) > MAX_GRID_CELLS {
            return invalid("grid.rows * grid.cols exceeds the supported cell count");
        }
        self.grid
            .to_geo_grid()
            .map_err(|e| ConfigLoadError::Invalid(e.to_string()))?;

        let hybrid = &self.pathfinding.hybrid;
        if hybrid.heading_cells == 0 || hybrid.heading_cells > MAX_HEADING_CELLS {
            return invalid("pathfinding.hybrid.heading_cells must be within 1..=360");
        }
        if !(hybrid.steering_step_deg > 0.0) || hybrid.max_steering_deg < 0.0 {
            return invalid("pathfinding.hybrid steering range must be non-negative with a positive step");
        }
        if hybrid.max_steering_deg >= 90.0 {
            return invalid("pathfinding.hybrid.max_steering_deg must be below 90");
        }
        if !(hybrid.forward_speed > 0.0) || !(hybrid.wheelbase > 0.0) {
            return invalid("pathfinding.hybrid forward_speed and wheelbase must be positive");
        }
        if !(self.pathfinding.simplify.epsilon >= 0.0) {
            return invalid("pathfinding.simplify.epsilon must be non-negative");
        }

        let fov_ok = |fov: f64| fov > 0.0 && fov < std::f64::consts::PI;
        if !fov_ok(self.camera.hfov_rad) || !fov_ok(self.camera.vfov_deg.to_radians()) {
            return invalid("camera field of view must be within (0, 180) degrees");
        }
        if !(self.mission.altitude_m > 0.0) {
            return invalid("mission.altitude_m must be positive");
        }
        Ok(())
    }

    /// Geographic grid for the configured box
    pub fn to_geo_grid(&self) -> Result<GeoGrid> {
        self.grid.to_geo_grid()
    }

    /// Occupancy grid with the configured obstacles filled in
    pub fn to_occupancy_grid(&self) -> Result<OccupancyGrid> {
        self.grid.to_occupancy_grid(&self.obstacles)
    }

    /// Convert to AStarConfig
    pub fn to_astar_config(&self) -> AStarConfig {
        AStarConfig::with_heuristic(self.pathfinding.astar.heuristic)
    }

    /// Convert to HybridConfig
    pub fn to_hybrid_config(&self) -> HybridConfig {
        let hybrid = &self.pathfinding.hybrid;
        HybridConfig {
            heading_cells: hybrid.heading_cells,
            max_steering_deg: hybrid.max_steering_deg,
            steering_step_deg: hybrid.steering_step_deg,
            forward_speed: hybrid.forward_speed,
            wheelbase: hybrid.wheelbase,
        }
    }

    /// Collinearity threshold, zero when pruning is disabled
    pub fn simplify_epsilon(&self) -> f64 {
        if self.pathfinding.simplify.enabled {
            self.pathfinding.simplify.epsilon
        } else {
            0.0
        }
    }

    /// Route planner over the configured grids
    pub fn to_route_planner(&self) -> Result<RoutePlanner> {
        Ok(RoutePlanner::new(self.to_geo_grid()?, self.to_occupancy_grid()?)?
            .with_astar_config(self.to_astar_config())
            .with_hybrid_config(self.to_hybrid_config())
            .with_epsilon(self.simplify_epsilon()))
    }

    /// Convert to CameraModel
    pub fn to_camera_model(&self) -> CameraModel {
        CameraModel {
            hfov_rad: self.camera.hfov_rad,
            vfov_rad: deg_to_rad(self.camera.vfov_deg),
            yaw_offset_deg: self.camera.yaw_offset_deg,
        }
    }

    /// Convert to MissionParams
    pub fn to_mission_params(&self) -> MissionParams {
        MissionParams {
            altitude_m: self.mission.altitude_m,
            speed_m_s: self.mission.speed_m_s,
            rtl_altitude_m: self.mission.rtl_altitude_m,
            gimbal_pitch_deg: self.mission.gimbal_pitch_deg,
            gimbal_yaw_deg: self.mission.gimbal_yaw_deg,
            vtol: self.mission.vtol,
        }
    }

    /// Square survey legs
    pub fn square_pattern(&self) -> SquarePattern {
        SquarePattern {
            north_m: self.mission.square_north_m,
            east_m: self.mission.square_east_m,
            south_m: self.mission.square_south_m,
        }
    }
}
