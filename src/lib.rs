//! # Akash-Nav: Grid Planning and Target Geolocation for Small UAVs
//!
//! Plans collision-free routes over a geographic bounding box and projects
//! camera detections to ground coordinates for mission building.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use akash_nav::core::GeoPoint;
//! use akash_nav::geo::GeoGrid;
//! use akash_nav::grid::OccupancyGrid;
//! use akash_nav::pathfinding::RoutePlanner;
//!
//! let geo = GeoGrid::new(38.1598, 38.163, -122.457, -122.451, 200, 200)?;
//! let grid = OccupancyGrid::new(200, 200);
//! let route = RoutePlanner::new(geo, grid)?
//!     .plan_discrete(GeoPoint::new(38.160, -122.456), GeoPoint::new(38.162, -122.452))?;
//! for wp in &route.waypoints {
//!     println!("{:.7}, {:.7}", wp.lat, wp.lon);
//! }
//! # Ok::<(), akash_nav::NavError>(())
//! ```
//!
//! ## Coordinate Frames
//!
//! - **Cells**: `(row, col)`, row along latitude, col along longitude
//! - **Hybrid states**: `x` is the column, `y` the row; yaw is radians
//!   counter-clockwise from east
//! - **Telemetry**: yaw in compass degrees, altitude in meters
//!
//! ## Architecture
//!
//! - [`core`]: Cell and geographic point types, angle helpers
//! - [`geo`]: Lat/lon grid discretization and geodetic offsets
//! - [`grid`]: Occupancy mask and obstacle authoring
//! - [`pathfinding`]: A*, hybrid A*, waypoint pruning, geographic routes
//! - [`geolocation`]: Detection box to ground coordinate projection
//! - [`mission`]: Waypoint lists for the flight controller
//! - [`config`]: YAML configuration

pub mod config;
pub mod core;
pub mod error;
pub mod geo;
pub mod geolocation;
pub mod grid;
pub mod mission;
pub mod pathfinding;

pub use config::{AkashConfig, ConfigLoadError};
pub use crate::core::{GeoPoint, GridCoord};
pub use error::{NavError, Result};
pub use geo::{GeoGrid, offset_meters};
pub use geolocation::{CameraModel, DetectionBox, GeoFix, TargetGeolocator, VehicleState};
pub use grid::{ObstacleRect, OccupancyGrid};
pub use mission::{MissionItem, MissionParams, MissionPlan, SquarePattern};
pub use pathfinding::{
    AStarConfig, AStarPlanner, GeoRoute, Heuristic, HybridAStarPlanner, HybridConfig,
    KinematicPath, KinematicPose, PathResult, RoutePlanner, simplify,
};
