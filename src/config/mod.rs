//! Unified configuration loading.
//!
//! Loads all configuration from a single YAML file. Every field has a
//! default, so a partial file (or none at all) is valid.

mod akash;
mod camera;
mod defaults;
mod error;
mod grid;
mod pathfinding;

pub use akash::AkashConfig;
pub use error::ConfigLoadError;

pub use camera::{CameraSection, MissionSection};
pub use grid::GridSection;
pub use pathfinding::{AStarSettings, HybridSettings, PathfindingSection, SimplifySettings};
