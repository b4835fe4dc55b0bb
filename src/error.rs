//! Error types for akash-nav.

use thiserror::Error;

/// Errors returned by the planners, the geodetic helpers and the geolocator.
///
/// Every variant is scoped to a single call; nothing is retried internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavError {
    /// Geographic coordinate lies outside the configured grid box.
    #[error("coordinate ({lat}, {lon}) is outside the grid bounds")]
    OutOfBounds { lat: f64, lon: f64 },

    /// Grid index lies outside the grid.
    #[error("cell ({row}, {col}) is outside the grid")]
    CellOutOfBounds { row: usize, col: usize },

    /// Search exhausted its open set without reaching the goal.
    #[error("no path found after expanding {expanded} nodes")]
    NoPathFound { expanded: usize },

    /// Geodetic offset requested at (or numerically at) a pole.
    #[error("invalid latitude for geodetic offset: {0}")]
    InvalidLatitude(f64),

    /// Grid definition is unusable (zero cells, empty or inverted bounds).
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// Vehicle altitude is negative or not a finite number.
    #[error("invalid altitude {0} m")]
    InvalidAltitude(f64),

    /// Image dimensions cannot be used for pixel projection.
    #[error("invalid image size {width}x{height}")]
    InvalidImage { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, NavError>;
