//! Obstacle grid.
//!
//! [`OccupancyGrid`] is a row-major boolean mask with the same shape as the
//! [`GeoGrid`](crate::geo::GeoGrid) it is paired with. It is owned by the
//! caller, edited before a search (obstacle authoring) and borrowed read-only
//! by the planners for the duration of one search call.

mod occupancy;

pub use occupancy::{ObstacleRect, OccupancyGrid};
