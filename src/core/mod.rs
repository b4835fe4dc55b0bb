//! Core types shared by every module.
//!
//! - [`GridCoord`]: integer `(row, col)` cell address
//! - [`GeoPoint`]: geographic `(lat, lon)` in decimal degrees
//! - [`math`]: angle helpers

mod point;

pub mod math;

pub use point::{GeoPoint, GridCoord};
