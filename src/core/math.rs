//! Angle helpers.
//!
//! Headings in the planners are radians, counter-clockwise from the
//! longitude (east) axis. Telemetry yaw is degrees.

use std::f64::consts::{PI, TAU};

/// Normalize angle to [0, 2π).
///
/// # Example
/// ```
/// use akash_nav::core::math::normalize_angle_positive;
/// use std::f64::consts::PI;
///
/// assert!((normalize_angle_positive(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
/// assert!((normalize_angle_positive(5.0 * PI) - PI).abs() < 1e-12);
/// ```
#[inline]
pub fn normalize_angle_positive(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU { 0.0 } else { a }
}

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}
