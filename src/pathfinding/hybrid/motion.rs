//! Bicycle motion model and heading discretization.
//!
//! Positions are advanced directly in degrees: `forward_speed` is the step
//! length in degrees per expansion and `wheelbase` the axle distance in the
//! same unit. Yaw is radians counter-clockwise from the longitude axis, so
//! yaw 0 moves east and yaw π/2 moves north.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::core::GeoPoint;
use crate::core::math::normalize_angle_positive;

/// Continuous vehicle pose used by the hybrid search.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct KinematicPose {
    pub lat: f64,
    pub lon: f64,
    /// Heading in radians, kept in [0, 2π) after each step
    pub yaw: f64,
}

impl KinematicPose {
    pub const fn new(lat: f64, lon: f64, yaw: f64) -> Self {
        Self { lat, lon, yaw }
    }

    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// Kinematic bicycle with a fixed forward step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BicycleModel {
    pub forward_speed: f64,
    pub wheelbase: f64,
}

impl BicycleModel {
    pub fn new(forward_speed: f64, wheelbase: f64) -> Self {
        Self {
            forward_speed,
            wheelbase,
        }
    }

    /// Advance one step under `steering` (radians).
    ///
    /// The translation uses the heading *before* the step; the new heading
    /// is wrapped into [0, 2π) only when it leaves that range.
    pub fn step(&self, pose: &KinematicPose, steering: f64) -> KinematicPose {
        let mut yaw = pose.yaw + self.forward_speed / self.wheelbase * steering.tan();
        if !(0.0..=TAU).contains(&yaw) {
            yaw = normalize_angle_positive(yaw);
        }

        KinematicPose {
            lat: pose.lat + self.forward_speed * pose.yaw.sin(),
            lon: pose.lon + self.forward_speed * pose.yaw.cos(),
            yaw,
        }
    }
}

/// Heading bucket of a yaw angle: `round(yaw' * cells / 2π) mod cells`
/// with `yaw'` normalized to [0, 2π). Halves round to even.
#[inline]
pub fn heading_bucket(yaw: f64, cells: usize) -> usize {
    let normalized = normalize_angle_positive(yaw);
    let bucket = (normalized * cells as f64 / TAU).round_ties_even() as usize;
    bucket % cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_straight_step_east_and_north() {
        let model = BicycleModel::new(2e-5, 1e-4);

        let east = model.step(&KinematicPose::new(38.0, -122.0, 0.0), 0.0);
        assert_abs_diff_eq!(east.lon, -122.0 + 2e-5, epsilon = 1e-12);
        assert_eq!(east.lat, 38.0);
        assert_eq!(east.yaw, 0.0);

        let north = model.step(&KinematicPose::new(38.0, -122.0, FRAC_PI_2), 0.0);
        assert_abs_diff_eq!(north.lat, 38.0 + 2e-5, epsilon = 1e-12);
        assert_abs_diff_eq!(north.lon, -122.0, epsilon = 1e-12);
    }

    #[test]
    fn test_steering_turns_and_wraps() {
        let model = BicycleModel::new(2e-5, 1e-4);
        let left = model.step(&KinematicPose::new(0.0, 0.0, 0.0), 35f64.to_radians());
        assert_abs_diff_eq!(left.yaw, 0.2 * 35f64.to_radians().tan(), epsilon = 1e-12);

        // Turning right from yaw 0 wraps to just below 2π
        let right = model.step(&KinematicPose::new(0.0, 0.0, 0.0), -35f64.to_radians());
        assert!(right.yaw > PI && right.yaw < TAU);
    }

    #[test]
    fn test_heading_buckets() {
        let cells = 45;
        let width = TAU / cells as f64;
        assert_eq!(heading_bucket(0.0, cells), 0);
        assert_eq!(heading_bucket(3.0 * width, cells), 3);
        assert_eq!(heading_bucket(3.4 * width, cells), 3);
        assert_eq!(heading_bucket(3.6 * width, cells), 4);
        // Near 2π folds back to bucket 0
        assert_eq!(heading_bucket(TAU - 0.1 * width, cells), 0);
        // Negative yaw is normalized first
        assert_eq!(heading_bucket(-width, cells), 44);
    }
}
