//! Downward camera model.

use crate::core::math::deg_to_rad;

/// Fixed-lens nadir camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraModel {
    /// Horizontal field of view (radians)
    pub hfov_rad: f64,
    /// Vertical field of view (radians)
    pub vfov_rad: f64,
    /// Vehicle yaw at which image up points north (degrees)
    pub yaw_offset_deg: f64,
}

impl Default for CameraModel {
    fn default() -> Self {
        Self {
            hfov_rad: 2.0,
            vfov_rad: deg_to_rad(82.0),
            yaw_offset_deg: 90.0,
        }
    }
}

impl CameraModel {
    /// Ground footprint `(width_m, height_m)` seen from `altitude_m` over
    /// flat terrain.
    pub fn footprint(&self, altitude_m: f64) -> (f64, f64) {
        (
            2.0 * altitude_m * (self.hfov_rad / 2.0).tan(),
            2.0 * altitude_m * (self.vfov_rad / 2.0).tan(),
        )
    }

    /// Rotation applied to image offsets to align them with north/east.
    #[inline]
    pub fn alignment_angle(&self, yaw_deg: f64) -> f64 {
        -deg_to_rad(yaw_deg - self.yaw_offset_deg)
    }
}
