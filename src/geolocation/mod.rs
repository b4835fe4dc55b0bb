//! Ground projection of image detections.
//!
//! Flat ground, fixed altitude and a nadir camera are assumed. Gimbal tilt,
//! terrain and lens distortion are not modelled.
//!
//! ```rust,ignore
//! use akash_nav::geolocation::{DetectionBox, TargetGeolocator, VehicleState};
//!
//! let locator = TargetGeolocator::default();
//! let vehicle = VehicleState::new(GeoPoint::new(38.1614, -122.4545), 20.0, 90.0);
//! let fix = locator.localize(&detection, 640, 480, &vehicle)?;
//! ```

mod camera;
mod detection;

pub use camera::CameraModel;
pub use detection::DetectionBox;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::GeoPoint;
use crate::error::{NavError, Result};
use crate::geo::offset_meters;

/// Telemetry snapshot taken with the frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    pub position: GeoPoint,
    /// Altitude above ground (m)
    pub altitude_m: f64,
    /// Compass yaw (degrees)
    pub yaw_deg: f64,
}

impl VehicleState {
    pub fn new(position: GeoPoint, altitude_m: f64, yaw_deg: f64) -> Self {
        Self {
            position,
            altitude_m,
            yaw_deg,
        }
    }
}

/// Located target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoFix {
    pub position: GeoPoint,
    /// Box center in pixels `(x, y)`
    pub pixel_center: (i64, i64),
    /// Metric displacement from the vehicle (m)
    pub north_m: f64,
    pub east_m: f64,
}

/// Projects detection boxes to geographic coordinates.
#[derive(Clone, Debug, Default)]
pub struct TargetGeolocator {
    camera: CameraModel,
}

impl TargetGeolocator {
    pub fn new(camera: CameraModel) -> Self {
        Self { camera }
    }

    pub fn camera(&self) -> &CameraModel {
        &self.camera
    }

    /// Locate the ground point under the center of `detection`.
    ///
    /// The pixel offset from the image center (up and right positive) is
    /// rotated by `-(yaw - yaw_offset)`, then scaled by footprint over image
    /// size: rows become meters north, columns meters east.
    ///
    /// Fails on an empty image, or when the altitude is negative or not
    /// finite.
    pub fn localize(
        &self,
        detection: &DetectionBox,
        width: u32,
        height: u32,
        vehicle: &VehicleState,
    ) -> Result<GeoFix> {
        if width == 0 || height == 0 {
            return Err(NavError::InvalidImage { width, height });
        }
        if !vehicle.altitude_m.is_finite() || vehicle.altitude_m < 0.0 {
            return Err(NavError::InvalidAltitude(vehicle.altitude_m));
        }

        let (gnd_width, gnd_height) = self.camera.footprint(vehicle.altitude_m);
        let (center_x, center_y) = detection.pixel_center(width, height);

        let dx = (center_x - (width / 2) as i64) as f64;
        let dy = ((height / 2) as i64 - center_y) as f64;

        let theta = self.camera.alignment_angle(vehicle.yaw_deg);
        let (sin, cos) = theta.sin_cos();
        let rx = dx * cos - dy * sin;
        let ry = dx * sin + dy * cos;

        let north_m = ry * gnd_height / height as f64;
        let east_m = rx * gnd_width / width as f64;
        trace!(
            "[Geolocate] pixel=({center_x},{center_y}) offset=({dx},{dy}) footprint=({gnd_width:.2}x{gnd_height:.2})m"
        );

        let position = offset_meters(vehicle.position, north_m, east_m)?;
        debug!(
            "[Geolocate] target at ({:.7}, {:.7}), {:.1}m N {:.1}m E of vehicle",
            position.lat, position.lon, north_m, east_m
        );

        Ok(GeoFix {
            position,
            pixel_center: (center_x, center_y),
            north_m,
            east_m,
        })
    }
}
