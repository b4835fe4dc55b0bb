//! Detector output consumed by the geolocator.

use serde::{Deserialize, Serialize};

/// Axis-aligned detection box in normalized image coordinates.
///
/// `x` grows to the right and `y` grows downward, both in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionBox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
    #[serde(default)]
    pub class_id: u32,
    #[serde(default)]
    pub score: f32,
}

impl DetectionBox {
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
            class_id: 0,
            score: 1.0,
        }
    }

    /// Build from the `[top, left, bottom, right]` layout detectors emit.
    pub fn from_tlbr(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self::new(left, top, right, bottom)
    }

    /// Normalized box center `(x, y)`
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Box center in whole pixels, truncated toward zero.
    #[inline]
    pub fn pixel_center(&self, width: u32, height: u32) -> (i64, i64) {
        let (cx, cy) = self.center();
        ((width as f64 * cx) as i64, (height as f64 * cy) as i64)
    }
}
