//! Camera and mission configuration sections.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Camera settings section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraSection {
    /// Horizontal field of view (radians)
    #[serde(default = "defaults::hfov_rad")]
    pub hfov_rad: f64,

    /// Vertical field of view (degrees)
    #[serde(default = "defaults::vfov_deg")]
    pub vfov_deg: f64,

    /// Vehicle yaw at which image up points north (degrees)
    #[serde(default = "defaults::yaw_offset_deg")]
    pub yaw_offset_deg: f64,

    /// Expected frame size, used by the CLI when none is given
    #[serde(default)]
    pub image_width: Option<u32>,

    #[serde(default)]
    pub image_height: Option<u32>,
}

impl Default for CameraSection {
    fn default() -> Self {
        Self {
            hfov_rad: 2.0,
            vfov_deg: 82.0,
            yaw_offset_deg: 90.0,
            image_width: None,
            image_height: None,
        }
    }
}

/// Mission settings section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MissionSection {
    #[serde(default = "defaults::altitude_m")]
    pub altitude_m: f64,

    #[serde(default = "defaults::speed_m_s")]
    pub speed_m_s: f64,

    #[serde(default = "defaults::rtl_altitude_m")]
    pub rtl_altitude_m: f64,

    #[serde(default)]
    pub gimbal_pitch_deg: f64,

    #[serde(default)]
    pub gimbal_yaw_deg: f64,

    /// Takeoff is a separate action for VTOL airframes
    #[serde(default)]
    pub vtol: bool,

    /// Square survey legs (m)
    #[serde(default = "defaults::square_leg_m")]
    pub square_north_m: f64,

    #[serde(default = "defaults::square_leg_m")]
    pub square_east_m: f64,

    #[serde(default = "defaults::square_return_m")]
    pub square_south_m: f64,
}

impl Default for MissionSection {
    fn default() -> Self {
        Self {
            altitude_m: 20.0,
            speed_m_s: 10.0,
            rtl_altitude_m: 10.0,
            gimbal_pitch_deg: 0.0,
            gimbal_yaw_deg: 0.0,
            vtol: false,
            square_north_m: 10.0,
            square_east_m: 10.0,
            square_south_m: -10.0,
        }
    }
}
