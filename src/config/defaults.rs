//! Default value functions for serde deserialization.

pub fn lat_min() -> f64 {
    38.1598
}

pub fn lat_max() -> f64 {
    38.163
}

pub fn lon_min() -> f64 {
    -122.457
}

pub fn lon_max() -> f64 {
    -122.451
}

pub fn grid_size() -> usize {
    200
}

pub fn collinearity_epsilon() -> f64 {
    1e-6
}

pub fn heading_cells() -> usize {
    45
}

pub fn max_steering_deg() -> f64 {
    35.0
}

pub fn steering_step_deg() -> f64 {
    5.0
}

pub fn forward_speed() -> f64 {
    2e-5
}

pub fn wheelbase() -> f64 {
    1e-4
}

pub fn hfov_rad() -> f64 {
    2.0
}

pub fn vfov_deg() -> f64 {
    82.0
}

pub fn yaw_offset_deg() -> f64 {
    90.0
}

pub fn altitude_m() -> f64 {
    20.0
}

pub fn speed_m_s() -> f64 {
    10.0
}

pub fn rtl_altitude_m() -> f64 {
    10.0
}

pub fn square_leg_m() -> f64 {
    10.0
}

pub fn square_return_m() -> f64 {
    -10.0
}
