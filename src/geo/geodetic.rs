//! Small-displacement geodetic offsets.
//!
//! Treats the Earth as a sphere. Accurate to well under a meter for
//! displacements of a few hundred meters away from the poles; error grows
//! with distance and with latitude.

use crate::core::GeoPoint;
use crate::error::{NavError, Result};

/// Radius of the spherical Earth model (WGS-84 equatorial radius), meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Below this `cos(lat)` the east scale blows up; treated as a pole.
const MIN_COS_LAT: f64 = 1e-12;

/// Offset a position by `d_north_m` / `d_east_m` meters.
///
/// Fails with [`NavError::InvalidLatitude`] at (or numerically at) ±90°,
/// where a longitude step is undefined, or for non-finite latitude.
///
/// # Example
/// ```
/// use akash_nav::core::GeoPoint;
/// use akash_nav::geo::offset_meters;
///
/// let origin = GeoPoint::new(38.16, -122.45);
/// let moved = offset_meters(origin, 10.0, 0.0).unwrap();
/// assert!(moved.lat > origin.lat);
/// assert_eq!(moved.lon, origin.lon);
/// ```
pub fn offset_meters(origin: GeoPoint, d_north_m: f64, d_east_m: f64) -> Result<GeoPoint> {
    if !origin.lat.is_finite() || origin.lat.abs() > 90.0 {
        return Err(NavError::InvalidLatitude(origin.lat));
    }
    let cos_lat = (origin.lat.to_radians()).cos();
    if cos_lat.abs() < MIN_COS_LAT {
        return Err(NavError::InvalidLatitude(origin.lat));
    }

    let d_lat = d_north_m / EARTH_RADIUS_M;
    let d_lon = d_east_m / (EARTH_RADIUS_M * cos_lat);

    Ok(GeoPoint::new(
        origin.lat + d_lat.to_degrees(),
        origin.lon + d_lon.to_degrees(),
    ))
}
