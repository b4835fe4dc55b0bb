//! Geographic helpers.
//!
//! - [`GeoGrid`]: bidirectional mapping between a lat/lon box and grid cells
//! - [`offset_meters`]: small-displacement North/East offset on a spherical Earth

mod geodetic;
mod grid;

pub use geodetic::{EARTH_RADIUS_M, offset_meters};
pub use grid::{GeoGrid, GeoGridDef};
