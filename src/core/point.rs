//! Coordinate types.

use serde::{Deserialize, Serialize};

/// Integer cell address in a row-major grid.
///
/// Rows follow latitude, columns follow longitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    pub row: usize,
    pub col: usize,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset by a signed delta; `None` if the result would be negative.
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// Manhattan distance in cells
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Chebyshev distance in cells
    #[inline]
    pub fn chebyshev_distance(&self, other: &GridCoord) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

/// Geographic coordinate in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new geographic point
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}
