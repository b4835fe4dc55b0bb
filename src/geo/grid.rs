//! Geographic grid discretization.
//!
//! A [`GeoGrid`] samples the latitude axis at `rows` evenly spaced values and
//! the longitude axis at `cols` values, both endpoints included:
//!
//! ```text
//! lat_samples[i] = lat_min + i * (lat_max - lat_min) / (rows - 1)
//! lon_samples[j] = lon_min + j * (lon_max - lon_min) / (cols - 1)
//! ```
//!
//! A point maps to the first sample that is >= its coordinate ("ceiling"
//! mapping), so `to_geo(to_cell(p))` lands on the upper edge of p's bucket
//! rather than on a cell center.

use serde::{Deserialize, Serialize};

use crate::core::{GeoPoint, GridCoord};
use crate::error::{NavError, Result};

/// Immutable mapping between a lat/lon bounding box and a rows x cols grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeoGridDef", into = "GeoGridDef")]
pub struct GeoGrid {
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
    lat_samples: Vec<f64>,
    lon_samples: Vec<f64>,
}

/// Serialized form of a [`GeoGrid`]: bounds plus resolution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoGridDef {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
    pub rows: usize,
    pub cols: usize,
}

impl TryFrom<GeoGridDef> for GeoGrid {
    type Error = NavError;

    fn try_from(def: GeoGridDef) -> Result<Self> {
        GeoGrid::new(
            def.lat_min,
            def.lat_max,
            def.lon_min,
            def.lon_max,
            def.rows,
            def.cols,
        )
    }
}

impl From<GeoGrid> for GeoGridDef {
    fn from(grid: GeoGrid) -> Self {
        GeoGridDef {
            lat_min: grid.lat_min,
            lat_max: grid.lat_max,
            lon_min: grid.lon_min,
            lon_max: grid.lon_max,
            rows: grid.rows(),
            cols: grid.cols(),
        }
    }
}

impl GeoGrid {
    /// Create a grid over `[lat_min, lat_max] x [lon_min, lon_max]`.
    ///
    /// Requires at least one row and one column, a cell count that fits in
    /// `usize`, finite bounds, and `min < max` on any axis sampled more than
    /// once.
    pub fn new(
        lat_min: f64,
        lat_max: f64,
        lon_min: f64,
        lon_max: f64,
        rows: usize,
        cols: usize,
    ) -> Result<Self> {
        Self::check_axis("latitude", lat_min, lat_max, rows)?;
        Self::check_axis("longitude", lon_min, lon_max, cols)?;
        if rows.checked_mul(cols).is_none() {
            return Err(NavError::InvalidGrid(format!("{rows}x{cols} cells overflow usize")));
        }

        Ok(Self {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
            lat_samples: linspace(lat_min, lat_max, rows),
            lon_samples: linspace(lon_min, lon_max, cols),
        })
    }

    fn check_axis(name: &str, min: f64, max: f64, n: usize) -> Result<()> {
        if n == 0 {
            return Err(NavError::InvalidGrid(format!("{name} axis has no samples")));
        }
        if !min.is_finite() || !max.is_finite() {
            return Err(NavError::InvalidGrid(format!("{name} bounds are not finite")));
        }
        if min > max || (n > 1 && min == max) {
            return Err(NavError::InvalidGrid(format!(
                "{name} bounds [{min}, {max}] are empty or inverted"
            )));
        }
        Ok(())
    }

    /// Number of rows (latitude samples)
    #[inline]
    pub fn rows(&self) -> usize {
        self.lat_samples.len()
    }

    /// Number of columns (longitude samples)
    #[inline]
    pub fn cols(&self) -> usize {
        self.lon_samples.len()
    }

    #[inline]
    pub fn lat_min(&self) -> f64 {
        self.lat_min
    }

    #[inline]
    pub fn lat_max(&self) -> f64 {
        self.lat_max
    }

    #[inline]
    pub fn lon_min(&self) -> f64 {
        self.lon_min
    }

    #[inline]
    pub fn lon_max(&self) -> f64 {
        self.lon_max
    }

    /// Latitude samples, one per row, increasing.
    pub fn lat_samples(&self) -> &[f64] {
        &self.lat_samples
    }

    /// Longitude samples, one per column, increasing.
    pub fn lon_samples(&self) -> &[f64] {
        &self.lon_samples
    }

    /// Is the point inside the closed bounding box?
    #[inline]
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.lat_min..=self.lat_max).contains(&point.lat)
            && (self.lon_min..=self.lon_max).contains(&point.lon)
    }

    /// Map a geographic point to its cell (first sample >= coordinate).
    pub fn to_cell(&self, point: GeoPoint) -> Result<GridCoord> {
        let out_of_bounds = || NavError::OutOfBounds {
            lat: point.lat,
            lon: point.lon,
        };
        let row = ceiling_index(&self.lat_samples, point.lat).ok_or_else(out_of_bounds)?;
        let col = ceiling_index(&self.lon_samples, point.lon).ok_or_else(out_of_bounds)?;
        Ok(GridCoord::new(row, col))
    }

    /// Axis samples at a cell index.
    pub fn to_geo(&self, cell: GridCoord) -> Result<GeoPoint> {
        match (self.lat_samples.get(cell.row), self.lon_samples.get(cell.col)) {
            (Some(&lat), Some(&lon)) => Ok(GeoPoint::new(lat, lon)),
            _ => Err(NavError::CellOutOfBounds {
                row: cell.row,
                col: cell.col,
            }),
        }
    }

    /// Convert a cell path to geographic waypoints.
    pub fn path_to_geo(&self, cells: &[GridCoord]) -> Result<Vec<GeoPoint>> {
        cells.iter().map(|&c| self.to_geo(c)).collect()
    }
}

/// Index of the first sample >= `value`, `None` if outside `[first, last]`.
fn ceiling_index(samples: &[f64], value: f64) -> Option<usize> {
    let first = *samples.first()?;
    let last = *samples.last()?;
    if !(first..=last).contains(&value) {
        return None;
    }
    let idx = samples.partition_point(|&s| s < value);
    (idx < samples.len()).then_some(idx)
}

/// `n` evenly spaced samples with both endpoints exact.
fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![min];
    }
    let step = (max - min) / (n - 1) as f64;
    let mut samples: Vec<f64> = (0..n).map(|i| min + i as f64 * step).collect();
    samples[n - 1] = max;
    samples
}
