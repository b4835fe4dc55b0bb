//! Grid and obstacle configuration sections.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geo::GeoGrid;
use crate::grid::{ObstacleRect, OccupancyGrid};

use super::defaults;

/// Geographic box and resolution
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSection {
    #[serde(default = "defaults::lat_min")]
    pub lat_min: f64,

    #[serde(default = "defaults::lat_max")]
    pub lat_max: f64,

    #[serde(default = "defaults::lon_min")]
    pub lon_min: f64,

    #[serde(default = "defaults::lon_max")]
    pub lon_max: f64,

    /// Latitude samples
    #[serde(default = "defaults::grid_size")]
    pub rows: usize,

    /// Longitude samples
    #[serde(default = "defaults::grid_size")]
    pub cols: usize,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            lat_min: 38.1598,
            lat_max: 38.163,
            lon_min: -122.457,
            lon_max: -122.451,
            rows: 200,
            cols: 200,
        }
    }
}

impl GridSection {
    pub fn to_geo_grid(&self) -> Result<GeoGrid> {
        GeoGrid::new(
            self.lat_min,
            self.lat_max,
            self.lon_min,
            self.lon_max,
            self.rows,
            self.cols,
        )
    }

    /// Occupancy grid of this shape with `obstacles` filled in.
    pub fn to_occupancy_grid(&self, obstacles: &[ObstacleRect]) -> Result<OccupancyGrid> {
        let mut grid = OccupancyGrid::try_new(self.rows, self.cols)?;
        for &rect in obstacles {
            grid.fill_rect(rect);
        }
        Ok(grid)
    }
}
