//! Boolean occupancy storage.

use serde::{Deserialize, Serialize};

use crate::core::GridCoord;
use crate::error::{NavError, Result};

/// Rectangular block of cells, inclusive of the min corner and exclusive of
/// the max corner. Corners may be given in either order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleRect {
    pub row_a: usize,
    pub col_a: usize,
    pub row_b: usize,
    pub col_b: usize,
}

impl ObstacleRect {
    /// Rectangle spanned by two corners.
    pub fn from_corners(a: GridCoord, b: GridCoord) -> Self {
        Self {
            row_a: a.row,
            col_a: a.col,
            row_b: b.row,
            col_b: b.col,
        }
    }

    fn row_range(&self) -> std::ops::Range<usize> {
        self.row_a.min(self.row_b)..self.row_a.max(self.row_b)
    }

    fn col_range(&self) -> std::ops::Range<usize> {
        self.col_a.min(self.col_b)..self.col_a.max(self.col_b)
    }
}

/// Row-major obstacle mask; `true` means occupied. Default is all free.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl OccupancyGrid {
    /// Create an all-free grid.
    ///
    /// # Panics
    /// If `rows * cols` overflows `usize`. Use [`OccupancyGrid::try_new`] for
    /// sizes that come from user input.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(grid) => grid,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create an all-free grid, rejecting a cell count that overflows.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or_else(|| NavError::InvalidGrid(format!("{rows}x{cols} cells overflow usize")))?;
        Ok(Self {
            cells: vec![false; len],
            rows,
            cols,
        })
    }

    /// Parse an ASCII map, one line per row starting at row 0.
    ///
    /// `#` marks an occupied cell, anything else is free. All lines must
    /// have the same length.
    pub fn from_ascii(map: &str) -> Result<Self> {
        let lines: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        if lines.is_empty() || cols == 0 {
            return Err(NavError::InvalidGrid("empty ascii map".to_string()));
        }

        let mut grid = Self::new(lines.len(), cols);
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(NavError::InvalidGrid(format!(
                    "ascii map row {row} has {} columns, expected {cols}",
                    line.chars().count()
                )));
            }
            for (col, ch) in line.chars().enumerate() {
                if ch == '#' {
                    grid.cells[row * cols + col] = true;
                }
            }
        }
        Ok(grid)
    }

    /// Grid height in cells
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width in cells
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if grid coordinates are within bounds
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> usize {
        coord.row * self.cols + coord.col
    }

    /// Occupied state; out-of-range cells read as occupied.
    #[inline]
    pub fn is_occupied(&self, coord: GridCoord) -> bool {
        !self.is_valid_coord(coord) || self.cells[self.index(coord)]
    }

    /// In range and not occupied.
    #[inline]
    pub fn is_free(&self, coord: GridCoord) -> bool {
        !self.is_occupied(coord)
    }

    /// Set one cell.
    pub fn set(&mut self, coord: GridCoord, occupied: bool) -> Result<()> {
        if !self.is_valid_coord(coord) {
            return Err(NavError::CellOutOfBounds {
                row: coord.row,
                col: coord.col,
            });
        }
        let idx = self.index(coord);
        self.cells[idx] = occupied;
        Ok(())
    }

    /// Mark a rectangle occupied, clipped to the grid.
    ///
    /// Returns the number of cells that changed from free to occupied.
    pub fn fill_rect(&mut self, rect: ObstacleRect) -> usize {
        let rows = rect.row_range();
        let cols = rect.col_range();
        let mut changed = 0;
        for row in rows.start..rows.end.min(self.rows) {
            for col in cols.start..cols.end.min(self.cols) {
                let idx = row * self.cols + col;
                if !self.cells[idx] {
                    self.cells[idx] = true;
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Free every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Render as ASCII (`#` occupied, `.` free), row 0 first.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in self.cells.chunks(self.cols.max(1)) {
            out.extend(row.iter().map(|&c| if c { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }
}
