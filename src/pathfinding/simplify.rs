//! Collinearity-based waypoint reduction.
//!
//! Three points are collinear when the determinant
//!
//! ```text
//! | x1 y1 1 |
//! | x2 y2 1 |
//! | x3 y3 1 |
//! ```
//!
//! is (near) zero. The middle point of every collinear triple is dropped and
//! the scan steps back one position, since the removal also forms a new
//! triple with the preceding point. A straight run of any length collapses
//! to its two endpoints, even when the path doubles back over itself.
//!
//! Run it on grid cells, before converting to geographic coordinates: the
//! determinant scales with the square of the coordinate spacing, and
//! lat/lon steps of 1e-5° would make every triple look collinear under the
//! default epsilon.

use crate::core::{GeoPoint, GridCoord};

/// Default determinant threshold below which three points count as collinear.
pub const DEFAULT_COLLINEARITY_EPSILON: f64 = 1e-6;

/// A point that can be read as planar `(x, y)`.
pub trait PlanarPoint: Copy {
    fn xy(&self) -> (f64, f64);
}

impl PlanarPoint for GridCoord {
    #[inline]
    fn xy(&self) -> (f64, f64) {
        (self.row as f64, self.col as f64)
    }
}

impl PlanarPoint for GeoPoint {
    #[inline]
    fn xy(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

impl PlanarPoint for (f64, f64) {
    #[inline]
    fn xy(&self) -> (f64, f64) {
        *self
    }
}

/// Determinant of the homogeneous 3x3 matrix of three points.
#[inline]
pub fn collinearity_determinant<P: PlanarPoint>(p1: &P, p2: &P, p3: &P) -> f64 {
    let (x1, y1) = p1.xy();
    let (x2, y2) = p2.xy();
    let (x3, y3) = p3.xy();
    x1 * (y2 - y3) - y1 * (x2 - x3) + (x2 * y3 - x3 * y2)
}

/// True if the three points are collinear within `epsilon`.
#[inline]
pub fn is_collinear<P: PlanarPoint>(p1: &P, p2: &P, p3: &P, epsilon: f64) -> bool {
    collinearity_determinant(p1, p2, p3).abs() < epsilon
}

/// Remove the middle point of every collinear triple.
///
/// Start and end points are always kept. Re-running on the output removes
/// nothing.
pub fn simplify_path<P: PlanarPoint>(path: &[P], epsilon: f64) -> Vec<P> {
    let mut pruned = path.to_vec();
    let mut i = 0;

    while i + 2 < pruned.len() {
        if is_collinear(&pruned[i], &pruned[i + 1], &pruned[i + 2], epsilon) {
            pruned.remove(i + 1);
            i = i.saturating_sub(1);
        } else {
            i += 1;
        }
    }

    pruned
}

/// [`simplify_path`] with [`DEFAULT_COLLINEARITY_EPSILON`].
pub fn simplify<P: PlanarPoint>(path: &[P]) -> Vec<P> {
    simplify_path(path, DEFAULT_COLLINEARITY_EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(points: &[(usize, usize)]) -> Vec<GridCoord> {
        points.iter().map(|&(r, c)| GridCoord::new(r, c)).collect()
    }

    #[test]
    fn test_diagonal_triple_collapses() {
        let path = cells(&[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(simplify(&path), cells(&[(0, 0), (2, 2)]));
    }

    #[test]
    fn test_long_run_collapses_and_corners_survive() {
        let path = cells(&[(0, 0), (0, 1), (0, 2), (0, 3), (1, 4), (2, 5), (3, 5), (4, 5)]);
        let simplified = simplify(&path);
        assert_eq!(simplified, cells(&[(0, 0), (0, 3), (2, 5), (4, 5)]));
    }

    #[test]
    fn test_idempotent() {
        let path = cells(&[
            (0, 0),
            (1, 1),
            (2, 2),
            (2, 3),
            (2, 4),
            (3, 5),
            (4, 5),
            (5, 5),
            (6, 6),
        ]);
        let once = simplify(&path);
        assert_eq!(simplify(&once), once);
    }

    #[test]
    fn test_doubling_back_collapses_in_one_pass() {
        // Dropping the spur at (1, 1) makes (0, 0), (1, 0), (1, 0) collinear
        let path = cells(&[(0, 0), (1, 0), (1, 1), (1, 0), (2, 0)]);
        let once = simplify(&path);
        assert_eq!(once, cells(&[(0, 0), (2, 0)]));
        assert_eq!(simplify(&once), once);
    }

    #[test]
    fn test_short_paths_unchanged() {
        let empty: Vec<GridCoord> = Vec::new();
        assert!(simplify(&empty).is_empty());
        let two = cells(&[(0, 0), (5, 5)]);
        assert_eq!(simplify(&two), two);
    }

    #[test]
    fn test_duplicate_points_are_removed() {
        // Repeated points are trivially collinear with their neighbors
        let path = cells(&[(0, 0), (0, 0), (3, 1)]);
        assert_eq!(simplify(&path), cells(&[(0, 0), (3, 1)]));
    }

    #[test]
    fn test_tuple_points_with_custom_epsilon() {
        let path = [(0.0, 0.0), (1.0, 0.01), (2.0, 0.0)];
        assert_eq!(simplify(&path).len(), 3);
        assert_eq!(simplify_path(&path, 0.1).len(), 2);
    }
}
