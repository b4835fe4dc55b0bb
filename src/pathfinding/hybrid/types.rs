//! Hybrid A* types.

use std::cmp::Ordering;

use crate::core::{GeoPoint, GridCoord};

use super::motion::KinematicPose;

/// Tolerance (degrees) when deciding whether the step lands on `-max`.
const STEERING_SLACK: f64 = 1e-9;

/// Hybrid A* configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct HybridConfig {
    /// Number of heading buckets in the configuration space
    pub heading_cells: usize,
    /// Largest steering angle magnitude (degrees)
    pub max_steering_deg: f64,
    /// Steering discretization step (degrees)
    pub steering_step_deg: f64,
    /// Step length per expansion (degrees of lat/lon)
    pub forward_speed: f64,
    /// Wheelbase (degrees of lat/lon)
    pub wheelbase: f64,
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            heading_cells: 45,
            max_steering_deg: 35.0,
            steering_step_deg: 5.0,
            forward_speed: 2e-5,
            wheelbase: 1e-4,
        }
    }
}

impl HybridConfig {
    /// Steering angles in radians, from `+max` down to `-max` inclusive.
    ///
    /// Angles are spaced by the step starting at `+max`. When the step does
    /// not divide the range, the last interval is shorter and ends at `-max`.
    pub fn steering_angles(&self) -> Vec<f64> {
        if !(self.steering_step_deg > 0.0) || !(self.max_steering_deg > 0.0) {
            return vec![0.0];
        }
        let max = self.max_steering_deg;
        let span = 2.0 * max / self.steering_step_deg;
        let steps = (span + STEERING_SLACK).floor() as usize;

        let mut angles: Vec<f64> = (0..=steps)
            .map(|k| (max - k as f64 * self.steering_step_deg).max(-max))
            .collect();
        if angles.last().is_some_and(|&last| last > -max + STEERING_SLACK) {
            angles.push(-max);
        }
        angles.into_iter().map(f64::to_radians).collect()
    }
}

/// One node of the search tree. Parents are arena indices and never change
/// after creation.
#[derive(Clone, Copy, Debug)]
pub struct ConfigState {
    pub pose: KinematicPose,
    pub cell: GridCoord,
    pub heading: usize,
    pub g_cost: f64,
    pub f_cost: f64,
    pub parent: Option<usize>,
}

impl ConfigState {
    /// Column index (longitude axis)
    #[inline]
    pub fn x(&self) -> usize {
        self.cell.col
    }

    /// Row index (latitude axis)
    #[inline]
    pub fn y(&self) -> usize {
        self.cell.row
    }
}

/// Open-set entry, lowest `f_cost` first, FIFO among ties.
#[derive(Clone, Copy, Debug)]
pub(super) struct OpenEntry {
    pub f_cost: f64,
    pub seq: u64,
    pub state: usize,
}

impl Eq for OpenEntry {}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_cost
            .total_cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Waypoint of a kinematic path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicWaypoint {
    /// Column index (longitude axis)
    pub x: usize,
    /// Row index (latitude axis)
    pub y: usize,
    pub lat: f64,
    pub lon: f64,
    /// Heading in radians
    pub yaw: f64,
}

impl KinematicWaypoint {
    pub fn pose(&self) -> KinematicPose {
        KinematicPose::new(self.lat, self.lon, self.yaw)
    }

    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// Result of a successful hybrid A* search.
#[derive(Clone, Debug, PartialEq)]
pub struct KinematicPath {
    pub waypoints: Vec<KinematicWaypoint>,
    /// Number of states popped from the open set
    pub nodes_expanded: usize,
}

impl KinematicPath {
    /// `(x_cell, y_cell, yaw)` sequence
    pub fn cells(&self) -> Vec<(usize, usize, f64)> {
        self.waypoints.iter().map(|w| (w.x, w.y, w.yaw)).collect()
    }

    /// `(lat, lon, yaw)` sequence
    pub fn geo(&self) -> Vec<(f64, f64, f64)> {
        self.waypoints.iter().map(|w| (w.lat, w.lon, w.yaw)).collect()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}
