//! Mission waypoint lists for the flight controller uploader.
//!
//! Builds the ordered item list and the fixed per-mission parameters; the
//! upload, arming and progress tracking happen outside this crate.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::GeoPoint;
use crate::core::math::rad_to_deg;
use crate::error::Result;
use crate::geo::offset_meters;
use crate::pathfinding::KinematicPath;

/// One waypoint of an uploaded mission.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MissionItem {
    pub lat: f64,
    pub lon: f64,
    /// Relative altitude (m)
    pub altitude_m: f64,
    pub speed_m_s: f64,
    pub is_fly_through: bool,
    pub gimbal_pitch_deg: f64,
    pub gimbal_yaw_deg: f64,
    /// Compass heading to hold at this waypoint, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaw_deg: Option<f64>,
}

/// Parameters shared by every item of a mission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MissionParams {
    pub altitude_m: f64,
    pub speed_m_s: f64,
    pub rtl_altitude_m: f64,
    pub gimbal_pitch_deg: f64,
    pub gimbal_yaw_deg: f64,
    /// VTOL airframes take off through a separate action, so no takeoff item
    pub vtol: bool,
}

impl Default for MissionParams {
    fn default() -> Self {
        Self {
            altitude_m: 20.0,
            speed_m_s: 10.0,
            rtl_altitude_m: 10.0,
            gimbal_pitch_deg: 0.0,
            gimbal_yaw_deg: 0.0,
            vtol: false,
        }
    }
}

impl MissionParams {
    fn item(&self, point: GeoPoint) -> MissionItem {
        MissionItem {
            lat: point.lat,
            lon: point.lon,
            altitude_m: self.altitude_m,
            speed_m_s: self.speed_m_s,
            is_fly_through: true,
            gimbal_pitch_deg: self.gimbal_pitch_deg,
            gimbal_yaw_deg: self.gimbal_yaw_deg,
            yaw_deg: None,
        }
    }
}

/// Legs of the square survey, chained from its anchor point (m).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SquarePattern {
    pub north_m: f64,
    pub east_m: f64,
    /// Third leg, negative to head back south
    pub south_m: f64,
}

impl Default for SquarePattern {
    fn default() -> Self {
        Self {
            north_m: 10.0,
            east_m: 10.0,
            south_m: -10.0,
        }
    }
}

impl SquarePattern {
    /// Corner points visited after `anchor`.
    pub fn corners(&self, anchor: GeoPoint) -> Result<[GeoPoint; 3]> {
        let north = offset_meters(anchor, self.north_m, 0.0)?;
        let east = offset_meters(north, 0.0, self.east_m)?;
        let south = offset_meters(east, self.south_m, 0.0)?;
        Ok([north, east, south])
    }
}

/// Ordered mission ready for upload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MissionPlan {
    pub items: Vec<MissionItem>,
    pub takeoff_altitude_m: f64,
    pub rtl_altitude_m: f64,
    /// Return to launch after the last item
    pub return_to_launch: bool,
}

impl MissionPlan {
    fn start(home: GeoPoint, params: &MissionParams, with_takeoff: bool) -> Self {
        let items = if with_takeoff {
            vec![params.item(home)]
        } else {
            Vec::new()
        };
        Self {
            items,
            takeoff_altitude_m: params.altitude_m,
            rtl_altitude_m: params.rtl_altitude_m,
            return_to_launch: true,
        }
    }

    /// Fly a planned route. Non-VTOL missions start with a takeoff item at
    /// `home`.
    pub fn from_route(home: GeoPoint, waypoints: &[GeoPoint], params: &MissionParams) -> Self {
        let mut plan = Self::start(home, params, !params.vtol);
        plan.items.extend(waypoints.iter().map(|&wp| params.item(wp)));
        debug!("mission from route: {} items", plan.items.len());
        plan
    }

    /// Fly a kinematic path, holding each state's heading.
    pub fn from_kinematic(home: GeoPoint, path: &KinematicPath, params: &MissionParams) -> Self {
        let mut plan = Self::start(home, params, !params.vtol);
        plan.items.extend(path.waypoints.iter().map(|w| MissionItem {
            yaw_deg: Some(compass_heading_deg(w.yaw)),
            ..params.item(w.position())
        }));
        plan
    }

    /// Takeoff at `home`, then the square legs.
    pub fn square(home: GeoPoint, pattern: &SquarePattern, params: &MissionParams) -> Result<Self> {
        let mut plan = Self::start(home, params, true);
        for corner in pattern.corners(home)? {
            plan.items.push(params.item(corner));
        }
        Ok(plan)
    }

    /// Takeoff at `home`, fly to `search`, then run the square around it.
    pub fn search(
        home: GeoPoint,
        search: GeoPoint,
        pattern: &SquarePattern,
        params: &MissionParams,
    ) -> Result<Self> {
        let mut plan = Self::start(home, params, true);
        plan.items.push(params.item(search));
        for corner in pattern.corners(search)? {
            plan.items.push(params.item(corner));
        }
        debug!(
            "search mission around ({:.6}, {:.6}): {} items",
            search.lat,
            search.lon,
            plan.items.len()
        );
        Ok(plan)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Planner yaw (radians, counter-clockwise from east) to compass degrees.
pub fn compass_heading_deg(yaw_rad: f64) -> f64 {
    (90.0 - rad_to_deg(yaw_rad)).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathfinding::KinematicWaypoint;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    const HOME: GeoPoint = GeoPoint::new(38.1614, -122.4545);

    #[test]
    fn test_route_mission_takeoff_item() {
        let route = [GeoPoint::new(38.1620, -122.4540), GeoPoint::new(38.1625, -122.4530)];
        let params = MissionParams::default();

        let plan = MissionPlan::from_route(HOME, &route, &params);
        assert_eq!(plan.len(), 3);
        assert_eq!((plan.items[0].lat, plan.items[0].lon), (HOME.lat, HOME.lon));
        assert!(plan.items.iter().all(|i| i.altitude_m == 20.0 && i.is_fly_through));
        assert!(plan.return_to_launch);
        assert_eq!(plan.rtl_altitude_m, 10.0);

        let vtol = MissionParams {
            vtol: true,
            ..params
        };
        let plan = MissionPlan::from_route(HOME, &route, &vtol);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.items[0].lat, route[0].lat);
    }

    #[test]
    fn test_square_legs() {
        let plan =
            MissionPlan::square(HOME, &SquarePattern::default(), &MissionParams::default()).unwrap();
        assert_eq!(plan.len(), 4);

        let [_, north, east, south] = [plan.items[0], plan.items[1], plan.items[2], plan.items[3]];
        assert!(north.lat > HOME.lat);
        assert_eq!(north.lon, HOME.lon);
        assert_eq!(east.lat, north.lat);
        assert!(east.lon > north.lon);
        // 10 m north then 10 m south returns to the home latitude
        assert_abs_diff_eq!(south.lat, HOME.lat, epsilon = 1e-12);
        assert_eq!(south.lon, east.lon);
    }

    #[test]
    fn test_search_mission_visits_search_point() {
        let search = GeoPoint::new(38.1620, -122.4520);
        let plan = MissionPlan::search(
            HOME,
            search,
            &SquarePattern::default(),
            &MissionParams::default(),
        )
        .unwrap();
        assert_eq!(plan.len(), 5);
        assert_eq!((plan.items[1].lat, plan.items[1].lon), (search.lat, search.lon));
        assert!(plan.items[2].lat > search.lat);
    }

    #[test]
    fn test_kinematic_mission_headings() {
        let path = KinematicPath {
            waypoints: vec![
                KinematicWaypoint {
                    x: 0,
                    y: 0,
                    lat: 38.1614,
                    lon: -122.4545,
                    yaw: 0.0,
                },
                KinematicWaypoint {
                    x: 0,
                    y: 0,
                    lat: 38.1614,
                    lon: -122.4546,
                    yaw: PI,
                },
            ],
            nodes_expanded: 2,
        };
        let plan = MissionPlan::from_kinematic(HOME, &path, &MissionParams::default());
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.items[0].yaw_deg, None);
        assert_abs_diff_eq!(plan.items[1].yaw_deg.unwrap(), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(plan.items[2].yaw_deg.unwrap(), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn test_plan_serializes() {
        let plan =
            MissionPlan::square(HOME, &SquarePattern::default(), &MissionParams::default()).unwrap();
        let yaml = serde_yaml::to_string(&plan).unwrap();
        assert!(yaml.contains("return_to_launch: true"));
        let back: MissionPlan = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.items.len(), plan.items.len());
    }
}
