//! Command-line front end for route planning and target geolocation.
//!
//! Usage:
//!   akash-plan plan --from 38.1600,-122.4560 --to 38.1620,-122.4520
//!   akash-plan plan --from 38.1600,-122.4560 --to 38.1620,-122.4520 --hybrid --yaw 0.0 --mission
//!   akash-plan locate --box 0.40,0.20,0.50,0.30 --at 38.1614,-122.4545 --alt 20 --yaw 90
//!   akash-plan survey --at 38.1614,-122.4545 --search 38.1620,-122.4520

use clap::{Parser, Subcommand};
use log::info;
use std::path::Path;

use akash_nav::{
    AkashConfig, DetectionBox, GeoPoint, KinematicPose, MissionPlan, TargetGeolocator,
    VehicleState,
};

/// Grid route planning and aerial target geolocation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "configs/config.yaml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a route between two points inside the configured box
    Plan {
        /// Start as "lat,lon"
        #[arg(long, value_parser = parse_point)]
        from: GeoPoint,

        /// Goal as "lat,lon"
        #[arg(long, value_parser = parse_point)]
        to: GeoPoint,

        /// Use the kinematic (hybrid A*) planner
        #[arg(long)]
        hybrid: bool,

        /// Initial heading for the hybrid planner (radians, CCW from east)
        #[arg(long, default_value_t = 0.0)]
        yaw: f64,

        /// Print the upload-ready mission as YAML instead of waypoints
        #[arg(long)]
        mission: bool,
    },

    /// Project a detection box to ground coordinates
    Locate {
        /// Normalized box as "x_min,y_min,x_max,y_max"
        #[arg(long = "box", value_parser = parse_box)]
        detection: DetectionBox,

        /// Vehicle position as "lat,lon"
        #[arg(long, value_parser = parse_point)]
        at: GeoPoint,

        /// Altitude above ground (m)
        #[arg(long)]
        alt: f64,

        /// Vehicle compass yaw (degrees)
        #[arg(long, default_value_t = 0.0)]
        yaw: f64,

        /// Image width in pixels (defaults to camera.image_width)
        #[arg(long)]
        width: Option<u32>,

        /// Image height in pixels (defaults to camera.image_height)
        #[arg(long)]
        height: Option<u32>,
    },

    /// Print a square survey mission, optionally around a search point
    Survey {
        /// Home position as "lat,lon"
        #[arg(long, value_parser = parse_point)]
        at: GeoPoint,

        /// Search point as "lat,lon"
        #[arg(long, value_parser = parse_point)]
        search: Option<GeoPoint>,
    },
}

fn parse_floats<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let values: Vec<f64> = s
        .split(',')
        .map(|v| v.trim().parse::<f64>().map_err(|e| format!("'{v}': {e}")))
        .collect::<Result<_, _>>()?;
    values
        .try_into()
        .map_err(|v: Vec<f64>| format!("expected {N} comma-separated values, got {}", v.len()))
}

fn parse_point(s: &str) -> Result<GeoPoint, String> {
    let [lat, lon] = parse_floats::<2>(s)?;
    Ok(GeoPoint::new(lat, lon))
}

fn parse_box(s: &str) -> Result<DetectionBox, String> {
    let [x_min, y_min, x_max, y_max] = parse_floats::<4>(s)?;
    Ok(DetectionBox::new(x_min, y_min, x_max, y_max))
}

fn load_config(path: &str) -> AkashConfig {
    let config_path = Path::new(path);
    if config_path.exists() {
        AkashConfig::load(config_path).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config: {}, using defaults", e);
            AkashConfig::default()
        })
    } else {
        info!("Config not found at {}, using defaults", config_path.display());
        AkashConfig::default()
    }
}

fn print_yaml<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let yaml = serde_yaml::to_string(value).map_err(|e| e.to_string())?;
    print!("{yaml}");
    Ok(())
}

fn run(args: Args) -> Result<(), String> {
    let config = load_config(&args.config);

    match args.command {
        Command::Plan {
            from,
            to,
            hybrid,
            yaw,
            mission,
        } => {
            let planner = config.to_route_planner().map_err(|e| e.to_string())?;
            let params = config.to_mission_params();

            if hybrid {
                let path = planner
                    .plan_kinematic(KinematicPose::new(from.lat, from.lon, yaw), to)
                    .map_err(|e| e.to_string())?;
                if mission {
                    return print_yaml(&MissionPlan::from_kinematic(from, &path, &params));
                }
                println!("# {} states, {} expanded", path.len(), path.nodes_expanded);
                for (lat, lon, yaw) in path.geo() {
                    println!("{lat:.7},{lon:.7},{yaw:.4}");
                }
            } else {
                let route = planner.plan_discrete(from, to).map_err(|e| e.to_string())?;
                if mission {
                    return print_yaml(&MissionPlan::from_route(from, &route.waypoints, &params));
                }
                println!(
                    "# {} cells, {} waypoints, cost {:.3}, {} expanded",
                    route.cells.len(),
                    route.waypoints.len(),
                    route.cost,
                    route.nodes_expanded
                );
                for wp in &route.waypoints {
                    println!("{:.7},{:.7}", wp.lat, wp.lon);
                }
            }
            Ok(())
        }

        Command::Locate {
            detection,
            at,
            alt,
            yaw,
            width,
            height,
        } => {
            let width = width
                .or(config.camera.image_width)
                .ok_or("image width not given and camera.image_width unset")?;
            let height = height
                .or(config.camera.image_height)
                .ok_or("image height not given and camera.image_height unset")?;

            let locator = TargetGeolocator::new(config.to_camera_model());
            let fix = locator
                .localize(&detection, width, height, &VehicleState::new(at, alt, yaw))
                .map_err(|e| e.to_string())?;
            print_yaml(&fix)
        }

        Command::Survey { at, search } => {
            let params = config.to_mission_params();
            let pattern = config.square_pattern();
            let plan = match search {
                Some(point) => MissionPlan::search(at, point, &pattern, &params),
                None => MissionPlan::square(at, &pattern, &params),
            }
            .map_err(|e| e.to_string())?;
            print_yaml(&plan)
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
