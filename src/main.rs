use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use plotmeter::config::FileConfig;
use plotmeter::domain::{BoundaryRing, Coordinate};
use plotmeter::geometry::{format_distance, haversine_km};
use plotmeter::listing::profile_boundary;
use plotmeter::units::{AreaUnit, convert, round2};

/// Measure land-plot boundaries from lat/lng coordinates
///
/// Examples:
///   # Measure a boundary ring stored as JSON [{"lat":..,"lng":..},...]
///   plotmeter area plot.json
///
///   # Same, as machine-readable JSON
///   plotmeter --json area plot.json
///
///   # Great-circle distance between two points
///   plotmeter distance 17.4 78.4 17.5 78.5
///
///   # Convert between land units
///   plotmeter convert 2.5 acres guntas
#[derive(Parser, Debug)]
#[command(name = "plotmeter")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches plotmeter.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Measure a boundary ring: area in every land unit, centroid, polygon text
    Area {
        /// JSON file holding the ring vertices
        ring: PathBuf,
    },
    /// Great-circle distance between two lat/lng points
    Distance {
        #[arg(allow_hyphen_values = true)]
        lat1: f64,
        #[arg(allow_hyphen_values = true)]
        lng1: f64,
        #[arg(allow_hyphen_values = true)]
        lat2: f64,
        #[arg(allow_hyphen_values = true)]
        lng2: f64,
    },
    /// Convert an area value between land units
    Convert {
        value: f64,
        /// Source unit: sq_feet, sq_yards, guntas, or acres
        from: AreaUnit,
        /// Target unit: sq_feet, sq_yards, guntas, or acres
        to: AreaUnit,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = match &args.config {
        Some(path) => FileConfig::load_from(path),
        None => FileConfig::load(),
    }
    .unwrap_or_default();

    let json = args.json || file_config.json;
    let verbose = args.verbose || file_config.verbose;

    let filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    match args.command {
        Command::Area { ring } => run_area(&ring, json),
        Command::Distance {
            lat1,
            lng1,
            lat2,
            lng2,
        } => run_distance(lat1, lng1, lat2, lng2, json),
        Command::Convert { value, from, to } => run_convert(value, from, to, json),
    }
}

fn load_ring(path: &Path) -> Result<BoundaryRing> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read ring file: {}", path.display()))?;
    BoundaryRing::from_json(&contents)
        .with_context(|| format!("Failed to parse ring JSON from {}", path.display()))
}

fn run_area(path: &Path, json: bool) -> Result<()> {
    let ring = load_ring(path)?;
    log::debug!("ring vertices: {}", ring.len());

    let profile = profile_boundary(&ring.vertices)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        let m = profile.measurement;
        println!("Area:     {} sq ft", m.sq_feet);
        println!("          {} sq yd", m.sq_yards);
        println!("          {} guntas", m.guntas);
        println!("          {} acres", m.acres);
        println!(
            "Centroid: {}, {}",
            profile.centroid.lat, profile.centroid.lng
        );
        println!("WKT:      {}", profile.wkt);
    }

    Ok(())
}

fn run_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64, json: bool) -> Result<()> {
    let a = Coordinate::new(lat1, lng1);
    let b = Coordinate::new(lat2, lng2);
    if !a.is_valid() || !b.is_valid() {
        bail!("Coordinates out of range: lat in [-90, 90], lng in [-180, 180]");
    }

    let km = haversine_km(&a, &b);
    log::debug!("distance: {} km", km);

    if json {
        println!(
            "{}",
            serde_json::json!({ "km": round2(km), "display": format_distance(km) })
        );
    } else {
        println!("{}", format_distance(km));
    }

    Ok(())
}

fn run_convert(value: f64, from: AreaUnit, to: AreaUnit, json: bool) -> Result<()> {
    let converted = convert(value, from, to);

    if json {
        println!(
            "{}",
            serde_json::json!({ "value": converted, "unit": to.as_str() })
        );
    } else {
        println!("{} {}", converted, to);
    }

    Ok(())
}
