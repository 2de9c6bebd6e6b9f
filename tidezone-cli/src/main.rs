//! `zdf-create` builds tide zones between two stations and writes them into a ZDF file.
//!
//! Stations can be typed in as geographic coordinates:
//!
//! ```shell
//! zdf-create manual --from=-23,-43 --to=-23.01,-43 --num-lines 4
//! ```
//!
//! or given as two clicks in the native coordinates of a chart, the same way the chart viewer passes them:
//!
//! ```shell
//! zdf-create clicks --crs EPSG:32723 --from 704000,7455000 --to 705000,7450000 --undo 1
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use tidezone::control::{InputSession, SessionEvent, SessionResponse};
use tidezone::dms::{lat_to_dms, lon_to_dms};
use tidezone::zdf::ZdfWriter;
use tidezone::{GeodesicSolver, ZoneCollection, ZoneConfig};
use tidezone_types::cartesian::Point2d;
use tidezone_types::geo::GeoPoint;
use tidezone_types::latlon;

#[derive(Parser, Debug)]
#[command(name = "zdf-create", version, about = "Tide zone definition file generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Stations typed in as `LAT,LON` in decimal degrees.
    Manual(ManualOpts),
    /// Stations selected by two clicks on a chart, given as `X,Y` in the chart CRS.
    Clicks(ClicksOpts),
}

#[derive(Args, Debug)]
struct ManualOpts {
    /// First station, `LAT,LON`.
    #[arg(long, allow_hyphen_values = true)]
    from: Pair,
    /// Second station, `LAT,LON`.
    #[arg(long, allow_hyphen_values = true)]
    to: Pair,
    #[command(flatten)]
    zones: ZoneOpts,
}

#[derive(Args, Debug)]
struct ClicksOpts {
    /// CRS of the chart: `EPSG:<code>`, WKT with an EPSG authority, or a `geodesy` operator.
    #[arg(long)]
    crs: String,
    /// First click, `X,Y`.
    #[arg(long, allow_hyphen_values = true)]
    from: Pair,
    /// Second click, `X,Y`.
    #[arg(long, allow_hyphen_values = true)]
    to: Pair,
    /// Number of undo events sent after the second click.
    #[arg(long, default_value_t = 0)]
    undo: usize,
    #[command(flatten)]
    zones: ZoneOpts,
}

#[derive(Args, Debug)]
struct ZoneOpts {
    /// Number of zones along the baseline [default: 5].
    #[arg(long)]
    num_lines: Option<usize>,
    /// Length of the perpendicular lines in nautical miles [default: 1.0].
    #[arg(long)]
    length_nm: Option<f64>,
    /// JSON file with `num_lines` and `length_nm`. Flags take precedence over the file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Path of the zone file to write.
    #[arg(short, long, default_value = "zonas.zdf")]
    output: PathBuf,
    /// Repeat the first vertex of every zone at the end of its block.
    #[arg(long)]
    legacy_rings: bool,
}

impl ZoneOpts {
    fn zone_config(&self) -> Result<ZoneConfig> {
        let mut config = match &self.config {
            Some(path) => ZoneConfig::from_json_file(path)?,
            None => ZoneConfig::default(),
        };

        if let Some(num_lines) = self.num_lines {
            config.num_lines = num_lines;
        }
        if let Some(length_nm) = self.length_nm {
            config.length_nm = length_nm;
        }

        config.validate()?;
        Ok(config)
    }

    fn export(&self, zones: &ZoneCollection) -> Result<()> {
        ZdfWriter::new()
            .with_closed_rings(self.legacy_rings)
            .export(zones, &self.output)
            .with_context(|| format!("cannot export zones to {}", self.output.display()))
    }
}

/// Two comma separated numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pair(f64, f64);

impl FromStr for Pair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (first, second) = s
            .split_once(',')
            .ok_or_else(|| format!("expected two comma separated numbers, got '{s}'"))?;
        let parse = |value: &str| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|err| format!("invalid number '{}': {err}", value.trim()))
        };

        Ok(Pair(parse(first)?, parse(second)?))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match &cli.mode {
        Mode::Manual(opts) => run_manual(opts),
        Mode::Clicks(opts) => run_clicks(opts),
    }
}

fn run_manual(opts: &ManualOpts) -> Result<()> {
    let config = opts.zones.zone_config()?;
    let [station_a, station_b] = [opts.from, opts.to].map(|Pair(lat, lon)| latlon!(lat, lon));

    let (zones, _) =
        ZoneCollection::generate(&GeodesicSolver::wgs84(), config, station_a, station_b)?;

    report(&zones);
    opts.zones.export(&zones)?;
    println!("Zone file written to {}", opts.zones.output.display());
    Ok(())
}

fn run_clicks(opts: &ClicksOpts) -> Result<()> {
    let config = opts.zones.zone_config()?;
    let mut session = InputSession::from_crs_definition(&opts.crs, config)?;
    log::info!("Chart CRS: {:?}", session.crs().projection_type());

    for Pair(x, y) in [opts.from, opts.to] {
        session.handle(SessionEvent::PointSelected(Point2d::new(x, y)))?;
    }

    for _ in 0..opts.undo {
        if session.handle(SessionEvent::Undo)? == SessionResponse::NothingToUndo {
            log::warn!("Nothing left to undo");
            break;
        }
    }

    let zones = session
        .zones()
        .ok_or_else(|| anyhow!("the clicks did not produce a baseline"))?;

    report(zones);
    opts.zones.export(zones)?;
    println!("Zone file written to {}", opts.zones.output.display());
    Ok(())
}

fn report(zones: &ZoneCollection) {
    let baseline = zones.baseline();
    for (name, station) in [("Station 1", baseline.station_a()), ("Station 2", baseline.station_b())] {
        println!("{name}: {} {}", lat_to_dms(station.lat()), lon_to_dms(station.lon()));
    }
    println!(
        "Baseline: {:.2} m at {:.4}°",
        baseline.distance(),
        baseline.azimuth()
    );
    println!("Zones: {}", zones.len());
}
