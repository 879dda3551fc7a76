mod forecast;
mod report;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use fallout_core::planner::planning_dates;
use fallout_core::season::migration_status;
use fallout_core::{generate_predictions, score_hotspots, top_predictions, Coordinate, TripPlan};
use forecast::{load_forecast, load_hotspot_forecasts, CliError};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Bird fallout predictions from Open-Meteo forecast files
#[derive(Parser, Debug)]
#[command(name = "fallout-headless")]
#[command(about = "Score migratory bird fallout potential from hourly forecasts", long_about = None)]
struct Args {
    /// Log filter used when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Print JSON instead of a text report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one location from a saved forecast response
    Predict {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Open-Meteo hourly forecast JSON
        #[arg(short, long)]
        forecast: PathBuf,

        /// Reference time for confidence (RFC 3339, default now)
        #[arg(long, env = "FALLOUT_NOW")]
        now: Option<DateTime<Utc>>,
    },

    /// Rank the catalog hotspots for one day
    Top {
        /// Directory holding `<hotspot-slug>.json` forecasts
        #[arg(short = 'd', long, env = "FALLOUT_FORECAST_DIR")]
        forecast_dir: PathBuf,

        /// Day to rank (YYYY-MM-DD, default today UTC)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Number of hotspots to show
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Reference time for confidence (RFC 3339, default now)
        #[arg(long, env = "FALLOUT_NOW")]
        now: Option<DateTime<Utc>>,
    },

    /// Hotspot × day planning matrix
    Plan {
        /// Directory holding `<hotspot-slug>.json` forecasts
        #[arg(short = 'd', long, env = "FALLOUT_FORECAST_DIR")]
        forecast_dir: PathBuf,

        /// First planning day (YYYY-MM-DD, default today UTC)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Number of planning days
        #[arg(long, default_value_t = 7)]
        days: usize,

        /// Reference time for confidence (RFC 3339, default now)
        #[arg(long, env = "FALLOUT_NOW")]
        now: Option<DateTime<Utc>>,
    },

    /// Where a date sits in the migration calendar
    Status {
        /// Day to describe (YYYY-MM-DD, default today UTC)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let json = args.json;

    match args.command {
        Command::Predict {
            lat,
            lon,
            forecast,
            now,
        } => {
            let coord = Coordinate::new(lat, lon)?;
            let now = now.unwrap_or_else(Utc::now);
            let samples = load_forecast(&forecast)?;
            info!(location = %coord, hours = samples.len(), "scoring forecast");

            let predictions = generate_predictions(coord, &samples, now);
            if json {
                print_json(&predictions)?;
            } else {
                report::print_predictions(coord, &predictions);
            }
        }

        Command::Top {
            forecast_dir,
            date,
            limit,
            now,
        } => {
            let now = now.unwrap_or_else(Utc::now);
            let date = date.unwrap_or_else(|| now.date_naive());
            let sites = score_hotspots(load_hotspot_forecasts(&forecast_dir)?, now);

            let ranked = top_predictions(&sites, date, limit);
            if json {
                print_json(&ranked)?;
            } else {
                report::print_top(date, &ranked);
            }
        }

        Command::Plan {
            forecast_dir,
            start,
            days,
            now,
        } => {
            let now = now.unwrap_or_else(Utc::now);
            let start = start.unwrap_or_else(|| now.date_naive());
            let sites = score_hotspots(load_hotspot_forecasts(&forecast_dir)?, now);

            let plan = TripPlan::build(&sites, planning_dates(start, days));
            if json {
                print_json(&plan)?;
            } else {
                report::print_plan(&plan);
            }
        }

        Command::Status { date } => {
            let date = date.unwrap_or_else(|| Utc::now().date_naive());
            let status = migration_status(date);
            if json {
                print_json(&status)?;
            } else {
                report::print_status(date, &status);
            }
        }
    }

    Ok(())
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
