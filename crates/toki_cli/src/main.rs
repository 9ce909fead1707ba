use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use toki_api::{CalendarRequest, calendar_day, calendar_range, parse_iso_date};

#[derive(Parser)]
#[command(name = "toki", about = "Japanese lunisolar calendar records")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record for a single JST civil date
    Day {
        /// Date as YYYY-MM-DD
        date: String,
        #[command(flatten)]
        opts: CommonOpts,
    },
    /// Record for an inclusive date range
    Range {
        /// Start date as YYYY-MM-DD
        start: String,
        /// End date as YYYY-MM-DD
        end: String,
        /// Maximum number of days in the range
        #[arg(long, default_value_t = 370)]
        limit_days: i64,
        #[command(flatten)]
        opts: CommonOpts,
    },
}

#[derive(clap::Args)]
struct CommonOpts {
    /// Observer latitude in degrees (requires --lon)
    #[arg(long)]
    lat: Option<f64>,
    /// Observer longitude in degrees (requires --lat)
    #[arg(long)]
    lon: Option<f64>,
    /// Ephemeris name, e.g. de440s.bsp
    #[arg(long)]
    ephemeris: Option<String>,
    /// Explicit ephemeris path
    #[arg(long)]
    ephemeris_path: Option<PathBuf>,
    /// Pretty-print the JSON record
    #[arg(long)]
    pretty: bool,
}

impl CommonOpts {
    fn request(&self, limit_days: i64) -> CalendarRequest {
        CalendarRequest {
            ephemeris: self.ephemeris.clone(),
            ephemeris_path: self.ephemeris_path.clone(),
            lat: self.lat,
            lon: self.lon,
            limit_days,
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .expect("records serialize");
    println!("{out}");
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Day { date, opts } => parse_iso_date(&date)
            .and_then(|d| calendar_day(d, &opts.request(370)))
            .map(|record| print_json(&record, opts.pretty)),
        Commands::Range {
            start,
            end,
            limit_days,
            opts,
        } => parse_iso_date(&start)
            .and_then(|s| Ok((s, parse_iso_date(&end)?)))
            .and_then(|(s, e)| calendar_range(s, e, &opts.request(limit_days)))
            .map(|record| print_json(&record, opts.pretty)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
