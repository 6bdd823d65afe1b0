//! `roomscan` CLI — reconstruct room timelines from a scrape and match free slots.
//!
//! ## Usage
//!
//! ```sh
//! # Build a run report from scraped room names and event labels (stdin → stdout)
//! cat scrape.json | roomscan build
//!
//! # From file to file, with an explicit clock and scrape filters
//! roomscan build -i scrape.json -o rooms.json --now 2026-03-16T09:30:00 \
//!     --building "Li Ka Shing Library" --facility-type "Group Study Room"
//!
//! # Find the first room free for a window
//! roomscan match -i rooms.json --start 14:00 --end 16:00
//! ```
//!
//! Filter flags fall back to the `SCRAPE_*` environment variables, which may
//! also be set in a `.env` file. Logging is controlled with `RUST_LOG`.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use room_timeline::{
    build_room_records, find_match, RoomRecord, RunReport, ScrapeConfig, ScrapeFilters,
};
use serde::Deserialize;
use std::io::{self, Read};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "roomscan",
    version,
    about = "Reconstruct room booking timelines and find free slots"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct per-room timelines and write a run report
    Build {
        /// Scrape JSON `{"rooms": [...], "tokens": [...]}` (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Wall-clock time for availability, e.g. 2026-03-16T09:30:00 (defaults to now)
        #[arg(long)]
        now: Option<NaiveDateTime>,
        #[command(flatten)]
        scrape: ScrapeArgs,
    },
    /// Find the first room with a free slot containing the desired window
    Match {
        /// Run report or room array JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Desired start, HH:MM
        #[arg(long, env = "BOOKING_START_TIME")]
        start: String,
        /// Desired end, HH:MM
        #[arg(long, env = "BOOKING_END_TIME")]
        end: String,
    },
}

/// Scrape configuration echoed into the report and used as metadata fallback.
#[derive(Args)]
struct ScrapeArgs {
    /// Building filter(s)
    #[arg(long = "building", env = "SCRAPE_BUILDING_NAMES", value_delimiter = ',')]
    buildings: Vec<String>,
    /// Floor filter(s)
    #[arg(long = "floor", env = "SCRAPE_FLOOR_NAMES", value_delimiter = ',')]
    floors: Vec<String>,
    /// Facility type filter(s)
    #[arg(long = "facility-type", env = "SCRAPE_FACILITY_TYPES", value_delimiter = ',')]
    facility_types: Vec<String>,
    /// Equipment filter(s)
    #[arg(long, env = "SCRAPE_EQUIPMENT", value_delimiter = ',')]
    equipment: Vec<String>,
    /// Minimum room capacity
    #[arg(long, env = "SCRAPE_ROOM_CAPACITY", default_value = "")]
    capacity: String,
    /// Scrape date as shown by the booking system
    #[arg(long, env = "SCRAPE_DATE", default_value = "")]
    date: String,
    /// Scrape window start, HH:MM
    #[arg(long, env = "SCRAPE_START_TIME", default_value = "")]
    start_time: String,
    /// Scrape window end, HH:MM
    #[arg(long, env = "SCRAPE_END_TIME", default_value = "")]
    end_time: String,
}

impl ScrapeArgs {
    fn into_config(self) -> ScrapeConfig {
        let trim_all = |v: Vec<String>| -> Vec<String> {
            v.into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        };
        ScrapeConfig {
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            filters: ScrapeFilters {
                buildings: trim_all(self.buildings),
                floors: trim_all(self.floors),
                facility_types: trim_all(self.facility_types),
                equipment: trim_all(self.equipment),
                capacity: self.capacity,
            },
        }
    }
}

/// Raw scrape handed over by the collector: room names in table order and the
/// flat list of event labels.
#[derive(Deserialize)]
struct ScrapeInput {
    rooms: Vec<String>,
    #[serde(default)]
    tokens: Vec<String>,
}

/// `match` accepts either a full run report or a bare room array.
#[derive(Deserialize)]
#[serde(untagged)]
enum RoomsInput {
    Report(Box<RunReport>),
    Rooms(Vec<RoomRecord>),
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            output,
            now,
            scrape,
        } => {
            let now = now.unwrap_or_else(|| chrono::Local::now().naive_local());
            let config = scrape.into_config();
            let raw = read_input(input.as_deref())?;
            let scrape: ScrapeInput =
                serde_json::from_str(&raw).context("Failed to parse scrape JSON")?;

            tracing::info!(
                rooms = scrape.rooms.len(),
                tokens = scrape.tokens.len(),
                "reconstructing timelines"
            );

            match build_room_records(&scrape.rooms, &scrape.tokens, &config.filters, now) {
                Ok(rooms) => {
                    let report = RunReport::success(config, rooms, now);
                    write_report(output.as_deref(), &report)?;
                }
                Err(err) => {
                    tracing::error!(error = %err, "reconstruction failed");
                    let report = RunReport::failure(config, &err, now);
                    write_report(output.as_deref(), &report)?;
                    return Err(err).context("Failed to reconstruct room timelines");
                }
            }
        }
        Commands::Match { input, start, end } => {
            let raw = read_input(input.as_deref())?;
            let parsed: RoomsInput =
                serde_json::from_str(&raw).context("Failed to parse rooms JSON")?;
            let rooms = match parsed {
                RoomsInput::Report(report) => report.rooms,
                RoomsInput::Rooms(rooms) => rooms,
            };

            match find_match(&rooms, &start, &end).context("Invalid desired time")? {
                Some(found) => {
                    println!("{}", serde_json::to_string_pretty(&found)?);
                }
                None => {
                    println!("No room found with availability for {}-{}", start, end);
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_report(path: Option<&str>, report: &RunReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    match path {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", json);
        }
    }
    Ok(())
}
