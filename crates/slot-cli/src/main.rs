//! `bookslot` CLI — inspect appointment availability from the command line.
//!
//! Reads the same JSON shapes the booking platform stores (event type,
//! settings, bookings) and runs the deterministic availability engine over
//! them. `--now` pins the clock, which makes availability bugs reproducible
//! from a set of exported JSON files.
//!
//! ## Usage
//!
//! ```sh
//! # Day-level verdict for one date
//! bookslot day --event-type et.json --date 2026-03-16
//!
//! # Whole-month availability (JSON array, one entry per day)
//! bookslot month --event-type et.json --year 2026 --month 3
//!
//! # Time slots for a date against existing bookings
//! bookslot slots --event-type et.json --bookings bookings.json --date 2026-03-16
//!
//! # Authoritative selection check (non-zero exit when not bookable)
//! bookslot check --event-type et.json --date 2026-03-16 --time 09:30
//!
//! # Human-readable output instead of JSON
//! bookslot slots --event-type et.json --date 2026-03-16 --summary
//! ```

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use slot_engine::{Booking, DateLocale, EventType, Settings};

#[derive(Parser)]
#[command(
    name = "bookslot",
    version,
    about = "Deterministic appointment availability inspector"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Inputs shared by every subcommand.
#[derive(Args)]
struct CommonArgs {
    /// Event type JSON file
    #[arg(long = "event-type", value_name = "FILE")]
    event_type: String,

    /// Settings JSON file (documented defaults when omitted)
    #[arg(long, value_name = "FILE")]
    settings: Option<String>,

    /// Evaluation clock, local datetime (e.g. 2026-03-15T12:00:00);
    /// defaults to the current wall clock
    #[arg(long)]
    now: Option<String>,

    /// Print human-readable lines instead of JSON
    #[arg(long)]
    summary: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate whether a single date is bookable
    Day {
        #[command(flatten)]
        common: CommonArgs,
        /// Date to evaluate, YYYY-MM-DD
        #[arg(long)]
        date: String,
    },
    /// Evaluate every day of a calendar month
    Month {
        #[command(flatten)]
        common: CommonArgs,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
    },
    /// Enumerate the time slots of a date against existing bookings
    Slots {
        #[command(flatten)]
        common: CommonArgs,
        /// Date to enumerate, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Bookings JSON file (an array; empty when omitted)
        #[arg(long, value_name = "FILE")]
        bookings: Option<String>,
    },
    /// Check whether a specific (date, time) selection is bookable
    Check {
        #[command(flatten)]
        common: CommonArgs,
        /// Date of the requested slot, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Requested start time, HH:MM 24-hour
        #[arg(long)]
        time: String,
        /// Bookings JSON file (an array; empty when omitted)
        #[arg(long, value_name = "FILE")]
        bookings: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Day { common, date } => {
            let inputs = Inputs::load(&common)?;
            let date = parse_date(&date)?;
            let verdict =
                slot_engine::evaluate_day(date, &inputs.event_type, &inputs.settings, inputs.now);
            if common.summary {
                println!(
                    "{}: {}",
                    slot_engine::format_date_display(date, &DateLocale::default()),
                    describe(verdict.available, verdict.reason.as_deref())
                );
            } else {
                print_json(&verdict)?;
            }
        }
        Commands::Month {
            common,
            year,
            month,
        } => {
            let inputs = Inputs::load(&common)?;
            let days = slot_engine::evaluate_month(
                year,
                month,
                &inputs.event_type,
                &inputs.settings,
                inputs.now,
            )?;
            if common.summary {
                for day in &days {
                    println!(
                        "{}: {}",
                        slot_engine::format_date_display(day.date, &DateLocale::default()),
                        describe(day.available, day.reason.as_deref())
                    );
                }
            } else {
                print_json(&days)?;
            }
        }
        Commands::Slots {
            common,
            date,
            bookings,
        } => {
            let inputs = Inputs::load(&common)?;
            let bookings = load_bookings(bookings.as_deref())?;
            let date = parse_date(&date)?;
            let slots = slot_engine::generate_slots(
                date,
                &inputs.event_type,
                &bookings,
                &inputs.settings,
                inputs.now,
            )?;
            if common.summary {
                for slot in &slots {
                    println!(
                        "{}: {}",
                        slot_engine::format_time_display(&slot.time)?,
                        describe(slot.available, slot.reason.as_deref())
                    );
                }
            } else {
                print_json(&slots)?;
            }
        }
        Commands::Check {
            common,
            date,
            time,
            bookings,
        } => {
            let inputs = Inputs::load(&common)?;
            let bookings = load_bookings(bookings.as_deref())?;
            let date = parse_date(&date)?;
            slot_engine::check_slot_selection(
                date,
                &time,
                &inputs.event_type,
                &bookings,
                &inputs.settings,
                inputs.now,
            )?;
            println!("Slot is bookable: {} at {}", date, time);
        }
    }

    Ok(())
}

/// The resolved common inputs of a run.
struct Inputs {
    event_type: EventType,
    settings: Settings,
    now: NaiveDateTime,
}

impl Inputs {
    fn load(common: &CommonArgs) -> Result<Self> {
        let event_type: EventType = read_json(&common.event_type)?;
        let settings = match &common.settings {
            Some(path) => read_json(path)?,
            None => Settings::default(),
        };
        let now = match &common.now {
            Some(raw) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .with_context(|| format!("Invalid --now value: {}", raw))?,
            None => Local::now().naive_local(),
        };
        Ok(Inputs {
            event_type,
            settings,
            now,
        })
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse JSON: {}", path))
}

fn load_bookings(path: Option<&str>) -> Result<Vec<Booking>> {
    match path {
        Some(path) => read_json(path),
        None => Ok(Vec::new()),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    slot_engine::parse_date(raw).with_context(|| format!("Invalid date: {}", raw))
}

fn describe(available: bool, reason: Option<&str>) -> String {
    if available {
        "available".to_string()
    } else {
        format!("unavailable ({})", reason.unwrap_or("no reason"))
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
