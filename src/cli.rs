use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Taqwim month calendars and prayer countdowns.
#[derive(Parser)]
#[command(
    name = "taqwim",
    version,
    about = "Bengali, Gregorian and Hijri month calendars with prayer countdowns"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the month grid containing today.
    Calendar(CalendarArgs),
    /// Print the next prayer and the sehri/iftar countdowns.
    Next(NextArgs),
    /// Print the next-prayer countdown once per tick.
    Watch(WatchArgs),
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Calendar system: gregorian, bengali or hijri.
    #[arg(short, long)]
    pub system: Option<String>,

    /// Date to treat as today (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Display locale: bn, en or ar. Defaults to the system's own.
    #[arg(short, long)]
    pub locale: Option<String>,
}

/// Arguments for the `next` subcommand.
#[derive(clap::Args)]
pub struct NextArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Saved timings response (JSON) to read the schedule from.
    #[arg(short, long)]
    pub response: Option<PathBuf>,

    /// Time of day to count from (HH:MM or HH:MM:SS) instead of now.
    #[arg(long)]
    pub at: Option<String>,

    /// Display locale for prayer names: bn, en or ar.
    #[arg(short, long, default_value = "en")]
    pub locale: String,
}

/// Arguments for the `watch` subcommand.
#[derive(clap::Args)]
pub struct WatchArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Saved timings response (JSON) to read the schedule from.
    #[arg(short, long)]
    pub response: Option<PathBuf>,

    /// Stop after this many ticks.
    #[arg(short, long)]
    pub ticks: Option<u64>,

    /// Display locale for prayer names: bn, en or ar.
    #[arg(short, long, default_value = "en")]
    pub locale: String,
}
