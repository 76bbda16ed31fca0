mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use ics_shift_core::{ShiftConfig, WriteMode};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ics-shift")]
#[command(about = "Shift the dates in an .ics file so the earliest event starts today")]
struct Cli {
    /// Calendar file to rewrite (defaults to `default_file` from the config)
    file: Option<PathBuf>,

    /// Treat this day as today (YYYY-MM-DD)
    #[arg(long, value_parser = parse_day)]
    today: Option<NaiveDate>,

    /// Print the shifted calendar instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ShiftConfig::load(cli.config.as_deref())?;
    let path = config.target_path(cli.file);
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let mode = if cli.dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::InPlace
    };

    commands::shift::run(&path, today, mode)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse YYYY-MM-DD
fn parse_day(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}
