use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use ics_shift_core::{ShiftOutcome, ShiftReport, WriteMode, shift_file};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(path: &Path, today: NaiveDate, mode: WriteMode) -> Result<()> {
    match shift_file(path, today, mode)? {
        ShiftOutcome::MissingFile(path) => {
            println!("{} File {} not found.", "Error:".red(), path.display());
        }
        ShiftOutcome::NoDates => {
            println!("{}", "No dates found in the file.".dimmed());
        }
        ShiftOutcome::AlreadyCurrent { .. } => {
            println!("{}", "Dates are already up to date. No shift needed.".dimmed());
        }
        ShiftOutcome::Shifted(report) => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &ShiftReport) {
    let document = &report.document;

    println!(
        "Shifting dates by {} (earliest start {})...",
        document.offset.render(),
        report.anchor.format("%Y-%m-%d")
    );

    for failure in &document.failures {
        println!("{}", failure.render());
    }

    if report.written {
        println!(
            "{} {}",
            "Successfully updated".green(),
            report.path.display()
        );
    } else {
        print!("{}", document.content);
        println!("{}", "Dry run, nothing written".dimmed());
    }

    println!("{}", document.render().dimmed());
}
