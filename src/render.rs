//! Colored terminal rendering for ics-shift-core types.

use ics_shift_core::{DayOffset, OccurrenceFailure, ShiftedDocument};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for DayOffset {
    fn render(&self) -> String {
        if self.days() < 0 {
            self.to_string().yellow().to_string()
        } else {
            self.to_string().green().to_string()
        }
    }
}

impl Render for OccurrenceFailure {
    fn render(&self) -> String {
        let label = format!("Error parsing date {}:", self.raw);
        format!(
            "   {} {} {}",
            label.red(),
            self.reason,
            format!("({})", self.property).dimmed()
        )
    }
}

impl Render for ShiftedDocument {
    /// One-line summary, e.g. "6 dates shifted, 1 skipped"
    fn render(&self) -> String {
        let shifted = format!("{} {} shifted", self.shifted, pluralize("date", self.shifted));
        if self.skipped() == 0 {
            shifted
        } else {
            format!("{}, {}", shifted, format!("{} skipped", self.skipped()).red())
        }
    }
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
