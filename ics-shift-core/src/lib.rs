//! Core of ics-shift.
//!
//! Rewrites the `DTSTART`, `DTEND` and `DTSTAMP` values of an iCalendar file
//! so that its earliest event starts on a given day, keeping the distance
//! between all events:
//! - `shift` works on document text
//! - `file` runs the whole read/shift/write cycle for one path
//! - `config` resolves the default target file

pub mod config;
pub mod date_value;
pub mod error;
pub mod file;
pub mod shift;

pub use config::ShiftConfig;
pub use date_value::{DateValue, DayOffset};
pub use error::{ShiftError, ShiftResult, ValueError};
pub use file::{ShiftOutcome, ShiftReport, WriteMode, shift_file};
pub use shift::{OccurrenceFailure, ShiftedDocument, earliest_start, shift_document};
