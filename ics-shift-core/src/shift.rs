//! Text-level date shifting over raw iCalendar content.
//!
//! The document is never parsed into components. Two patterns drive the
//! whole transformation:
//!
//! - the anchor pattern picks the 8-digit date after every `DTSTART`
//!   (bare or `;VALUE=DATE`); the smallest one is the earliest start.
//!   A time-of-day after those 8 digits is ignored on purpose.
//! - the occurrence pattern matches `DTSTART`, `DTEND` and `DTSTAMP` with
//!   any parameter segment, and every match is rewritten with the same
//!   offset.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::{Captures, Regex};

use crate::date_value::{DateValue, DayOffset, parse_anchor};
use crate::error::{ShiftError, ShiftResult, ValueError};

fn anchor_regex() -> &'static Regex {
    const RE: &str = r"DTSTART(?:;VALUE=DATE)?:([0-9]{8})";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(RE).unwrap())
}

fn occurrence_regex() -> &'static Regex {
    const RE: &str = r"(DTSTART|DTEND|DTSTAMP)([^:\n]*):([0-9]{8}T?[0-9]{0,6}Z?)";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(RE).unwrap())
}

/// Find the earliest `DTSTART` date in the document.
///
/// Returns `None` when the document has no `DTSTART` at all.
pub fn earliest_start(content: &str) -> Option<ShiftResult<NaiveDate>> {
    let earliest = anchor_regex()
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .min()?;

    tracing::debug!(earliest, "found earliest DTSTART");

    Some(parse_anchor(earliest).ok_or_else(|| ShiftError::InvalidAnchor(earliest.to_string())))
}

/// A matched date value that was left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceFailure {
    /// The property name, e.g. `DTEND`
    pub property: String,
    /// The value text as it appears in the document
    pub raw: String,
    pub reason: ValueError,
}

/// Result of running the substitution over a whole document.
#[derive(Debug, Clone)]
pub struct ShiftedDocument {
    pub content: String,
    pub offset: DayOffset,
    /// Number of occurrences that were rewritten
    pub shifted: usize,
    pub failures: Vec<OccurrenceFailure>,
}

impl ShiftedDocument {
    pub fn skipped(&self) -> usize {
        self.failures.len()
    }
}

/// Rewrite every `DTSTART`, `DTEND` and `DTSTAMP` value by `offset`.
///
/// Property names and parameter segments are kept verbatim, and each value
/// is written back in its original form. Values that fail to parse stay as
/// they are and are listed in [`ShiftedDocument::failures`].
pub fn shift_document(content: &str, offset: DayOffset) -> ShiftedDocument {
    let mut shifted = 0;
    let mut failures = Vec::new();

    let new_content = occurrence_regex().replace_all(content, |caps: &Captures| {
        let property = &caps[1];
        let params = &caps[2];
        let raw = &caps[3];

        match DateValue::shift_raw(raw, offset) {
            Ok(value) => {
                tracing::debug!(property, raw, %value, "shifted date");
                shifted += 1;
                format!("{property}{params}:{value}")
            }
            Err(reason) => {
                tracing::warn!(property, raw, %reason, "leaving date unchanged");
                failures.push(OccurrenceFailure {
                    property: property.to_string(),
                    raw: raw.to_string(),
                    reason,
                });
                caps[0].to_string()
            }
        }
    });

    ShiftedDocument {
        content: new_content.into_owned(),
        offset,
        shifted,
        failures,
    }
}
