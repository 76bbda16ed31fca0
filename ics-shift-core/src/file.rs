//! Shift the dates of a calendar file on disk.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::date_value::DayOffset;
use crate::error::ShiftResult;
use crate::shift::{ShiftedDocument, earliest_start, shift_document};

/// Whether a successful shift is written back to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Overwrite the source file
    InPlace,
    /// Compute everything, write nothing
    DryRun,
}

#[derive(Debug, Clone)]
pub struct ShiftReport {
    pub path: PathBuf,
    /// Earliest DTSTART date before the shift
    pub anchor: NaiveDate,
    pub document: ShiftedDocument,
    pub written: bool,
}

/// How a run over one file ended.
#[derive(Debug, Clone)]
pub enum ShiftOutcome {
    /// Nothing exists at the path; nothing was read or created
    MissingFile(PathBuf),
    /// The file contains no DTSTART
    NoDates,
    /// The earliest DTSTART already falls on `today`
    AlreadyCurrent { anchor: NaiveDate },
    Shifted(ShiftReport),
}

/// Move every date in the file at `path` so its earliest DTSTART lands on
/// `today`.
///
/// Missing files, files without dates and files that are already current
/// are reported through [`ShiftOutcome`], not as errors. Read and write
/// failures propagate.
pub fn shift_file(path: &Path, today: NaiveDate, mode: WriteMode) -> ShiftResult<ShiftOutcome> {
    if !path.exists() {
        return Ok(ShiftOutcome::MissingFile(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let anchor = match earliest_start(&content) {
        Some(anchor) => anchor?,
        None => return Ok(ShiftOutcome::NoDates),
    };

    let offset = DayOffset::between(anchor, today);
    tracing::debug!(%anchor, %today, days = offset.days(), "computed offset");

    if offset.is_zero() {
        return Ok(ShiftOutcome::AlreadyCurrent { anchor });
    }

    let document = shift_document(&content, offset);

    let written = match mode {
        WriteMode::InPlace => {
            std::fs::write(path, &document.content)?;
            tracing::debug!(path = %path.display(), "wrote shifted calendar");
            true
        }
        WriteMode::DryRun => false,
    };

    Ok(ShiftOutcome::Shifted(ShiftReport {
        path: path.to_path_buf(),
        anchor,
        document,
        written,
    }))
}
