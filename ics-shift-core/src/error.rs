//! Error types for ics-shift.

use thiserror::Error;

/// Errors that abort a shift run.
#[derive(Error, Debug)]
pub enum ShiftError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Fails the run with a non-zero exit, like any unparseable anchor date would.
    #[error("Earliest DTSTART '{0}' is not a valid calendar date")]
    InvalidAnchor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for shift operations.
pub type ShiftResult<T> = Result<T, ShiftError>;

/// Why a single date value could not be shifted.
///
/// These never abort a run; the offending text is left as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("'{0}' does not match YYYYMMDD, YYYYMMDDTHHMMSS or YYYYMMDDTHHMMSSZ")]
    Malformed(String),

    #[error("'{0}' is not a valid date: {1}")]
    Invalid(String, String),

    #[error("shifting '{0}' leaves the supported date range")]
    OutOfRange(String),
}
