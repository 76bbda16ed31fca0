//! Date values found after `DTSTART`, `DTEND` and `DTSTAMP`, and the
//! whole-day offset applied to them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::error::ValueError;

const DATE_FORMAT: &str = "%Y%m%d";
const DATETIME_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Years that fit the unsigned 4-digit `YYYY` field. chrono allows wider
/// years but formats them with a sign.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// A signed number of whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DayOffset(i64);

impl DayOffset {
    pub fn from_days(days: i64) -> Self {
        DayOffset(days)
    }

    /// Offset that moves `earliest` onto `today`. Negative when `earliest`
    /// lies in the future.
    pub fn between(earliest: NaiveDate, today: NaiveDate) -> Self {
        DayOffset((today - earliest).num_days())
    }

    pub fn days(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    fn as_duration(self) -> Duration {
        Duration::days(self.0)
    }
}

impl fmt::Display for DayOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.0.abs() == 1 { "day" } else { "days" };
        write!(f, "{} {}", self.0, unit)
    }
}

/// One of the three literal value forms that can be shifted.
///
/// The variant remembers the form so that [`fmt::Display`] writes the value
/// back exactly the way it was read: `YYYYMMDD`, `YYYYMMDDTHHMMSS` or
/// `YYYYMMDDTHHMMSSZ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue {
    Date(NaiveDate),
    Floating(NaiveDateTime),
    Utc(DateTime<Utc>),
}

impl DateValue {
    pub fn year(&self) -> i32 {
        match self {
            DateValue::Date(d) => d.year(),
            DateValue::Floating(dt) => dt.year(),
            DateValue::Utc(dt) => dt.year(),
        }
    }

    /// Move the value by `offset` whole days. Time of day is untouched.
    ///
    /// Returns `None` when the result leaves years 0001 to 9999.
    pub fn shift(self, offset: DayOffset) -> Option<DateValue> {
        let delta = offset.as_duration();
        let shifted = match self {
            DateValue::Date(d) => d.checked_add_signed(delta).map(DateValue::Date),
            DateValue::Floating(dt) => dt.checked_add_signed(delta).map(DateValue::Floating),
            DateValue::Utc(dt) => dt.checked_add_signed(delta).map(DateValue::Utc),
        }?;

        YEAR_RANGE.contains(&shifted.year()).then_some(shifted)
    }

    /// Parse and shift in one step, reporting why the raw text was rejected.
    pub fn shift_raw(raw: &str, offset: DayOffset) -> Result<String, ValueError> {
        let value: DateValue = raw.parse()?;
        value
            .shift(offset)
            .map(|shifted| shifted.to_string())
            .ok_or_else(|| ValueError::OutOfRange(raw.to_string()))
    }
}

impl FromStr for DateValue {
    type Err = ValueError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = |e: chrono::ParseError| ValueError::Invalid(raw.to_string(), e.to_string());

        if !raw.contains('T') {
            if raw.len() != 8 {
                return Err(ValueError::Malformed(raw.to_string()));
            }
            let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(invalid)?;
            return check_year(raw, DateValue::Date(date));
        }

        let (body, utc) = match raw.strip_suffix('Z') {
            Some(body) => (body, true),
            None => (raw, false),
        };

        // YYYYMMDD + T + HHMMSS, no shorter time component
        if body.len() != 15 {
            return Err(ValueError::Malformed(raw.to_string()));
        }

        let dt = NaiveDateTime::parse_from_str(body, DATETIME_FORMAT).map_err(invalid)?;
        let value = if utc {
            DateValue::Utc(dt.and_utc())
        } else {
            DateValue::Floating(dt)
        };
        check_year(raw, value)
    }
}

fn check_year(raw: &str, value: DateValue) -> Result<DateValue, ValueError> {
    if YEAR_RANGE.contains(&value.year()) {
        Ok(value)
    } else {
        Err(ValueError::Invalid(
            raw.to_string(),
            format!("year {} is out of range", value.year()),
        ))
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateValue::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            DateValue::Floating(dt) => write!(f, "{}", dt.format(DATETIME_FORMAT)),
            DateValue::Utc(dt) => write!(f, "{}Z", dt.format(DATETIME_FORMAT)),
        }
    }
}

/// Parse the 8-digit `YYYYMMDD` date used as the shift anchor.
pub(crate) fn parse_anchor(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|d| YEAR_RANGE.contains(&d.year()))
}
