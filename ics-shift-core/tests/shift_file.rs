use std::fs;

use chrono::NaiveDate;
use ics_shift_core::{ShiftError, ShiftOutcome, ShiftReport, WriteMode, shift_file};
use tempfile::TempDir;

const DEMO_ICS: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Demo//EN\r\n\
BEGIN:VEVENT\r\n\
UID:all-day@example.com\r\n\
DTSTAMP:20240101T090000Z\r\n\
DTSTART;VALUE=DATE:20240101\r\n\
DTEND;VALUE=DATE:20240102\r\n\
SUMMARY:New year\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:standup@example.com\r\n\
DTSTAMP:20240101T090000Z\r\n\
DTSTART:20240103T093000\r\n\
DTEND:20240103T100000\r\n\
RRULE:FREQ=WEEKLY;COUNT=4\r\n\
SUMMARY:Standup\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn write_calendar(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("demo_import.ics");
    fs::write(&path, content).unwrap();
    path
}

fn expect_shifted(outcome: ShiftOutcome) -> ShiftReport {
    match outcome {
        ShiftOutcome::Shifted(report) => report,
        other => panic!("Expected Shifted, got {:?}", other),
    }
}

#[test]
fn test_shift_file_rewrites_in_place() {
    let dir = TempDir::new().unwrap();
    let path = write_calendar(&dir, DEMO_ICS);

    let outcome = shift_file(&path, today(), WriteMode::InPlace).unwrap();

    let report = expect_shifted(outcome);
    assert_eq!(report.document.offset.days(), 531);
    assert_eq!(report.document.shifted, 6);
    assert!(report.document.failures.is_empty());
    assert!(report.written);

    let expected = DEMO_ICS
        .replace("20240101T090000Z", "20250615T090000Z")
        .replace("DATE:20240101", "DATE:20250615")
        .replace("DATE:20240102", "DATE:20250616")
        .replace("20240103T093000", "20250617T093000")
        .replace("20240103T100000", "20250617T100000");
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_second_run_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let path = write_calendar(&dir, DEMO_ICS);

    shift_file(&path, today(), WriteMode::InPlace).unwrap();
    let after_first = fs::read_to_string(&path).unwrap();

    let outcome = shift_file(&path, today(), WriteMode::InPlace).unwrap();
    assert!(matches!(outcome, ShiftOutcome::AlreadyCurrent { anchor } if anchor == today()));
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
}

#[test]
fn test_dry_run_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = write_calendar(&dir, DEMO_ICS);

    let outcome = shift_file(&path, today(), WriteMode::DryRun).unwrap();

    let report = expect_shifted(outcome);
    assert!(!report.written);
    assert!(report.document.content.contains("DTSTART;VALUE=DATE:20250615"));
    assert_eq!(fs::read_to_string(&path).unwrap(), DEMO_ICS);
}

#[test]
fn test_missing_file_is_not_created() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.ics");

    let outcome = shift_file(&path, today(), WriteMode::InPlace).unwrap();

    assert!(matches!(outcome, ShiftOutcome::MissingFile(ref p) if *p == path));
    assert!(!path.exists());
}

#[test]
fn test_file_without_dtstart_is_not_written() {
    let dir = TempDir::new().unwrap();
    let content = "BEGIN:VCALENDAR\nBEGIN:VEVENT\nDTSTAMP:20240101T090000Z\nEND:VEVENT\nEND:VCALENDAR\n";
    let path = write_calendar(&dir, content);

    let outcome = shift_file(&path, today(), WriteMode::InPlace).unwrap();

    assert!(matches!(outcome, ShiftOutcome::NoDates));
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn test_future_anchor_shifts_backwards() {
    let dir = TempDir::new().unwrap();
    let path = write_calendar(&dir, "DTSTART:20250620T080000Z\nDTEND:20250620T090000Z\n");

    shift_file(&path, today(), WriteMode::InPlace).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "DTSTART:20250615T080000Z\nDTEND:20250615T090000Z\n"
    );
}

#[test]
fn test_bad_occurrence_is_kept_and_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_calendar(
        &dir,
        "DTSTART;VALUE=DATE:20240101\nDTEND:20240101T12\nDTSTAMP:20240101T000000Z\n",
    );

    let outcome = shift_file(&path, today(), WriteMode::InPlace).unwrap();

    let report = expect_shifted(outcome);
    assert_eq!(report.document.shifted, 2);
    assert_eq!(report.document.skipped(), 1);
    assert_eq!(report.document.failures[0].raw, "20240101T12");
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "DTSTART;VALUE=DATE:20250615\nDTEND:20240101T12\nDTSTAMP:20250615T000000Z\n"
    );
}

#[test]
fn test_invalid_anchor_is_an_error() {
    let dir = TempDir::new().unwrap();
    let content = "DTSTART:20240231\n";
    let path = write_calendar(&dir, content);

    let err = shift_file(&path, today(), WriteMode::InPlace).unwrap_err();

    assert!(matches!(err, ShiftError::InvalidAnchor(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}
