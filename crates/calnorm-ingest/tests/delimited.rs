//! Ingestion tests against real temp files.

use std::fs;
use std::path::PathBuf;

use calnorm_ingest::{IngestError, read_calendar, read_delimited, read_minutes};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn reads_semicolon_delimited_table() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "calendar.csv",
        "event;local_dt;source_tz;impact\nCPI;2024-01-02 08:30;America/New_York;high\n",
    );
    let table = read_delimited(&path).unwrap();
    assert_eq!(table.headers, vec!["event", "local_dt", "source_tz", "impact"]);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0][0], "CPI");
}

#[test]
fn strips_leading_bom_from_header() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "bom.csv",
        "\u{feff}event;local_dt;source_tz\nCPI;2024-01-02 08:30;CET\n",
    );
    let table = read_calendar(&path).unwrap();
    assert_eq!(table.headers[0], "event");
}

#[test]
fn cell_values_are_not_trimmed() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "spaces.csv",
        "event;local_dt;source_tz\n CPI ;2024-01-02 08:30;CET\n",
    );
    let table = read_calendar(&path).unwrap();
    assert_eq!(table.rows[0][0], " CPI ");
}

#[test]
fn short_rows_are_padded_to_header_width() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "short.csv",
        "event;local_dt;source_tz;impact\nCPI;2024-01-02 08:30;CET\n",
    );
    let table = read_calendar(&path).unwrap();
    assert_eq!(table.rows[0].len(), 4);
    assert_eq!(table.rows[0][3], "");
}

#[test]
fn calendar_requires_time_columns() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "bad.csv", "event;when\nCPI;2024-01-02\n");
    let error = read_calendar(&path).unwrap_err();
    match error {
        IngestError::MissingColumns { columns, .. } => {
            assert_eq!(columns, vec!["local_dt", "source_tz"]);
        }
        other => panic!("expected missing columns, got {other}"),
    }
}

#[test]
fn missing_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");
    assert!(read_calendar(&path).is_err());
}

#[test]
fn headerless_dat_ascii_is_detected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "DAT_ASCII_EURUSD_M1_2024.csv",
        "20240102 170000;1.104560;1.104620;1.104510;1.104600;0\n\
         20240102 170100;1.104600;1.104700;1.104550;1.104650;0\n",
    );
    let table = read_minutes(&path).unwrap();
    assert_eq!(
        table.headers,
        vec!["datetime", "open", "high", "low", "close", "volume"]
    );
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0][0], "20240102 170000");
}

#[test]
fn compact_dat_ascii_without_space_is_detected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "compact.csv", "20240102170000;1;1;1;1;0\n");
    let table = read_minutes(&path).unwrap();
    assert_eq!(table.headers[0], "datetime");
    assert_eq!(table.rows.len(), 1);
}

#[test]
fn minute_header_aliases_are_renamed() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "alias.csv",
        "timestamp;open;high;low;close;volume\n20240102 170000;1;1;1;1;0\n",
    );
    let table = read_minutes(&path).unwrap();
    assert_eq!(table.headers[0], "datetime");
}

#[test]
fn blank_lines_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "blank.csv",
        "event;local_dt;source_tz\nCPI;2024-01-02 08:30;CET\n;;\n",
    );
    let table = read_calendar(&path).unwrap();
    assert_eq!(table.rows.len(), 1);
}
