//! End-to-end pipeline tests: file in, deterministic file out.

use std::fs;
use std::path::{Path, PathBuf};

use calnorm_cli::pipeline::{
    CalendarConfig, MinutesConfig, resolve_output_path, run_calendar, run_minutes,
};
use calnorm_model::{NormalizeOptions, RowErrorPolicy};
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

const CALENDAR_INPUT: &str = "\
event;local_dt;source_tz;impact
NFP;01/05/2024 08:30;EST;high
ECB rate;2024-01-25 14:15;CET;high
CPI;2024-01-11 08:30;America/New_York;medium
";

#[test]
fn calendar_run_sorts_and_rewrites_columns() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "calendar.csv", CALENDAR_INPUT);
    let run = run_calendar(&CalendarConfig {
        input,
        output: None,
        options: NormalizeOptions::default(),
    })
    .unwrap();
    assert_eq!(run.rows_read, 3);
    assert_eq!(run.rows_written, 3);
    assert!(run.failures.is_empty());
    assert!(run.output.ends_with("calendar_UTC.csv"));

    let written = fs::read_to_string(&run.output).unwrap();
    assert_eq!(
        written,
        "event;datetime_utc;impact\n\
         NFP;2024-01-05T13:30:00+00:00;high\n\
         CPI;2024-01-11T13:30:00+00:00;medium\n\
         ECB rate;2024-01-25T13:15:00+00:00;high\n"
    );
}

#[test]
fn identical_runs_produce_byte_identical_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "calendar.csv", CALENDAR_INPUT);
    let first_out = dir.path().join("first.csv");
    let second_out = dir.path().join("second.csv");
    for output in [&first_out, &second_out] {
        run_calendar(&CalendarConfig {
            input: input.clone(),
            output: Some(output.clone()),
            options: NormalizeOptions::default(),
        })
        .unwrap();
    }
    assert_eq!(fs::read(&first_out).unwrap(), fs::read(&second_out).unwrap());
}

#[test]
fn bad_rows_are_reported_and_excluded_not_silently_dropped() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "calendar.csv",
        "event;local_dt;source_tz\n\
         good;2024-01-02 08:30;CET\n\
         bad;garbage;CET\n\
         also good;2024-01-03 08:30;CET\n",
    );
    let run = run_calendar(&CalendarConfig {
        input,
        output: None,
        options: NormalizeOptions::default(),
    })
    .unwrap();
    assert_eq!(run.rows_read, 3);
    assert_eq!(run.rows_written, 2);
    assert_eq!(run.failures.len(), 1);
    assert_eq!(run.failures[0].row, 2);
}

#[test]
fn abort_policy_leaves_no_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "calendar.csv",
        "event;local_dt;source_tz\nbad;garbage;CET\n",
    );
    let output = dir.path().join("out.csv");
    let result = run_calendar(&CalendarConfig {
        input,
        output: Some(output.clone()),
        options: NormalizeOptions::default().with_row_error(RowErrorPolicy::Abort),
    });
    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn minutes_run_converts_dat_ascii_to_utc() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "DAT_ASCII_EURUSD_M1_2024.csv",
        "20240102 170100;1.2;1.3;1.1;1.25;0\n\
         20240102 170000;1.1;1.2;1.0;1.15;0\n",
    );
    let run = run_minutes(&MinutesConfig {
        input,
        output: None,
    })
    .unwrap();
    assert_eq!(run.rows, 2);
    let written = fs::read_to_string(&run.output).unwrap();
    assert_eq!(
        written,
        "datetime;open;high;low;close;volume\n\
         2024-01-02T22:00;1.1;1.2;1.0;1.15;0\n\
         2024-01-02T22:01;1.2;1.3;1.1;1.25;0\n"
    );
}

#[test]
fn default_output_path_appends_utc_suffix() {
    let input = PathBuf::from("/data/calendar.csv");
    assert_eq!(
        resolve_output_path(&input, None),
        PathBuf::from("/data/calendar_UTC.csv")
    );
    assert_eq!(
        resolve_output_path(&input, Some(Path::new("/tmp/out.txt"))),
        PathBuf::from("/tmp/out.csv")
    );
}
