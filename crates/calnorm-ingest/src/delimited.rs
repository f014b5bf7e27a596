//! `;`-delimited CSV reading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use calnorm_model::{LOCAL_DT_COLUMN, MINUTE_COLUMNS, RawTable, SOURCE_TZ_COLUMN};
use csv::ReaderBuilder;
use tracing::debug;

use crate::error::IngestError;

/// Header aliases accepted for the minute-data datetime column.
const DATETIME_ALIASES: &[&str] = &["timestamp", "dt", "time"];

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a `;`-delimited file with a header row into a [`RawTable`].
///
/// Headers are trimmed and stripped of a leading BOM; cell values are kept
/// verbatim. Short rows are padded with empty strings to the header width.
pub fn read_delimited(path: &Path) -> Result<RawTable, IngestError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| map_csv_error(path, source))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| map_csv_error(path, source))?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::Empty {
            path: path.to_path_buf(),
        });
    }
    let rows = read_rows(path, &mut reader, headers.len())?;
    debug!(path = %path.display(), columns = headers.len(), rows = rows.len(), "file ingested");
    Ok(RawTable { headers, rows })
}

/// Read a calendar file; `local_dt` and `source_tz` must be present.
pub fn read_calendar(path: &Path) -> Result<RawTable, IngestError> {
    let table = read_delimited(path)?;
    let missing: Vec<String> = [LOCAL_DT_COLUMN, SOURCE_TZ_COLUMN]
        .iter()
        .filter(|column| !table.headers.iter().any(|header| header == *column))
        .map(|column| (*column).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing,
        });
    }
    Ok(table)
}

/// Read a minute-data file.
///
/// Headerless DAT_ASCII input (first line `YYYYMMDD HHMMSS;...` or
/// `YYYYMMDDHHMMSS;...`) gets the fixed minute column set; otherwise the
/// header row is used, with `timestamp`/`dt`/`time` accepted as aliases for
/// `datetime`.
pub fn read_minutes(path: &Path) -> Result<RawTable, IngestError> {
    let first_line = read_first_line(path)?;
    if is_dat_ascii_line(&first_line) {
        let headers: Vec<String> = MINUTE_COLUMNS.iter().map(|c| (*c).to_string()).collect();
        let mut reader = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|source| map_csv_error(path, source))?;
        let rows = read_rows(path, &mut reader, headers.len())?;
        debug!(path = %path.display(), rows = rows.len(), "headerless DAT_ASCII ingested");
        return Ok(RawTable { headers, rows });
    }
    let mut table = read_delimited(path)?;
    if !table.headers.iter().any(|header| header == MINUTE_COLUMNS[0]) {
        for alias in DATETIME_ALIASES {
            if let Some(header) = table
                .headers
                .iter_mut()
                .find(|header| header.eq_ignore_ascii_case(alias))
            {
                *header = MINUTE_COLUMNS[0].to_string();
                break;
            }
        }
    }
    Ok(table)
}

fn read_rows(
    path: &Path,
    reader: &mut csv::Reader<File>,
    width: usize,
) -> Result<Vec<Vec<String>>, IngestError> {
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| map_csv_error(path, source))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(width);
        for index in 0..width {
            row.push(record.get(index).unwrap_or_default().to_string());
        }
        rows.push(row);
    }
    Ok(rows)
}

fn read_first_line(path: &Path) -> Result<String, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(line)
}

/// Matches `YYYYMMDD HHMMSS` or `YYYYMMDDHHMMSS` followed by a delimiter.
fn is_dat_ascii_line(line: &str) -> bool {
    let trimmed = line.trim().trim_start_matches('\u{feff}');
    let bytes = trimmed.as_bytes();
    if bytes.len() < 15 {
        return false;
    }
    if !bytes[..8].iter().all(u8::is_ascii_digit) {
        return false;
    }
    let rest = if bytes[8] == b' ' { &bytes[9..] } else { &bytes[8..] };
    if rest.len() < 7 || !rest[..6].iter().all(u8::is_ascii_digit) {
        return false;
    }
    matches!(rest[6], b';' | b',' | b'\t')
}

fn map_csv_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
