//! Minute-series normalization: fixed EST (UTC-5, no DST) to UTC.
//!
//! The degenerate case of the converter — a zone with zero transition rules
//! — so every wall-clock value maps to exactly one instant and no policy
//! branch is ever taken. OHLCV values are passthrough text and are never
//! reformatted.

use calnorm_model::{
    AmbiguousPolicy, MINUTE_COLUMNS, NonexistentPolicy, NormalizeError, NormalizedRecord,
    OutputTable, RawTable,
};
use chrono::FixedOffset;
use tracing::debug;

use crate::convert::convert;
use crate::detect::detect_compact;
use crate::normalize::RowFailure;
use crate::zones::CanonicalZone;

/// Output datetime format: minute precision, `T` separator, no offset.
const MINUTE_OUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

const EST_SECONDS_WEST: i32 = 5 * 3600;

fn fixed_est() -> CanonicalZone {
    // In-range constant; west_opt only fails beyond +/-24h.
    CanonicalZone::Fixed(FixedOffset::west_opt(EST_SECONDS_WEST).expect("EST offset in range"))
}

/// Normalize a minute-data table.
///
/// Requires the full `datetime;open;high;low;close;volume` column set and
/// aborts on the first unparseable datetime (minute feeds are machine
/// generated, so a bad value means a broken file, not a bad row). Sorting
/// is left to the output sequencer.
pub fn normalize_minutes(table: &RawTable) -> Result<OutputTable, RowFailure> {
    for column in MINUTE_COLUMNS {
        if !table.headers.iter().any(|header| header == column) {
            return Err(RowFailure {
                row: 0,
                error: NormalizeError::MissingColumn(column.to_string()),
            });
        }
    }
    let zone = fixed_est();
    let mut records = Vec::with_capacity(table.len());
    for (index, record) in table.records().enumerate() {
        let row = index + 1;
        let text = record.get(MINUTE_COLUMNS[0]).unwrap_or_default();
        let civil = detect_compact(text).map_err(|error| RowFailure { row, error })?;
        let instant = convert(
            &zone,
            civil,
            AmbiguousPolicy::default(),
            NonexistentPolicy::default(),
        );
        let formatted = instant.utc.format(MINUTE_OUT_FORMAT).to_string();
        let mut fields = Vec::with_capacity(MINUTE_COLUMNS.len());
        fields.push((MINUTE_COLUMNS[0].to_string(), formatted));
        for column in &MINUTE_COLUMNS[1..] {
            let value = record.get(column).unwrap_or_default();
            fields.push(((*column).to_string(), value.to_string()));
        }
        records.push(NormalizedRecord::new(fields));
    }
    debug!(rows = records.len(), "minute table converted");
    Ok(OutputTable {
        headers: MINUTE_COLUMNS.iter().map(|column| (*column).to_string()).collect(),
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minute_table(rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: MINUTE_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|v| (*v).to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn fixed_est_to_utc_is_five_hours_regardless_of_season() {
        // EST has no DST: the shift is -5h in January and in July alike.
        let table = minute_table(&[
            &["20240115 120000", "1.0", "1.1", "0.9", "1.05", "0"],
            &["20240715 120000", "1.0", "1.1", "0.9", "1.05", "0"],
        ]);
        let output = normalize_minutes(&table).unwrap();
        assert_eq!(output.records[0].get("datetime"), Some("2024-01-15T17:00"));
        assert_eq!(output.records[1].get("datetime"), Some("2024-07-15T17:00"));
    }

    #[test]
    fn ohlcv_values_pass_through_untouched() {
        let table = minute_table(&[&[
            "20240102 173000",
            "1.104560",
            "1.104620",
            "1.104510",
            "1.104600",
            "0",
        ]]);
        let output = normalize_minutes(&table).unwrap();
        let record = &output.records[0];
        assert_eq!(record.get("open"), Some("1.104560"));
        assert_eq!(record.get("volume"), Some("0"));
    }

    #[test]
    fn missing_columns_fail_up_front() {
        let table = RawTable {
            headers: vec!["datetime".to_string(), "open".to_string()],
            rows: Vec::new(),
        };
        let failure = normalize_minutes(&table).unwrap_err();
        assert!(matches!(failure.error, NormalizeError::MissingColumn(_)));
    }

    #[test]
    fn bad_datetime_aborts_with_row_attribution() {
        let table = minute_table(&[
            &["20240102 173000", "1", "1", "1", "1", "0"],
            &["garbage", "1", "1", "1", "1", "0"],
        ]);
        let failure = normalize_minutes(&table).unwrap_err();
        assert_eq!(failure.row, 2);
    }
}
