//! Per-row orchestration and batch failure isolation.

use calnorm_model::{
    DATETIME_UTC_COLUMN, EVENT_COLUMN, LOCAL_DT_COLUMN, NormalizeError, NormalizeOptions,
    NormalizedRecord, RawRecord, RawTable, RowErrorPolicy, SOURCE_TZ_COLUMN,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::convert::convert;
use crate::detect::detect;
use crate::zones::resolve;

/// A row-level failure attributed to its 1-based input row index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {row}: {error}")]
pub struct RowFailure {
    pub row: usize,
    pub error: NormalizeError,
}

/// Result of a batch run: surviving records plus the rows that were
/// excluded, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub records: Vec<NormalizedRecord>,
    pub failures: Vec<RowFailure>,
}

/// Normalize one input row.
///
/// Composes detection, zone resolution, and conversion, failing with the
/// first sub-error. The source record is never modified; the output record
/// carries every passthrough column in input order, with `local_dt` and
/// `source_tz` dropped and `datetime_utc` inserted immediately after
/// `event` (or appended when there is no `event` column).
pub fn normalize_record(
    record: RawRecord<'_>,
    options: &NormalizeOptions,
) -> Result<NormalizedRecord, NormalizeError> {
    let local_dt = record
        .get(LOCAL_DT_COLUMN)
        .ok_or_else(|| NormalizeError::MissingColumn(LOCAL_DT_COLUMN.to_string()))?;
    let source_tz = record
        .get(SOURCE_TZ_COLUMN)
        .ok_or_else(|| NormalizeError::MissingColumn(SOURCE_TZ_COLUMN.to_string()))?;

    let civil = detect(local_dt)?;
    let zone = resolve(source_tz, &options.allow_list)?;
    let instant = convert(&zone, civil, options.ambiguous, options.nonexistent);
    let formatted = instant.format_utc();
    debug!(
        zone = %zone.name(),
        provenance = ?instant.provenance,
        utc = %formatted,
        "row converted"
    );

    let mut fields: Vec<(String, String)> = Vec::with_capacity(record.len());
    let mut inserted = false;
    for (name, value) in record.iter() {
        if name == LOCAL_DT_COLUMN || name == SOURCE_TZ_COLUMN || name == DATETIME_UTC_COLUMN {
            continue;
        }
        fields.push((name.to_string(), value.to_string()));
        if !inserted && name == EVENT_COLUMN {
            fields.push((DATETIME_UTC_COLUMN.to_string(), formatted.clone()));
            inserted = true;
        }
    }
    if !inserted {
        fields.push((DATETIME_UTC_COLUMN.to_string(), formatted));
    }
    Ok(NormalizedRecord::new(fields))
}

/// Normalize a whole table, isolating row failures.
///
/// Under [`RowErrorPolicy::SkipAndReport`] a failing row is excluded from
/// the output, logged, and collected into the outcome — never dropped
/// silently. Under [`RowErrorPolicy::Abort`] the first failure fails the
/// batch with its row attribution.
pub fn normalize_table(
    table: &RawTable,
    options: &NormalizeOptions,
) -> Result<BatchOutcome, RowFailure> {
    let mut outcome = BatchOutcome::default();
    for (index, record) in table.records().enumerate() {
        let row = index + 1;
        match normalize_record(record, options) {
            Ok(normalized) => outcome.records.push(normalized),
            Err(error) => {
                let failure = RowFailure { row, error };
                match options.on_row_error {
                    RowErrorPolicy::Abort => return Err(failure),
                    RowErrorPolicy::SkipAndReport => {
                        warn!(row = failure.row, reason = %failure.error, "row excluded from output");
                        outcome.failures.push(failure);
                    }
                }
            }
        }
    }
    Ok(outcome)
}
