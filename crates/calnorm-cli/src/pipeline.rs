//! End-to-end runs: ingest, normalize, sequence, write.
//!
//! Both runs follow the same shape: the whole input is read first, the
//! in-memory table is fully assembled, and only then is the output written
//! in a single whole-file write. A failure anywhere leaves no partial
//! output behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use calnorm_ingest::{read_calendar, read_minutes};
use calnorm_model::{DATETIME_UTC_COLUMN, MINUTE_COLUMNS, NormalizeOptions, OutputTable, output_headers};
use calnorm_output::{sequence, write_table};
use calnorm_transform::{RowFailure, normalize_minutes, normalize_table, tzdb_version};

/// Configuration for one calendar run.
#[derive(Debug, Clone, Default)]
pub struct CalendarConfig {
    pub input: PathBuf,
    /// Defaults to `<input_stem>_UTC.csv` next to the input.
    pub output: Option<PathBuf>,
    pub options: NormalizeOptions,
}

/// Reproducibility record of a finished calendar run.
#[derive(Debug)]
pub struct CalendarRun {
    pub output: PathBuf,
    pub rows_read: usize,
    pub rows_written: usize,
    pub failures: Vec<RowFailure>,
    /// Output bytes depend on the transition-table version.
    pub tzdb_version: &'static str,
}

/// Configuration for one minute-data run.
#[derive(Debug, Clone, Default)]
pub struct MinutesConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
}

/// Record of a finished minute-data run.
#[derive(Debug)]
pub struct MinutesRun {
    pub output: PathBuf,
    pub rows: usize,
}

/// Run the economic-calendar normalizer.
pub fn run_calendar(config: &CalendarConfig) -> Result<CalendarRun> {
    let span = info_span!("calendar", input = %config.input.display());
    let _guard = span.enter();
    info!(tzdb = tzdb_version(), "starting calendar normalization");

    let table = read_calendar(&config.input).context("read calendar input")?;
    let rows_read = table.len();
    let outcome = normalize_table(&table, &config.options).context("normalize rows")?;

    let mut records = outcome.records;
    sequence(&mut records, DATETIME_UTC_COLUMN);
    let output = OutputTable {
        headers: output_headers(&table.headers),
        records,
    };

    let output_path = resolve_output_path(&config.input, config.output.as_deref());
    ensure_parent_dir(&output_path)?;
    write_table(&output_path, &output).context("write output")?;

    Ok(CalendarRun {
        output: output_path,
        rows_read,
        rows_written: output.records.len(),
        failures: outcome.failures,
        tzdb_version: tzdb_version(),
    })
}

/// Run the minute-data normalizer (fixed EST, no DST).
pub fn run_minutes(config: &MinutesConfig) -> Result<MinutesRun> {
    let span = info_span!("minutes", input = %config.input.display());
    let _guard = span.enter();

    let table = read_minutes(&config.input).context("read minute input")?;
    let mut output = normalize_minutes(&table).context("normalize minute rows")?;
    sequence(&mut output.records, MINUTE_COLUMNS[0]);

    let output_path = resolve_output_path(&config.input, config.output.as_deref());
    ensure_parent_dir(&output_path)?;
    write_table(&output_path, &output).context("write output")?;

    Ok(MinutesRun {
        output: output_path,
        rows: output.records.len(),
    })
}

/// `<input_stem>_UTC.csv` next to the input unless an output was supplied
/// (always forced to a `.csv` extension).
pub fn resolve_output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) => path.with_extension("csv"),
        None => {
            let stem = input
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "output".to_string());
            input.with_file_name(format!("{stem}_UTC.csv"))
        }
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    Ok(())
}
