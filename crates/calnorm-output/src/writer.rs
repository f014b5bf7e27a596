//! Stable sort and fixed-shape CSV rendering.

use std::fs;
use std::path::{Path, PathBuf};

use calnorm_model::{NormalizedRecord, OutputTable};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("serialize csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("flush csv buffer: {0}")]
    Buffer(String),
    #[error("write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Stable ascending sort on the named column.
///
/// The fixed-width zero-padded datetime format makes lexicographic order
/// equal to chronological order, and the stable sort keeps rows with equal
/// keys in input order.
pub fn sequence(records: &mut [NormalizedRecord], column: &str) {
    records.sort_by(|a, b| {
        a.get(column)
            .unwrap_or_default()
            .cmp(b.get(column).unwrap_or_default())
    });
}

/// Render the table to bytes: header row, `;` delimiter, `\n` terminator,
/// UTF-8 without a byte-order mark, quoting only where the delimiter or
/// quote character demands it.
pub fn render_table(table: &OutputTable) -> Result<Vec<u8>, OutputError> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());
    writer.write_record(&table.headers)?;
    for record in &table.records {
        writer.write_record(
            table
                .headers
                .iter()
                .map(|header| record.get(header).unwrap_or_default()),
        )?;
    }
    writer
        .into_inner()
        .map_err(|error| OutputError::Buffer(error.to_string()))
}

/// Render and write the table in one whole-file write.
pub fn write_table(path: &Path, table: &OutputTable) -> Result<(), OutputError> {
    let bytes = render_table(table)?;
    fs::write(path, bytes).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows = table.records.len(), "output written");
    Ok(())
}
