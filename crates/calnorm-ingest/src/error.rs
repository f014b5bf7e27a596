use std::path::PathBuf;

use thiserror::Error;

/// Fatal ingestion errors. Any of these aborts the run before a single row
/// is normalized.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },
    #[error("{}: missing required columns: {columns:?}", path.display())]
    MissingColumns {
        path: PathBuf,
        columns: Vec<String>,
    },
    #[error("{}: no header row found", path.display())]
    Empty { path: PathBuf },
}
