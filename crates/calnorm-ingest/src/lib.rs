//! Delimited-text ingestion.
//!
//! Reads `;`-delimited UTF-8 input into a [`RawTable`]: the whole file is
//! read up front, a leading byte-order mark is stripped from the header, and
//! rows are padded to the header width. Cell values are passed through
//! byte-for-byte; only headers are trimmed.

pub mod delimited;
pub mod error;

pub use delimited::{read_calendar, read_delimited, read_minutes};
pub use error::IngestError;
