//! Data model for the calendar/time-series UTC normalizer.
//!
//! Holds the record shapes flowing through the pipeline, the policy and
//! allow-list configuration consumed by the conversion engine, and the
//! row-level error kinds. The engine itself lives in `calnorm-transform`.

pub mod error;
pub mod instant;
pub mod options;
pub mod record;

pub use error::NormalizeError;
pub use instant::{Provenance, ResolvedInstant};
pub use options::{
    AllowList, AmbiguousPolicy, NonexistentPolicy, NormalizeOptions, RowErrorPolicy,
};
pub use record::{
    DATETIME_UTC_COLUMN, EVENT_COLUMN, LOCAL_DT_COLUMN, MINUTE_COLUMNS, NormalizedRecord,
    OutputTable, RawRecord, RawTable, SOURCE_TZ_COLUMN, output_headers,
};
