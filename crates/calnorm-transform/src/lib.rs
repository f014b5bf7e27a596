//! Timestamp normalization and timezone resolution engine.
//!
//! The pipeline runs one row at a time: [`detect`] classifies the local
//! datetime text, [`resolve`] canonicalizes the timezone token, [`convert`]
//! maps the civil time onto exactly one UTC instant under the configured
//! ambiguous/nonexistent policies, and [`normalize_table`] assembles the
//! output records while isolating per-row failures.

pub mod convert;
pub mod detect;
pub mod minutes;
pub mod normalize;
pub mod zones;

pub use convert::{LocalLookup, convert, lookup, tzdb_version};
pub use detect::{detect, detect_compact};
pub use minutes::normalize_minutes;
pub use normalize::{BatchOutcome, RowFailure, normalize_record, normalize_table};
pub use zones::{CanonicalZone, resolve};
