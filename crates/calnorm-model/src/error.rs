use thiserror::Error;

/// Row-level failure kinds raised while normalizing a single record.
///
/// Ambiguous and nonexistent local times are not represented here: they are
/// always resolved by policy in the converter and never surface as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// No supported local-datetime pattern matched the input text.
    #[error("unrecognized local datetime format: {0:?}")]
    Format(String),
    /// The input carried an embedded UTC offset or zone suffix; the zone is
    /// supplied separately and must not appear in `local_dt`.
    #[error("local_dt must not carry an offset or zone suffix: {0:?}")]
    OffsetNotAllowed(String),
    /// The timezone token is absent from both the synonym table and the
    /// allow-list after canonicalization.
    #[error("timezone {0:?} is not a known or allowed zone")]
    UnknownZone(String),
    /// A required column is missing from the input row.
    #[error("missing required column {0:?}")]
    MissingColumn(String),
}
