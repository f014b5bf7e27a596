//! Local-datetime format detection.
//!
//! Patterns are attempted in a fixed priority order and the first success
//! wins; that order is the documented disambiguation rule for inputs that
//! are syntactically valid under more than one shape. In particular the US
//! slash form is attempted before the EU slash form, so `03/04/2024` reads
//! as March 4th.

use calnorm_model::NormalizeError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Datetime patterns in priority order: ISO 8601 (`T` then space separated),
/// US slash, EU slash, EU dot; 24-hour clock before AM/PM variants.
const DATETIME_PATTERNS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d/%m/%Y %I:%M:%S %p",
    "%d/%m/%Y %I:%M %p",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%d.%m.%Y %I:%M:%S %p",
    "%d.%m.%Y %I:%M %p",
];

/// Date-only patterns, same priority order; time defaults to midnight.
const DATE_PATTERNS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y", "%d.%m.%Y"];

/// Compact shapes used by DAT_ASCII minute files.
const COMPACT_PATTERNS: &[&str] = &["%Y%m%d %H%M%S", "%Y%m%d%H%M%S"];

/// Classify a local-datetime string into a civil datetime.
///
/// Inputs carrying an explicit offset or zone suffix (`Z`, `+HH:MM`, a
/// trailing `-HH:MM`) are rejected before any pattern attempt: the zone is
/// supplied separately and must not be embedded in the text.
pub fn detect(text: &str) -> Result<NaiveDateTime, NormalizeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(NormalizeError::Format(text.to_string()));
    }
    if has_offset_suffix(trimmed) {
        return Err(NormalizeError::OffsetNotAllowed(trimmed.to_string()));
    }
    first_match(trimmed, DATETIME_PATTERNS, DATE_PATTERNS)
        .ok_or_else(|| NormalizeError::Format(trimmed.to_string()))
}

/// Classify a compact DAT_ASCII datetime (`YYYYMMDD HHMMSS` or
/// `YYYYMMDDHHMMSS`), falling back to the general patterns.
pub fn detect_compact(text: &str) -> Result<NaiveDateTime, NormalizeError> {
    let trimmed = text.trim();
    for pattern in COMPACT_PATTERNS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Ok(parsed);
        }
    }
    detect(text)
}

fn first_match(
    text: &str,
    datetime_patterns: &[&str],
    date_patterns: &[&str],
) -> Option<NaiveDateTime> {
    for pattern in datetime_patterns {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(parsed);
        }
    }
    for pattern in date_patterns {
        if let Ok(parsed) = NaiveDate::parse_from_str(text, pattern) {
            return Some(parsed.and_time(NaiveTime::MIN));
        }
    }
    None
}

/// True when the text ends in an explicit UTC designator or numeric offset.
///
/// A `-` only counts as an offset sign when it appears after the first `:`,
/// which keeps ISO date separators out of consideration.
fn has_offset_suffix(text: &str) -> bool {
    if text.contains('+') {
        return true;
    }
    let bytes = text.as_bytes();
    if bytes.len() >= 2
        && matches!(bytes[bytes.len() - 1], b'Z' | b'z')
        && bytes[bytes.len() - 2].is_ascii_digit()
    {
        return true;
    }
    let Some(first_colon) = text.find(':') else {
        return false;
    };
    let Some(dash) = text.rfind('-') else {
        return false;
    };
    if dash <= first_colon {
        return false;
    }
    let tail = &text[dash + 1..];
    matches!(tail.len(), 4 | 5)
        && tail
            .chars()
            .filter(|ch| *ch != ':')
            .all(|ch| ch.is_ascii_digit())
}
