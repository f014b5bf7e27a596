//! Timezone token resolution.
//!
//! Lookup order is fixed: exact allow-list match first, then the synonym
//! table, whose target must itself be in the allow-list. There are no
//! transitive synonym chains.

use std::str::FromStr;

use calnorm_model::{AllowList, NormalizeError};
use chrono::FixedOffset;
use chrono_tz::Tz;

/// Timezone tokens accepted in addition to canonical IANA identifiers.
/// Every right-hand side is a canonical identifier.
const ZONE_SYNONYMS: &[(&str, &str)] = &[
    ("Europe/Frankfurt", "Europe/Berlin"),
    ("Europe/Kiev", "Europe/Kyiv"),
    ("CET", "Europe/Berlin"),
    ("CEST", "Europe/Berlin"),
    ("EST", "America/New_York"),
    ("EDT", "America/New_York"),
];

/// A zone the converter can evaluate: either an IANA zone with its full
/// transition history, or a fixed offset with zero transition rules (the
/// degenerate case used by the minute-series normalizer).
///
/// Equality is by canonical IANA key for the IANA variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalZone {
    Iana(Tz),
    Fixed(FixedOffset),
}

impl CanonicalZone {
    pub fn name(&self) -> String {
        match self {
            Self::Iana(tz) => tz.name().to_string(),
            Self::Fixed(offset) => offset.to_string(),
        }
    }
}

/// Resolve a timezone token to a canonical zone.
///
/// The token is trimmed and matched ASCII-case-insensitively. Failure means
/// the token is absent from both the allow-list and the synonym table, or a
/// synonym target is not allowed.
pub fn resolve(token: &str, allow_list: &AllowList) -> Result<CanonicalZone, NormalizeError> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(NormalizeError::UnknownZone(token.to_string()));
    }
    let canonical = match allow_list.canonical_match(trimmed) {
        Some(zone) => zone,
        None => {
            let target = ZONE_SYNONYMS
                .iter()
                .find(|(alias, _)| alias.eq_ignore_ascii_case(trimmed))
                .map(|(_, target)| *target)
                .ok_or_else(|| NormalizeError::UnknownZone(trimmed.to_string()))?;
            allow_list
                .canonical_match(target)
                .ok_or_else(|| NormalizeError::UnknownZone(trimmed.to_string()))?
        }
    };
    // Allow-list entries are caller-supplied, so the identifier may still be
    // unknown to the tz database.
    let tz = Tz::from_str(canonical)
        .map_err(|_| NormalizeError::UnknownZone(trimmed.to_string()))?;
    Ok(CanonicalZone::Iana(tz))
}
