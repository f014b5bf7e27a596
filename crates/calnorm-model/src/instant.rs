//! UTC instants produced by the civil-to-UTC converter.

use chrono::{DateTime, Utc};

/// How a civil datetime mapped onto its UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Exactly one candidate UTC instant existed.
    Unambiguous,
    /// Two candidates existed (fall-back overlap); policy picked one.
    AmbiguousResolved,
    /// Zero candidates existed (spring-forward gap); policy picked one.
    NonexistentResolved,
}

/// A seconds-resolution UTC instant plus its resolution provenance.
///
/// Created once per record by the converter and never mutated afterward.
/// Provenance is informational only; it does not affect formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedInstant {
    pub utc: DateTime<Utc>,
    pub provenance: Provenance,
}

impl ResolvedInstant {
    /// Fixed output format: `YYYY-MM-DDTHH:MM:SS+00:00`.
    ///
    /// Zero-padded and fixed-width, so lexicographic order over formatted
    /// values equals chronological order. Downstream sorting relies on this.
    pub fn format_utc(&self) -> String {
        self.utc.format("%Y-%m-%dT%H:%M:%S+00:00").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_is_fixed_width_with_zero_offset() {
        let instant = ResolvedInstant {
            utc: Utc.with_ymd_and_hms(2024, 3, 10, 7, 0, 0).unwrap(),
            provenance: Provenance::Unambiguous,
        };
        assert_eq!(instant.format_utc(), "2024-03-10T07:00:00+00:00");
    }
}
