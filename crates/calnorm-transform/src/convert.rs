//! Civil-to-UTC conversion against the zone's transition history.
//!
//! The lookup produces an explicit tagged result — unique, ambiguous, or
//! nonexistent — and a separate pure policy step picks exactly one instant.
//! Ambiguity is therefore never resolved silently and both DST branches are
//! independently testable.

use calnorm_model::{AmbiguousPolicy, NonexistentPolicy, Provenance, ResolvedInstant};
use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::zones::CanonicalZone;

/// Version of the embedded IANA transition database. Output bytes depend on
/// it, so it belongs in any reproducibility record.
pub fn tzdb_version() -> &'static str {
    chrono_tz::IANA_TZDB_VERSION
}

/// The set of UTC instants whose local representation equals a given civil
/// datetime: exactly one, two (fall-back overlap), or zero (spring-forward
/// gap, reported as the transition instant plus the gap width).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalLookup {
    Unique(DateTime<Utc>),
    Ambiguous {
        earlier: DateTime<Utc>,
        later: DateTime<Utc>,
    },
    Nonexistent {
        transition: DateTime<Utc>,
        gap: Duration,
    },
}

/// Compute the candidate UTC instants for `civil` in `zone`.
pub fn lookup(zone: &CanonicalZone, civil: NaiveDateTime) -> LocalLookup {
    match zone {
        // Zero transition rules: every wall-clock value maps to one instant.
        CanonicalZone::Fixed(offset) => {
            LocalLookup::Unique(Utc.from_utc_datetime(&(civil - *offset)))
        }
        CanonicalZone::Iana(tz) => match tz.from_local_datetime(&civil) {
            LocalResult::Single(mapped) => LocalLookup::Unique(mapped.with_timezone(&Utc)),
            LocalResult::Ambiguous(first, second) => LocalLookup::Ambiguous {
                earlier: first.with_timezone(&Utc),
                later: second.with_timezone(&Utc),
            },
            LocalResult::None => {
                let (transition, gap) = locate_gap(*tz, civil);
                LocalLookup::Nonexistent { transition, gap }
            }
        },
    }
}

/// Apply the configured policies to pick exactly one instant.
///
/// Never fails: ambiguous and nonexistent cases are always policy-resolved,
/// and the provenance records which branch was taken.
pub fn convert(
    zone: &CanonicalZone,
    civil: NaiveDateTime,
    ambiguous: AmbiguousPolicy,
    nonexistent: NonexistentPolicy,
) -> ResolvedInstant {
    match lookup(zone, civil) {
        LocalLookup::Unique(utc) => ResolvedInstant {
            utc,
            provenance: Provenance::Unambiguous,
        },
        LocalLookup::Ambiguous { earlier, later } => ResolvedInstant {
            utc: match ambiguous {
                AmbiguousPolicy::Earliest => earlier,
                AmbiguousPolicy::Latest => later,
            },
            provenance: Provenance::AmbiguousResolved,
        },
        LocalLookup::Nonexistent { transition, gap: _ } => ResolvedInstant {
            // The transition instant is the first valid instant after the
            // gap; one second earlier is the last valid instant before it.
            utc: match nonexistent {
                NonexistentPolicy::ShiftForward => transition,
                NonexistentPolicy::ShiftBackward => transition - Duration::seconds(1),
            },
            provenance: Provenance::NonexistentResolved,
        },
    }
}

/// Locate the forward transition whose gap swallows `civil`.
///
/// Probes one day either side of the wall-clock value read as UTC; real
/// offsets stay within ±14h and transitions are months apart, so exactly one
/// offset change lies in the window. Binary search at second resolution
/// finds the first UTC instant on the post-transition offset.
fn locate_gap(tz: Tz, civil: NaiveDateTime) -> (DateTime<Utc>, Duration) {
    let mut lo = civil - Duration::days(1);
    let mut hi = civil + Duration::days(1);
    let offset_before = tz.offset_from_utc_datetime(&lo).fix();
    let offset_after = tz.offset_from_utc_datetime(&hi).fix();
    while hi - lo > Duration::seconds(1) {
        let mid = lo + (hi - lo) / 2;
        if tz.offset_from_utc_datetime(&mid).fix() == offset_after {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    let gap = Duration::seconds(i64::from(
        offset_after.local_minus_utc() - offset_before.local_minus_utc(),
    ));
    (Utc.from_utc_datetime(&hi), gap)
}
