//! Converter tests around DST transitions in America/New_York and
//! Europe/Berlin.

use calnorm_model::{AmbiguousPolicy, NonexistentPolicy, Provenance};
use calnorm_transform::{CanonicalZone, LocalLookup, convert, lookup, tzdb_version};
use chrono::{Duration, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

fn civil(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

fn new_york() -> CanonicalZone {
    CanonicalZone::Iana(chrono_tz::America::New_York)
}

#[test]
fn plain_winter_time_is_unique() {
    let instant = convert(
        &new_york(),
        civil(2024, 1, 15, 8, 30, 0),
        AmbiguousPolicy::default(),
        NonexistentPolicy::default(),
    );
    assert_eq!(instant.provenance, Provenance::Unambiguous);
    assert_eq!(instant.format_utc(), "2024-01-15T13:30:00+00:00");
}

#[test]
fn fall_back_policies_are_one_hour_apart_with_latest_greater() {
    // 2024-11-03 01:30 local occurred twice in America/New_York.
    let wall = civil(2024, 11, 3, 1, 30, 0);
    let earliest = convert(
        &new_york(),
        wall,
        AmbiguousPolicy::Earliest,
        NonexistentPolicy::default(),
    );
    let latest = convert(
        &new_york(),
        wall,
        AmbiguousPolicy::Latest,
        NonexistentPolicy::default(),
    );
    assert_eq!(earliest.provenance, Provenance::AmbiguousResolved);
    assert_eq!(latest.provenance, Provenance::AmbiguousResolved);
    assert_eq!(latest.utc - earliest.utc, Duration::hours(1));
    assert!(latest.utc > earliest.utc);
    assert_eq!(earliest.format_utc(), "2024-11-03T05:30:00+00:00");
    assert_eq!(latest.format_utc(), "2024-11-03T06:30:00+00:00");
}

#[test]
fn default_ambiguous_policy_is_latest() {
    let wall = civil(2024, 11, 3, 1, 30, 0);
    let resolved = convert(
        &new_york(),
        wall,
        AmbiguousPolicy::default(),
        NonexistentPolicy::default(),
    );
    assert_eq!(resolved.format_utc(), "2024-11-03T06:30:00+00:00");
}

#[test]
fn spring_forward_gap_is_reported_with_width() {
    // 2024-03-10 02:30 local never occurred; clocks jumped 02:00 -> 03:00.
    let wall = civil(2024, 3, 10, 2, 30, 0);
    match lookup(&new_york(), wall) {
        LocalLookup::Nonexistent { transition, gap } => {
            assert_eq!(transition, Utc.with_ymd_and_hms(2024, 3, 10, 7, 0, 0).unwrap());
            assert_eq!(gap, Duration::hours(1));
        }
        other => panic!("expected a nonexistent lookup, got {other:?}"),
    }
}

#[test]
fn shift_forward_lands_on_first_valid_instant_after_the_gap() {
    let wall = civil(2024, 3, 10, 2, 30, 0);
    let resolved = convert(
        &new_york(),
        wall,
        AmbiguousPolicy::default(),
        NonexistentPolicy::ShiftForward,
    );
    assert_eq!(resolved.provenance, Provenance::NonexistentResolved);
    assert_eq!(resolved.format_utc(), "2024-03-10T07:00:00+00:00");
}

#[test]
fn shift_backward_lands_on_last_valid_instant_before_the_gap() {
    let wall = civil(2024, 3, 10, 2, 30, 0);
    let resolved = convert(
        &new_york(),
        wall,
        AmbiguousPolicy::default(),
        NonexistentPolicy::ShiftBackward,
    );
    assert_eq!(resolved.format_utc(), "2024-03-10T06:59:59+00:00");
}

#[test]
fn berlin_spring_forward() {
    // Berlin jumped 02:00 -> 03:00 on 2024-03-31 (01:00 UTC).
    let zone = CanonicalZone::Iana(chrono_tz::Europe::Berlin);
    let resolved = convert(
        &zone,
        civil(2024, 3, 31, 2, 30, 0),
        AmbiguousPolicy::default(),
        NonexistentPolicy::ShiftForward,
    );
    assert_eq!(resolved.format_utc(), "2024-03-31T01:00:00+00:00");
}

#[test]
fn fixed_offset_zone_is_always_unique() {
    let est = CanonicalZone::Fixed(FixedOffset::west_opt(5 * 3600).unwrap());
    // A wall-clock value that is nonexistent under DST rules is fine under a
    // fixed offset.
    match lookup(&est, civil(2024, 3, 10, 2, 30, 0)) {
        LocalLookup::Unique(utc) => {
            assert_eq!(utc, Utc.with_ymd_and_hms(2024, 3, 10, 7, 30, 0).unwrap());
        }
        other => panic!("expected a unique lookup, got {other:?}"),
    }
}

#[test]
fn formatted_instant_round_trips_as_iso8601() {
    let resolved = convert(
        &new_york(),
        civil(2024, 5, 20, 9, 0, 0),
        AmbiguousPolicy::default(),
        NonexistentPolicy::default(),
    );
    let formatted = resolved.format_utc();
    let parsed = chrono::DateTime::parse_from_rfc3339(&formatted).unwrap();
    assert_eq!(parsed.with_timezone(&Utc), resolved.utc);
}

#[test]
fn tzdb_version_is_surfaced() {
    let version = tzdb_version();
    assert!(!version.is_empty());
    assert!(version.chars().next().unwrap().is_ascii_digit());
}
