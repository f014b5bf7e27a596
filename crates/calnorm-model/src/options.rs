//! Configuration consumed by the normalization engine.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// US zones accepted by the default allow-list.
pub const US_ZONES: &[&str] = &[
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "America/Phoenix",
    "America/Anchorage",
    "Pacific/Honolulu",
    "America/Detroit",
    "America/Indiana/Indianapolis",
    "America/Indiana/Knox",
    "America/Kentucky/Louisville",
];

/// Eurozone zones accepted by the default allow-list.
pub const EUROZONE_ZONES: &[&str] = &[
    "Europe/Amsterdam",
    "Europe/Brussels",
    "Europe/Berlin",
    "Europe/Paris",
    "Europe/Madrid",
    "Europe/Rome",
    "Europe/Vienna",
    "Europe/Luxembourg",
    "Europe/Dublin",
    "Europe/Lisbon",
    "Atlantic/Madeira",
    "Europe/Helsinki",
    "Europe/Athens",
    "Europe/Bratislava",
    "Europe/Ljubljana",
    "Europe/Tallinn",
    "Europe/Riga",
    "Europe/Vilnius",
    "Europe/Malta",
    "Asia/Nicosia",
];

/// The set of canonical IANA zone identifiers the resolver accepts.
///
/// Built once before processing and never mutated afterward. Callers may
/// extend the set; extension never bypasses synonym canonicalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowList {
    zones: BTreeSet<String>,
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(US_ZONES.iter().chain(EUROZONE_ZONES).copied())
    }
}

impl AllowList {
    pub fn new<'a>(zones: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            zones: zones.into_iter().map(str::to_string).collect(),
        }
    }

    /// Default set extended with additional canonical identifiers.
    #[must_use]
    pub fn with_zone(mut self, zone: &str) -> Self {
        self.zones.insert(zone.trim().to_string());
        self
    }

    /// Look up a token against the list, trimmed and ASCII-case-insensitive.
    ///
    /// Returns the canonical spelling stored in the list, not the input.
    pub fn canonical_match(&self, token: &str) -> Option<&str> {
        let trimmed = token.trim();
        self.zones
            .iter()
            .find(|zone| zone.eq_ignore_ascii_case(trimmed))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.zones.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

/// How to resolve a fall-back overlap (two candidate UTC instants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AmbiguousPolicy {
    /// First occurrence, pre-transition offset.
    Earliest,
    /// Second occurrence, post-transition offset.
    #[default]
    Latest,
}

/// How to resolve a spring-forward gap (zero candidate UTC instants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NonexistentPolicy {
    /// First valid instant after the gap.
    #[default]
    ShiftForward,
    /// Last valid instant before the gap.
    ShiftBackward,
}

/// What to do when a single row fails to normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RowErrorPolicy {
    /// Exclude the row, log it, and collect it into the run report.
    #[default]
    SkipAndReport,
    /// Fail the whole batch on the first row error.
    Abort,
}

/// Options for one normalization run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizeOptions {
    pub ambiguous: AmbiguousPolicy,
    pub nonexistent: NonexistentPolicy,
    pub allow_list: AllowList,
    pub on_row_error: RowErrorPolicy,
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ambiguous(mut self, policy: AmbiguousPolicy) -> Self {
        self.ambiguous = policy;
        self
    }

    #[must_use]
    pub fn with_nonexistent(mut self, policy: NonexistentPolicy) -> Self {
        self.nonexistent = policy;
        self
    }

    #[must_use]
    pub fn with_allow_list(mut self, allow_list: AllowList) -> Self {
        self.allow_list = allow_list;
        self
    }

    #[must_use]
    pub fn with_row_error(mut self, policy: RowErrorPolicy) -> Self {
        self.on_row_error = policy;
        self
    }
}
