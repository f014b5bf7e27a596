//! Record shapes flowing through the pipeline.

/// Column naming the event text in calendar input.
pub const EVENT_COLUMN: &str = "event";
/// Column holding the local wall-clock datetime text.
pub const LOCAL_DT_COLUMN: &str = "local_dt";
/// Column holding the source timezone token.
pub const SOURCE_TZ_COLUMN: &str = "source_tz";
/// Computed column inserted into the output.
pub const DATETIME_UTC_COLUMN: &str = "datetime_utc";

/// Fixed column set of the minute-series input, in output order.
pub const MINUTE_COLUMNS: [&str; 6] = ["datetime", "open", "high", "low", "close", "volume"];

/// One ingested table: header row plus data rows, all text.
///
/// Rows are padded or truncated to the header width at ingest time, so a
/// [`RawRecord`] view always pairs up columns and values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = RawRecord<'_>> {
        self.rows.iter().map(|values| RawRecord {
            headers: &self.headers,
            values,
        })
    }
}

/// Borrowed view of one input row: ordered column name → text value.
///
/// Immutable once read; the normalizer never writes back into it.
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    headers: &'a [String],
    values: &'a [String],
}

impl<'a> RawRecord<'a> {
    pub fn new(headers: &'a [String], values: &'a [String]) -> Self {
        Self { headers, values }
    }

    /// Value of the first column with the given name, if present.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.headers
            .iter()
            .position(|header| header == column)
            .and_then(|index| self.values.get(index))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.headers
            .iter()
            .zip(self.values)
            .map(|(header, value)| (header.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

/// One output row: the source columns minus `local_dt`/`source_tz`, with
/// `datetime_utc` inserted. Owned by the producing stage until written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    fields: Vec<(String, String)>,
}

impl NormalizedRecord {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// The computed UTC column; empty when absent (never the case for
    /// records produced by the normalizer).
    pub fn datetime_utc(&self) -> &str {
        self.get(DATETIME_UTC_COLUMN).unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Ordered output: non-decreasing sort column, ties in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTable {
    pub headers: Vec<String>,
    pub records: Vec<NormalizedRecord>,
}

/// Derive the output header from an input header: drop `local_dt` and
/// `source_tz` (and any pre-existing `datetime_utc`), then insert
/// `datetime_utc` immediately after `event`, or at the end when there is no
/// `event` column.
pub fn output_headers(input: &[String]) -> Vec<String> {
    let mut headers = Vec::with_capacity(input.len());
    let mut inserted = false;
    for column in input {
        if column == LOCAL_DT_COLUMN || column == SOURCE_TZ_COLUMN || column == DATETIME_UTC_COLUMN
        {
            continue;
        }
        headers.push(column.clone());
        if !inserted && column == EVENT_COLUMN {
            headers.push(DATETIME_UTC_COLUMN.to_string());
            inserted = true;
        }
    }
    if !inserted {
        headers.push(DATETIME_UTC_COLUMN.to_string());
    }
    headers
}
