//! CLI argument definitions for the UTC normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "calnorm",
    version,
    about = "Normalize calendar and minute data to UTC, deterministically",
    long_about = "Re-express local timestamps as canonical UTC and write \
                  deterministic, byte-reproducible CSV.\n\n\
                  Calendar input is converted against the full IANA \
                  transition history with explicit DST gap/overlap policies; \
                  minute data uses fixed EST (no DST)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize an economic-calendar CSV to UTC and sort by datetime_utc.
    Calendar(CalendarArgs),

    /// Normalize minute OHLCV data from fixed EST to UTC.
    Minutes(MinutesArgs),

    /// List the canonical zones in the default allow-list.
    Zones,
}

#[derive(Parser)]
pub struct CalendarArgs {
    /// Input CSV (';' separator; requires columns local_dt and source_tz).
    #[arg(value_name = "IN_CSV")]
    pub input: PathBuf,

    /// Output CSV path (default: <input_stem>_UTC.csv).
    #[arg(value_name = "OUT_CSV")]
    pub output: Option<PathBuf>,

    /// How to resolve DST fall-back overlap.
    #[arg(long = "ambiguous", value_enum, default_value = "latest")]
    pub ambiguous: AmbiguousArg,

    /// How to resolve DST spring-forward gaps.
    #[arg(long = "nonexistent", value_enum, default_value = "shift-forward")]
    pub nonexistent: NonexistentArg,

    /// Extend the allow-list with an additional canonical zone (repeatable).
    ///
    /// Extension never bypasses synonym canonicalization.
    #[arg(long = "allow-zone", value_name = "ZONE")]
    pub allow_zones: Vec<String>,

    /// Fail the whole run on the first row error instead of skipping and
    /// reporting.
    #[arg(long = "abort-on-row-error")]
    pub abort_on_row_error: bool,
}

#[derive(Parser)]
pub struct MinutesArgs {
    /// Input CSV; headerless DAT_ASCII files are auto-detected.
    #[arg(value_name = "IN_CSV")]
    pub input: PathBuf,

    /// Output CSV path (default: <input_stem>_UTC.csv).
    #[arg(long = "output", value_name = "OUT_CSV")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AmbiguousArg {
    Earliest,
    Latest,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum NonexistentArg {
    ShiftForward,
    ShiftBackward,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
