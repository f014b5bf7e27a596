//! Subcommand entry points: map CLI arguments onto pipeline configuration.

use anyhow::Result;
use comfy_table::Table;

use calnorm_cli::pipeline::{
    CalendarConfig, MinutesConfig, run_calendar, run_minutes,
};
use calnorm_model::{AllowList, AmbiguousPolicy, NonexistentPolicy, NormalizeOptions, RowErrorPolicy};
use calnorm_transform::tzdb_version;

use crate::cli::{AmbiguousArg, CalendarArgs, MinutesArgs, NonexistentArg};
use crate::summary::{apply_table_style, print_calendar_summary};

/// Returns whether any rows were skipped, for the process exit code.
pub fn run_calendar_command(args: &CalendarArgs) -> Result<bool> {
    let mut allow_list = AllowList::default();
    for zone in &args.allow_zones {
        allow_list = allow_list.with_zone(zone);
    }
    let options = NormalizeOptions::new()
        .with_ambiguous(match args.ambiguous {
            AmbiguousArg::Earliest => AmbiguousPolicy::Earliest,
            AmbiguousArg::Latest => AmbiguousPolicy::Latest,
        })
        .with_nonexistent(match args.nonexistent {
            NonexistentArg::ShiftForward => NonexistentPolicy::ShiftForward,
            NonexistentArg::ShiftBackward => NonexistentPolicy::ShiftBackward,
        })
        .with_allow_list(allow_list)
        .with_row_error(if args.abort_on_row_error {
            RowErrorPolicy::Abort
        } else {
            RowErrorPolicy::SkipAndReport
        });
    let config = CalendarConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        options,
    };
    let run = run_calendar(&config)?;
    print_calendar_summary(&run);
    Ok(!run.failures.is_empty())
}

pub fn run_minutes_command(args: &MinutesArgs) -> Result<()> {
    let config = MinutesConfig {
        input: args.input.clone(),
        output: args.output.clone(),
    };
    let run = run_minutes(&config)?;
    println!("Output: {}", run.output.display());
    println!("Rows: {}", run.rows);
    Ok(())
}

pub fn run_zones_command() -> Result<()> {
    let allow = AllowList::default();
    let mut table = Table::new();
    table.set_header(vec!["Canonical zone"]);
    apply_table_style(&mut table);
    for zone in allow.iter() {
        table.add_row(vec![zone]);
    }
    println!("{table}");
    println!("tzdb version: {}", tzdb_version());
    Ok(())
}
