//! Run summary printed after a calendar run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};

use calnorm_cli::pipeline::CalendarRun;

pub fn print_calendar_summary(run: &CalendarRun) {
    println!("Output: {}", run.output.display());
    println!("tzdb version: {}", run.tzdb_version);
    let mut table = Table::new();
    table.set_header(vec!["Rows read", "Rows written", "Rows skipped"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(run.rows_read),
        Cell::new(run.rows_written),
        skipped_cell(run.failures.len()),
    ]);
    for column in 0..3 {
        if let Some(column) = table.column_mut(column) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{table}");
    print_failures(run);
}

fn print_failures(run: &CalendarRun) {
    if run.failures.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec!["Row", "Reason"]);
    apply_table_style(&mut table);
    for failure in &run.failures {
        table.add_row(vec![
            Cell::new(failure.row),
            Cell::new(failure.error.to_string()),
        ]);
    }
    eprintln!("Skipped rows:");
    eprintln!("{table}");
}

fn skipped_cell(count: usize) -> Cell {
    if count == 0 {
        Cell::new(count)
    } else {
        Cell::new(count).fg(Color::Yellow)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
