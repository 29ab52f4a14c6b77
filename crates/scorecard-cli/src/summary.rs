//! Terminal output for command results.

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use scorecard_report::render::summary_table;
use scorecard_transform::CleanReport;

use crate::commands::CleanOutcome;

pub fn print_clean_outcome(outcome: &CleanOutcome) {
    println!("Output: {}", outcome.output.display());
    println!(
        "Rows: {}  Columns: {} -> {}",
        outcome.rows, outcome.report.input_columns, outcome.columns
    );
    println!("{}", step_table(&outcome.report));
    if let Some(summary) = &outcome.summary {
        println!();
        println!("{}", summary_table(summary));
    }
}

/// Pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn step_table(report: &CleanReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Step"),
        header_cell("Count"),
        header_cell("Unit"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
    for index in [0, 2] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    for (position, step) in report.steps.iter().enumerate() {
        let count = if step.count > 0 {
            Cell::new(step.count).add_attribute(Attribute::Bold)
        } else {
            Cell::new(step.count).fg(Color::DarkGrey)
        };
        table.add_row(vec![
            Cell::new(position + 1).fg(Color::DarkGrey),
            Cell::new(step.step.display_name()),
            count,
            Cell::new(step.step.unit()).fg(Color::DarkGrey),
        ]);
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
