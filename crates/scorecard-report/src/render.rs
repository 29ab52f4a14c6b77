//! Terminal tables for the reports.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::category::CategoryDistribution;
use crate::histogram::{Histogram, HistogramComparison};
use crate::summary::DatasetSummary;

/// Width of the longest bar, in glyphs.
pub const BAR_WIDTH: usize = 30;

const BAR_GLYPH: char = '█';

/// A bar of `value / max` scaled to `width` glyphs.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if width == 0 || max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let glyphs = ((value / max) * width as f64).round() as usize;
    BAR_GLYPH.to_string().repeat(glyphs.clamp(1, width))
}

pub fn summary_table(summary: &DatasetSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Type"),
        header_cell("Missing"),
        header_cell("Missing %"),
        header_cell("Uniques"),
        header_cell("Uniques %"),
        header_cell("First"),
        header_cell("Second"),
        header_cell("Third"),
        header_cell("Last"),
    ]);
    apply_report_style(&mut table);
    for idx in [2, 3, 4, 5] {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for column in &summary.column_summaries {
        table.add_row(vec![
            Cell::new(&column.name).add_attribute(Attribute::Bold),
            dim_cell(&column.dtype),
            count_cell(column.missing, Color::Yellow),
            Cell::new(format!("{:.2}", column.missing_fraction)),
            Cell::new(column.unique),
            Cell::new(format!("{:.2}", column.unique_fraction)),
            sample_cell(column.first.as_deref()),
            sample_cell(column.second.as_deref()),
            sample_cell(column.third.as_deref()),
            sample_cell(column.last.as_deref()),
        ]);
    }
    table
}

pub fn category_table(distribution: &CategoryDistribution) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&distribution.column),
        header_cell("Not default"),
        header_cell("Default"),
        header_cell("Total"),
        header_cell("Default %"),
        header_cell("Loans"),
    ]);
    apply_chart_style(&mut table);
    for idx in 1..=4 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    let max = distribution.max_total() as f64;
    for row in &distribution.rows {
        table.add_row(vec![
            Cell::new(display_category(&row.category)),
            Cell::new(row.not_default),
            count_cell(row.default, Color::Red),
            Cell::new(row.total),
            Cell::new(format!("{:.1}", row.default_rate * 100.0)),
            Cell::new(bar(row.total as f64, max, BAR_WIDTH)).fg(Color::Blue),
        ]);
    }
    table.add_row(vec![
        Cell::new("ALL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(distribution.rows.iter().map(|row| row.total).sum::<usize>())
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", distribution.overall_default_rate() * 100.0))
            .add_attribute(Attribute::Bold),
        dim_cell(""),
    ]);
    table
}

/// Histogram with the bin holding the mean marked.
pub fn histogram_table(hist: &Histogram) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&hist.column),
        header_cell("Loans"),
        header_cell(""),
        header_cell(""),
    ]);
    apply_chart_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let max = hist.max_count() as f64;
    let mean_bin = hist.mean_bin();
    for (idx, bin) in hist.bins().enumerate() {
        let marker = if idx == mean_bin {
            Cell::new(format!("◆ mean {}", format_edge(hist.mean)))
                .fg(Color::Yellow)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new("")
        };
        table.add_row(vec![
            Cell::new(bin_label(bin.lower, bin.upper)),
            Cell::new(bin.count),
            Cell::new(bar(bin.count as f64, max, BAR_WIDTH)).fg(Color::Blue),
            marker,
        ]);
    }
    table
}

/// Per-class probabilities side by side over the shared bins.
pub fn comparison_table(comparison: &HistogramComparison) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&comparison.column),
        header_cell("Not default"),
        header_cell(""),
        header_cell("Default"),
        header_cell(""),
    ]);
    apply_chart_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    let max = comparison
        .not_default
        .probabilities
        .iter()
        .chain(&comparison.default.probabilities)
        .copied()
        .fold(0.0, f64::max);
    let half = BAR_WIDTH / 2;
    for (idx, window) in comparison.edges.windows(2).enumerate() {
        let p0 = comparison.not_default.probabilities[idx];
        let p1 = comparison.default.probabilities[idx];
        table.add_row(vec![
            Cell::new(bin_label(window[0], window[1])),
            Cell::new(format!("{p0:.3}")),
            Cell::new(bar(p0, max, half)).fg(Color::Blue),
            Cell::new(format!("{p1:.3}")),
            Cell::new(bar(p1, max, half)).fg(Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("n")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(comparison.not_default.total).add_attribute(Attribute::Bold),
        dim_cell(""),
        Cell::new(comparison.default.total).add_attribute(Attribute::Bold),
        dim_cell(""),
    ]);
    table
}

fn apply_report_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
}

fn apply_chart_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn sample_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn display_category(category: &str) -> &str {
    if category.is_empty() { "(blank)" } else { category }
}

fn bin_label(lower: f64, upper: f64) -> String {
    format!("{} – {}", format_edge(lower), format_edge(upper))
}

fn format_edge(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
