use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sift_model::RunSummary;

/// Render the counts of one run as a table.
pub fn summary_table(summary: &RunSummary) -> Table {
    let counts = &summary.counts;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rows"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Kept"), count_cell(counts.kept, Color::Green)]);
    table.add_row(vec![
        Cell::new("Filtered out"),
        count_cell(counts.filtered_out, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Bad order date"),
        count_cell(counts.bad_date, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(counts.total).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn print_summary(summary: &RunSummary) {
    println!("Input: {}", summary.input);
    println!("Output: {}", summary.output);
    println!("{}", summary_table(summary));
}

/// Same as [`print_summary`], for when stdout carries data.
pub fn eprint_summary(summary: &RunSummary) {
    eprintln!("Input: {}", summary.input);
    eprintln!("Output: {}", summary.output);
    eprintln!("{}", summary_table(summary));
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(60);
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
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
