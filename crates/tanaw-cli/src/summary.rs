use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tanaw_cli::commands::CleanReport;
use tanaw_report::EnrollmentSummary;

pub fn print_clean_report(report: &CleanReport) {
    let outcome = &report.outcome;
    println!("Input: {}", report.input.display());
    match &outcome.output_path {
        Some(path) => println!("Output: {}", path.display()),
        None if report.dry_run => println!("Output: (dry run, nothing written)"),
        None => {}
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Layout"),
        header_cell("Rows read"),
        header_cell("Retained"),
        header_cell("Dropped"),
        header_cell("Columns"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(outcome.layout).fg(Color::Cyan),
        Cell::new(outcome.rows_read),
        Cell::new(outcome.rows_retained).fg(Color::Green),
        count_cell(outcome.rows_dropped, Color::Yellow),
        Cell::new(outcome.columns.len()),
    ]);
    println!("{table}");
}

pub fn print_enrollment_summary(summary: &EnrollmentSummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Measure"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("Total enrollments", summary.total_enrollments.to_string()),
        ("Male enrollments", summary.male_enrollments.to_string()),
        ("Female enrollments", summary.female_enrollments.to_string()),
        ("Schools", summary.number_of_schools.to_string()),
        ("Regions with schools", summary.regions_with_schools.to_string()),
        ("Year levels", summary.number_of_year_levels.to_string()),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).add_attribute(Attribute::Dim)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
