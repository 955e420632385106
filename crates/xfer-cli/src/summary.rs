use std::collections::BTreeMap;

use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use xfer_cli::pipeline::PipelineOutput;
use xfer_model::{LabelMap, Row, fields};

use crate::commands::CheckOutcome;

pub fn print_summary(outcome: &CheckOutcome, labels: &LabelMap) {
    let output = &outcome.output;
    println!("File: {}", outcome.csv.display());
    println!("Checked at: {}", output.report.checked_at.format("%Y-%m-%d %H:%M:%S"));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell(labels.label(fields::SERIAL_NUMBER)),
        header_cell(labels.label(fields::CUSTOMER_NAME)),
        header_cell("Result"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, row) in output.rows.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            text_cell(row.get(fields::SERIAL_NUMBER)),
            text_cell(row.get(fields::CUSTOMER_NAME)),
            result_cell(row),
        ]);
    }
    let failed = output.report.failed_count();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(output.rows.len()).add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(failed, "failed").add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let stats = output.store_stats;
    if stats.checked > 0 {
        println!(
            "Registered lookups: {} checked, {} already registered, {} failed",
            stats.checked, stats.duplicates, stats.failed
        );
    }
    print_issue_table(outcome);
}

fn print_issue_table(outcome: &CheckOutcome) {
    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for issue in outcome.output.report.issues() {
        *counts.entry(issue.kind()).or_default() += 1;
    }
    if counts.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Issue"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (kind, count) in counts {
        table.add_row(vec![Cell::new(kind), Cell::new(count).fg(Color::Red)]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

/// Rows and report as pretty JSON on stdout.
pub fn print_json(output: &PipelineOutput) -> Result<()> {
    println!("{}", output.to_json()?);
    Ok(())
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn result_cell(row: &Row) -> Cell {
    match row.validation_result() {
        Some(_) if row.is_ok() => Cell::new(fields::VALIDATION_OK)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Some(message) => Cell::new(message).fg(Color::Red),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, noun: &str) -> Cell {
    if count > 0 {
        Cell::new(format!("{count} {noun}")).fg(Color::Red)
    } else {
        Cell::new("all OK").fg(Color::Green)
    }
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
