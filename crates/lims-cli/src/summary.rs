//! Terminal tables for command output.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lims_ingest::{MappedRecords, RowError};
use lims_model::Record;
use lims_standards::Vocabulary;

pub fn print_ingest_summary(mapped: &MappedRecords) {
    println!("{}", records_table(&mapped.records));
    println!(
        "Records: {}  Failed rows: {}",
        mapped.records.len(),
        mapped.errors.len()
    );
    if !mapped.errors.is_empty() {
        println!();
        println!("Row errors:");
        println!("{}", row_error_table(&mapped.errors));
    }
}

pub fn print_vocabulary(vocabulary: &Vocabulary) {
    println!("{}", vocabulary_table(vocabulary));
}

pub fn records_table(records: &[Record]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sample"),
        header_cell("Internal no."),
        header_cell("Case"),
        header_cell("Material"),
        header_cell("Host"),
        header_cell("Received"),
        header_cell("Sampled"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for record in records {
        table.add_row(vec![
            Cell::new(record.sample_number),
            Cell::new(record.internal_number),
            Cell::new(record.case_number),
            record
                .material
                .as_ref()
                .map_or_else(|| dim_cell("-"), |material| Cell::new(material.name())),
            Cell::new(record.host.name()),
            Cell::new(record.received_at.format("%Y-%m-%d %H:%M")),
            record
                .sample_date
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    table
}

pub fn row_error_table(errors: &[RowError]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Value"),
        header_cell("Problem"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for error in errors {
        table.add_row(vec![
            Cell::new(error.row),
            Cell::new(&error.column),
            error
                .value
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(&error.kind).fg(Color::Red),
        ]);
    }
    table
}

pub fn vocabulary_table(vocabulary: &Vocabulary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Symbol"),
        header_cell("Name"),
        header_cell("English name"),
    ]);
    apply_table_style(&mut table);
    for entry in vocabulary.entries() {
        table.add_row(vec![
            Cell::new(&entry.symbol)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&entry.name),
            entry
                .english_name
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
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
        .set_width(140);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
