use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::BuildResult;

/// Width of the digest prefix shown per file.
const DIGEST_PREFIX: usize = 12;

pub fn print_summary(result: &BuildResult) {
    println!("Source: {}", result.source_dir.display());
    match &result.manifest_path {
        Some(path) => {
            println!("Output: {}", result.output_dir.display());
            println!("Manifest: {}", path.display());
        }
        None => println!("Dry run: nothing written to {}", result.output_dir.display()),
    }
    println!("{}", summary_table(result));
}

pub fn summary_table(result: &BuildResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Records"),
        header_cell("Bytes"),
        header_cell("SHA-256"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total_bytes = 0usize;
    for file in &result.files {
        total_bytes += file.bytes;
        let digest = file.sha256.get(..DIGEST_PREFIX).unwrap_or(&file.sha256);
        table.add_row(vec![
            Cell::new(&file.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(file.records),
            Cell::new(file.bytes),
            dim_cell(digest),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.total_records()).add_attribute(Attribute::Bold),
        Cell::new(total_bytes).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
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
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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
