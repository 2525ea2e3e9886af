use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use harmony_output::OutputKind;

use crate::types::RunSummary;

/// Print the post-build run summary to stdout.
pub fn print_summary(result: &RunSummary) {
    println!("Run date: {}", result.run_date);
    println!(
        "Sources: items={} inventory={} sale_items={}",
        result.source_rows.items, result.source_rows.inventory, result.source_rows.sale_items
    );
    println!("Matched rows: {}", result.joined_rows);
    if result.dry_run {
        println!("Dry run: no files written");
    } else {
        println!("Output: {}", result.output_dir.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Output"),
        header_cell("Rows"),
        header_cell("File"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for output in &result.outputs {
        let file_cell = match &output.path {
            Some(path) => Cell::new(path.display().to_string()),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(kind_label(output.kind))
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(output.rows),
            file_cell,
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
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

fn kind_label(kind: OutputKind) -> &'static str {
    match kind {
        OutputKind::Master => "Master",
        OutputKind::Stock => "Stock",
        OutputKind::SaleSku => "Sale SKU",
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
