use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use harmony_model::Table;

/// Trims surrounding whitespace and a stray UTF-8 BOM from a cell.
fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a delimited-text source into a table.
///
/// The first non-blank record is the header row; header names are preserved
/// exactly as written apart from whitespace/BOM trimming. Fully blank rows
/// are skipped and short records are padded to the header width.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut table: Option<Table> = None;
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        match &mut table {
            None => table = Some(Table::new(row)),
            Some(table) => table.push_row(row),
        }
    }
    let table = table.unwrap_or_default();
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.row_count(),
        "csv table read"
    );
    Ok(table)
}
