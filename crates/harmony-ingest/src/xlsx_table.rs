use std::path::Path;

use anyhow::{Context, Result, anyhow};
use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use harmony_model::Table;

use crate::values::format_numeric;

/// Converts one spreadsheet cell to its text form.
///
/// Cell errors (`#N/A` and friends) are treated as missing values.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(value) => value.trim().to_string(),
        Data::Float(value) => format_numeric(*value),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        Data::DateTime(value) => format_numeric(value.as_f64()),
        Data::DateTimeIso(value) | Data::DurationIso(value) => value.clone(),
    }
}

/// Reads the first worksheet of a spreadsheet source into a table.
///
/// The first non-blank row is the header row; the remaining rows are data.
/// Numeric cells are formatted via [`format_numeric`] so identifier columns
/// survive the float representation spreadsheets store them in.
pub fn read_xlsx_table(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("open spreadsheet: {}", path.display()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow!("no worksheet in {}", path.display()))?
        .with_context(|| format!("read worksheet: {}", path.display()))?;
    let mut table: Option<Table> = None;
    for row in range.rows() {
        let cells: Vec<String> = row.iter().map(cell_to_string).collect();
        if cells.iter().all(String::is_empty) {
            continue;
        }
        match &mut table {
            None => table = Some(Table::new(cells)),
            Some(table) => table.push_row(cells),
        }
    }
    let table = table.unwrap_or_default();
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.row_count(),
        "spreadsheet table read"
    );
    Ok(table)
}
