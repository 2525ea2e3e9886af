use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};
use tracing::debug;

use harmony_model::Table;

/// Serializes a table as raw tab-separated text with a single header row.
///
/// Field values are written as-is with no quoting or escaping; embedded tabs
/// or line breaks in a value are an accepted limitation of the feed format.
pub fn write_tsv(table: &Table, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory: {}", parent.display()))?;
    }
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .from_path(path)
        .with_context(|| format!("create output file: {}", path.display()))?;
    writer
        .write_record(&table.headers)
        .with_context(|| format!("write header: {}", path.display()))?;
    for row in &table.rows {
        writer
            .write_record(row)
            .with_context(|| format!("write row: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush output: {}", path.display()))?;
    debug!(path = %path.display(), rows = table.row_count(), "tsv written");
    Ok(())
}
