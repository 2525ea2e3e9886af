//! Keyed inner joins and the `sku_code` derivation.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Result, anyhow, bail};
use tracing::debug;

use harmony_model::Table;

use crate::columns::{ATTRIBUTE1_CODE, ATTRIBUTE2_CODE, JAN_CODE, PRODUCT_CODE, SKU_CODE};

/// Equality inner join of two tables on `key`.
///
/// Output rows follow `left` order, one row per matching pair, so a key that
/// repeats on either side multiplies out. Rows whose key cell is empty never
/// match. Keys present on only one side are dropped silently; that loss is a
/// business rule of the feed, not an error. Non-key columns sharing a name
/// on both sides are renamed with `_x`/`_y` suffixes.
pub fn inner_join(left: &Table, right: &Table, key: &str) -> Result<Table> {
    let Some(left_key) = left.column_index(key) else {
        bail!("join key {key:?} missing from left table");
    };
    let Some(right_key) = right.column_index(key) else {
        bail!("join key {key:?} missing from right table");
    };

    let right_names: BTreeSet<&str> = right
        .headers
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != right_key)
        .map(|(_, name)| name.as_str())
        .collect();
    let left_names: BTreeSet<&str> = left
        .headers
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != left_key)
        .map(|(_, name)| name.as_str())
        .collect();

    let mut headers = Vec::with_capacity(left.headers.len() + right.headers.len() - 1);
    for (index, name) in left.headers.iter().enumerate() {
        if index != left_key && right_names.contains(name.as_str()) {
            headers.push(format!("{name}_x"));
        } else {
            headers.push(name.clone());
        }
    }
    for (index, name) in right.headers.iter().enumerate() {
        if index == right_key {
            continue;
        }
        if left_names.contains(name.as_str()) {
            headers.push(format!("{name}_y"));
        } else {
            headers.push(name.clone());
        }
    }

    let mut index: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (row_index, row) in right.rows.iter().enumerate() {
        let key_value = row.get(right_key).map(String::as_str).unwrap_or("");
        if key_value.is_empty() {
            continue;
        }
        index.entry(key_value).or_default().push(row_index);
    }

    let mut joined = Table::new(headers);
    for left_row in &left.rows {
        let key_value = left_row.get(left_key).map(String::as_str).unwrap_or("");
        if key_value.is_empty() {
            continue;
        }
        let Some(matches) = index.get(key_value) else {
            continue;
        };
        for &right_index in matches {
            let right_row = &right.rows[right_index];
            let mut row = left_row.clone();
            for (cell_index, cell) in right_row.iter().enumerate() {
                if cell_index != right_key {
                    row.push(cell.clone());
                }
            }
            joined.push_row(row);
        }
    }
    debug!(
        key,
        left_rows = left.row_count(),
        right_rows = right.row_count(),
        joined_rows = joined.row_count(),
        "inner join complete"
    );
    Ok(joined)
}

/// Items with inventory, then the result with sale items, both on the JAN
/// code. Only keys present in all three sources survive.
pub fn join_sources(items: &Table, inventory: &Table, sale_items: &Table) -> Result<Table> {
    let base = inner_join(items, inventory, JAN_CODE)?;
    inner_join(&base, sale_items, JAN_CODE)
}

/// Returns a copy of `base` with the `sku_code` column appended.
///
/// `sku_code` is the concatenation of `product_code`, `attribute1_code`,
/// and `attribute2_code` with no separator. It is relied on downstream as a
/// per-row correlation key but uniqueness is not enforced here.
pub fn derive_sku_code(base: &Table) -> Result<Table> {
    let product = required_column(base, PRODUCT_CODE)?;
    let attribute1 = required_column(base, ATTRIBUTE1_CODE)?;
    let attribute2 = required_column(base, ATTRIBUTE2_CODE)?;

    let mut headers = base.headers.clone();
    headers.push(SKU_CODE.to_string());
    let mut derived = Table::new(headers);
    for row in &base.rows {
        let sku_code = format!(
            "{}{}{}",
            cell(row, product),
            cell(row, attribute1),
            cell(row, attribute2)
        );
        let mut row = row.clone();
        row.push(sku_code);
        derived.push_row(row);
    }
    Ok(derived)
}

pub(crate) fn required_column(table: &Table, name: &str) -> Result<usize> {
    table
        .column_index(name)
        .ok_or_else(|| anyhow!("column {name:?} missing from joined table"))
}

pub(crate) fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}
