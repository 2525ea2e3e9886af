//! Required-column checks for the source and joined tables.
//!
//! Each rule is checked and reported independently; any failure is fatal for
//! the run and no output is produced.

use harmony_model::{FeedError, Table};

use crate::columns::{
    ATP_QUANTITY, ATTRIBUTE1_CODE, ATTRIBUTE2_CODE, JAN_CODE, PRODUCT_CODE,
};

/// The items source must carry both SKU attribute columns.
pub fn validate_items(items: &Table) -> Result<(), FeedError> {
    let missing = missing_columns(items, &[ATTRIBUTE1_CODE, ATTRIBUTE2_CODE]);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(FeedError::schema(format!(
            "items file is missing column(s) {}",
            quote_list(&missing)
        )))
    }
}

/// Every source must carry the join key column.
pub fn validate_join_key(
    items: &Table,
    inventory: &Table,
    sale_items: &Table,
) -> Result<(), FeedError> {
    let mut lacking = Vec::new();
    for (name, table) in [
        ("items", items),
        ("inventory", inventory),
        ("sale items", sale_items),
    ] {
        if !table.has_column(JAN_CODE) {
            lacking.push(name);
        }
    }
    if lacking.is_empty() {
        Ok(())
    } else {
        Err(FeedError::schema(format!(
            "column {JAN_CODE:?} is missing from: {}",
            lacking.join(", ")
        )))
    }
}

/// The sale items source must carry the available-to-promise quantity.
pub fn validate_sale_items(sale_items: &Table) -> Result<(), FeedError> {
    if sale_items.has_column(ATP_QUANTITY) {
        return Ok(());
    }
    Err(FeedError::schema(format!(
        "sale items file is missing column {ATP_QUANTITY:?}; the file is often \
         shared with a dated header such as \"atp_quantity (as of 9/1)\", \
         rename that header to {ATP_QUANTITY:?}"
    )))
}

/// The joined table must still expose the `sku_code` components.
///
/// Guards against the join suffixing one of them away when a source reuses
/// the column name.
pub fn validate_joined(base: &Table) -> Result<(), FeedError> {
    let missing = missing_columns(base, &[PRODUCT_CODE, ATTRIBUTE1_CODE, ATTRIBUTE2_CODE]);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(FeedError::schema(format!(
            "joined table is missing column(s) {}; check for duplicate column \
             names across the source files",
            quote_list(&missing)
        )))
    }
}

fn missing_columns<'a>(table: &Table, required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|name| !table.has_column(name))
        .collect()
}

fn quote_list(names: &[&str]) -> String {
    names
        .iter()
        .map(|name| format!("{name:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}
