use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use harmony_model::{FeedError, Table};

use crate::{read_csv_table, read_xlsx_table};

/// The three input files of one feed run.
#[derive(Debug, Clone)]
pub struct SourcePaths {
    pub items: PathBuf,
    pub inventory: PathBuf,
    pub sale_items: PathBuf,
}

/// Which input file a message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Items,
    Inventory,
    SaleItems,
}

impl SourceKind {
    /// Example filename shown when the input is missing.
    pub fn example_name(self) -> &'static str {
        match self {
            SourceKind::Items => "2023AW_SKU.csv",
            SourceKind::Inventory => "2023AW_MBO.csv",
            SourceKind::SaleItems => "0918_SALE.xlsx",
        }
    }
}

/// All three sources loaded into memory.
#[derive(Debug)]
pub struct SourceTables {
    pub items: Table,
    pub inventory: Table,
    pub sale_items: Table,
}

/// Checks that every input file exists before any of them is parsed.
pub fn verify_source_paths(paths: &SourcePaths) -> Result<(), FeedError> {
    let checks = [
        (SourceKind::Items, &paths.items),
        (SourceKind::Inventory, &paths.inventory),
        (SourceKind::SaleItems, &paths.sale_items),
    ];
    for (kind, path) in checks {
        if !path.exists() {
            return Err(FeedError::MissingInput {
                path: path.display().to_string(),
                example: kind.example_name().to_string(),
            });
        }
    }
    Ok(())
}

/// Verifies all three paths up front, then reads each source.
pub fn load_sources(paths: &SourcePaths) -> Result<SourceTables> {
    verify_source_paths(paths)?;
    let items = read_csv_table(&paths.items)?;
    let inventory = read_csv_table(&paths.inventory)?;
    let sale_items = read_xlsx_table(&paths.sale_items)?;
    debug!(
        items = items.row_count(),
        inventory = inventory.row_count(),
        sale_items = sale_items.row_count(),
        "sources loaded"
    );
    Ok(SourceTables {
        items,
        inventory,
        sale_items,
    })
}
