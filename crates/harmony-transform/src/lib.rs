//! Join-and-transform core of the Harmony feed builder.
//!
//! Validates the source schemas, inner-joins the three sources on the JAN
//! code, derives the `sku_code` correlation key, and maps the joined rows
//! into the master, stock, and sale SKU output tables.

pub mod columns;
pub mod join;
pub mod mappers;
pub mod schema;
pub mod text;

pub use join::{derive_sku_code, inner_join, join_sources};
pub use mappers::{
    MASTER_COLUMNS, SALESKU_COLUMNS, STOCK_COLUMNS, map_master, map_salesku, map_stock,
};
pub use schema::{
    validate_items, validate_join_key, validate_joined, validate_sale_items,
};
pub use text::{NameFormatError, SplitName, split_item_name};
