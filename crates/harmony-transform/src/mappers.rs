//! The three output-table mappers.
//!
//! Each mapper is a pure function from the joined table (with `sku_code`
//! already derived) and the run configuration to a new output table with a
//! fixed column order. The column order here is exactly the serialized
//! order.

use anyhow::Result;
use tracing::debug;

use harmony_model::{FeedError, RowBuilder, SaleConfig, Table};

use crate::columns::{
    ATP_QUANTITY, BRAND_CODE, COLOR_AXIS_CODE, COLOR_AXIS_NAME, COUNTRY_OF_ORIGIN,
    FLASHSALE_PRICE, ITEM_DESCRIPTION, ITEM_NAME, ITEM_NUMBER, JAN_CODE, LIST_PRICE, MATERIAL,
    SHOP_ITEM_CODE, SIZE_AXIS_CODE, SIZE_AXIS_NAME, SKU_CODE,
};
use crate::join::{cell, required_column};
use crate::text::{split_item_name, strip_newlines, strip_quotes_and_newlines};

/// Master table columns, in serialization order.
pub const MASTER_COLUMNS: [&str; 46] = [
    "vendor_code",
    "sku_code",
    "brand_code",
    "brand_name",
    "sub_brand_code",
    "sub_brand_name",
    "vendor_item_code",
    "sub_item_code",
    "vendor_item_name",
    "product_code",
    "product_model_number",
    "product_name",
    "planning_year",
    "season_code",
    "sub_season_code",
    "gender_code",
    "long_comment",
    "normal_comment",
    "short_comment",
    "catch_phrase",
    "search_keyword",
    "accessory",
    "main_color_code",
    "color_code",
    "color_name",
    "size_code",
    "size_name",
    "material_name",
    "producer_country",
    "laundry_symbol",
    "jancode",
    "catalog_price",
    "sales_tax_type",
    "fashion_model_info",
    "sizing_name",
    "sizing_value",
    "sizing_unit",
    "sizing_info",
    "explanatory_notes",
    "demerit_name",
    "demerit_tag",
    "sales_type",
    "sales_start_date",
    "arrival_date",
    "sales_end_date",
    "deleted",
];

/// Stock table columns, in serialization order.
pub const STOCK_COLUMNS: [&str; 4] = ["vendor_code", "sku_code", "sales_type", "quantity"];

/// Sale SKU table columns, in serialization order.
pub const SALESKU_COLUMNS: [&str; 6] = [
    "cp_sale_id",
    "sale_start_date",
    "vendor_code",
    "sku_code",
    "sale_price",
    "deleted",
];

fn header_vec(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|column| (*column).to_string()).collect()
}

/// Maps the joined table to the product master table.
///
/// Populates the required columns plus the nullable ones the sources carry;
/// every other master column stays empty.
pub fn map_master(base: &Table, config: &SaleConfig) -> Result<Table> {
    let jan = required_column(base, JAN_CODE)?;
    let sku = required_column(base, SKU_CODE)?;
    let brand_code = required_column(base, BRAND_CODE)?;
    let item_name = required_column(base, ITEM_NAME)?;
    let shop_item = required_column(base, SHOP_ITEM_CODE)?;
    let item_number = required_column(base, ITEM_NUMBER)?;
    let description = required_column(base, ITEM_DESCRIPTION)?;
    let color_code = required_column(base, COLOR_AXIS_CODE)?;
    let color_name = required_column(base, COLOR_AXIS_NAME)?;
    let size_code = required_column(base, SIZE_AXIS_CODE)?;
    let size_name = required_column(base, SIZE_AXIS_NAME)?;
    let material = required_column(base, MATERIAL)?;
    let country = required_column(base, COUNTRY_OF_ORIGIN)?;
    let list_price = required_column(base, LIST_PRICE)?;

    let mut master = Table::new(header_vec(&MASTER_COLUMNS));
    for (index, row) in base.rows.iter().enumerate() {
        let name = split_item_name(cell(row, item_name)).map_err(|error| {
            FeedError::format(format!("row {}: {error}", index + 1))
        })?;
        let long_comment = strip_newlines(cell(row, description));

        let mut out = RowBuilder::new(&MASTER_COLUMNS);
        out.set("vendor_code", config.vendor_code.clone());
        out.set("sku_code", cell(row, sku));
        out.set("brand_code", cell(row, brand_code));
        out.set("brand_name", name.brand.clone());
        // Sub-brand duplicates the brand; the platform has no separate value.
        out.set("sub_brand_code", cell(row, brand_code));
        out.set("sub_brand_name", name.brand);
        out.set("jancode", cell(row, jan));
        out.set("product_code", cell(row, shop_item));
        out.set("product_model_number", cell(row, item_number));
        out.set("product_name", name.product);
        out.set("long_comment", long_comment.clone());
        out.set("normal_comment", long_comment);
        out.set("main_color_code", cell(row, color_code));
        out.set("color_code", cell(row, color_code));
        out.set("color_name", cell(row, color_name));
        out.set("size_code", cell(row, size_code));
        out.set("size_name", cell(row, size_name));
        out.set("material_name", strip_quotes_and_newlines(cell(row, material)));
        out.set("producer_country", cell(row, country));
        out.set("catalog_price", cell(row, list_price));
        out.set("planning_year", "2023");
        out.set("season_code", "01");
        out.set("gender_code", "2");
        // 0: other values trip a known pricing bug in the stock sync.
        out.set("sales_tax_type", "0");
        out.set("sales_type", "1");
        out.set("sales_start_date", config.sale_start_date.clone());
        out.set("sales_end_date", config.sale_end_date.clone());
        out.set("deleted", "0");
        master.push_row(out.into_values());
    }
    debug!(rows = master.row_count(), "master table mapped");
    Ok(master)
}

/// Maps the joined table to the stock quantity table.
pub fn map_stock(base: &Table, config: &SaleConfig) -> Result<Table> {
    let sku = required_column(base, SKU_CODE)?;
    let quantity = required_column(base, ATP_QUANTITY)?;

    let mut stock = Table::new(header_vec(&STOCK_COLUMNS));
    for row in &base.rows {
        stock.push_row(vec![
            config.vendor_code.clone(),
            cell(row, sku).to_string(),
            "1".to_string(),
            cell(row, quantity).to_string(),
        ]);
    }
    debug!(rows = stock.row_count(), "stock table mapped");
    Ok(stock)
}

/// Maps the joined table to the sale SKU pricing table.
pub fn map_salesku(base: &Table, config: &SaleConfig) -> Result<Table> {
    let sku = required_column(base, SKU_CODE)?;
    let sale_price = required_column(base, FLASHSALE_PRICE)?;

    let mut salesku = Table::new(header_vec(&SALESKU_COLUMNS));
    for row in &base.rows {
        salesku.push_row(vec![
            config.cp_sale_id.to_string(),
            config.sale_start_date.clone(),
            config.vendor_code.clone(),
            cell(row, sku).to_string(),
            cell(row, sale_price).to_string(),
            "0".to_string(),
        ]);
    }
    debug!(rows = salesku.row_count(), "sale sku table mapped");
    Ok(salesku)
}
