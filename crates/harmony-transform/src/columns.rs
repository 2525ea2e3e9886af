//! Canonical column names of the three source files.

/// Join key present in every source.
pub const JAN_CODE: &str = "JAN code";

/// First component of the derived `sku_code`.
pub const PRODUCT_CODE: &str = "product_code";
/// Second component of the derived `sku_code`.
pub const ATTRIBUTE1_CODE: &str = "attribute1_code";
/// Third component of the derived `sku_code`.
pub const ATTRIBUTE2_CODE: &str = "attribute2_code";

pub const BRAND_CODE: &str = "brand_code";
/// Composite `<brand>◆<name>` field the master mapper splits.
pub const ITEM_NAME: &str = "item_name";
/// Shop catalog number copied into the master `product_code` column.
pub const SHOP_ITEM_CODE: &str = "shop_item_code";
pub const ITEM_NUMBER: &str = "item_number";
pub const ITEM_DESCRIPTION: &str = "item_description";
pub const COLOR_AXIS_CODE: &str = "color_axis_code";
pub const COLOR_AXIS_NAME: &str = "color_axis_name";
pub const SIZE_AXIS_CODE: &str = "size_axis_code";
pub const SIZE_AXIS_NAME: &str = "size_axis_name";
pub const MATERIAL: &str = "material";
pub const COUNTRY_OF_ORIGIN: &str = "country_of_origin";
pub const LIST_PRICE: &str = "list_price";

/// Available-to-promise quantity in the sale items source.
pub const ATP_QUANTITY: &str = "atp_quantity";
pub const FLASHSALE_PRICE: &str = "flashsale_price";

/// Derived correlation key appended after the join.
pub const SKU_CODE: &str = "sku_code";

/// Items columns the mappers consume.
pub const ITEMS_REQUIRED: [&str; 16] = [
    JAN_CODE,
    PRODUCT_CODE,
    ATTRIBUTE1_CODE,
    ATTRIBUTE2_CODE,
    BRAND_CODE,
    ITEM_NAME,
    SHOP_ITEM_CODE,
    ITEM_NUMBER,
    ITEM_DESCRIPTION,
    COLOR_AXIS_CODE,
    COLOR_AXIS_NAME,
    SIZE_AXIS_CODE,
    SIZE_AXIS_NAME,
    MATERIAL,
    COUNTRY_OF_ORIGIN,
    LIST_PRICE,
];

/// Inventory columns the pipeline consumes.
pub const INVENTORY_REQUIRED: [&str; 1] = [JAN_CODE];

/// Sale items columns the pipeline consumes.
pub const SALE_ITEMS_REQUIRED: [&str; 3] = [JAN_CODE, ATP_QUANTITY, FLASHSALE_PRICE];
