use serde::Deserialize;

use crate::error::FeedError;

/// Per-run sale settings, reviewed before every invocation.
///
/// Loaded from a TOML file and passed by value into the mappers so they stay
/// pure; nothing in the pipeline reads configuration from ambient state.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SaleConfig {
    /// Vendor identifier stamped into every output row.
    pub vendor_code: String,
    /// Campaign sale identifier used by the sale SKU table.
    pub cp_sale_id: i64,
    /// Sale window start, `YYYYMMDD`.
    pub sale_start_date: String,
    /// Sale window end, `YYYYMMDD`.
    pub sale_end_date: String,
}

impl SaleConfig {
    /// Checks the sale window fields are 8-digit `YYYYMMDD` strings and the
    /// vendor code is non-empty.
    pub fn validate(&self) -> Result<(), FeedError> {
        if self.vendor_code.trim().is_empty() {
            return Err(FeedError::schema("vendor_code must not be empty"));
        }
        for (field, value) in [
            ("sale_start_date", &self.sale_start_date),
            ("sale_end_date", &self.sale_end_date),
        ] {
            if !is_yyyymmdd(value) {
                return Err(FeedError::schema(format!(
                    "{field} must be an 8-digit YYYYMMDD string, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}

/// True when `value` is exactly eight ASCII digits.
pub fn is_yyyymmdd(value: &str) -> bool {
    value.len() == 8 && value.bytes().all(|byte| byte.is_ascii_digit())
}
