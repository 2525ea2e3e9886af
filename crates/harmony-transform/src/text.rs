//! Row-level string transforms used by the master mapper.

use thiserror::Error;

/// Delimiter separating the brand segment from the name segments inside
/// `item_name`.
pub const NAME_DELIMITER: char = '◆';

/// Brand and product halves of a composite `item_name` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitName {
    pub brand: String,
    pub product: String,
}

/// An `item_name` value with an unexpected delimiter count.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unexpected item_name format {raw:?}: found {delimiters} '◆' delimiter(s), expected 1 or 2")]
pub struct NameFormatError {
    pub raw: String,
    pub delimiters: usize,
}

/// Splits a composite `item_name` into brand and product name.
///
/// One delimiter yields the segment after the brand; two yield the second
/// and third segments joined by a single space. Any other delimiter count is
/// a format error; the caller decides whether that aborts the run.
pub fn split_item_name(raw: &str) -> Result<SplitName, NameFormatError> {
    let segments: Vec<&str> = raw.split(NAME_DELIMITER).collect();
    match segments.as_slice() {
        [brand, product] => Ok(SplitName {
            brand: (*brand).to_string(),
            product: (*product).to_string(),
        }),
        [brand, main, sub] => Ok(SplitName {
            brand: (*brand).to_string(),
            product: format!("{main} {sub}"),
        }),
        _ => Err(NameFormatError {
            raw: raw.to_string(),
            delimiters: segments.len() - 1,
        }),
    }
}

/// Removes line breaks without inserting a replacement character.
pub fn strip_newlines(value: &str) -> String {
    value.chars().filter(|ch| !matches!(ch, '\n' | '\r')).collect()
}

/// Removes double quotes and line breaks; applied to free-text fields copied
/// into the master table.
pub fn strip_quotes_and_newlines(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !matches!(ch, '"' | '\n' | '\r'))
        .collect()
}
