//! Source ingestion for the Harmony feed builder.
//!
//! Reads the three tabular inputs (two delimited-text files and one
//! spreadsheet) into [`harmony_model::Table`] values, preserving header
//! names as they appear in each source.

pub mod csv_table;
pub mod sources;
pub mod values;
pub mod xlsx_table;

pub use csv_table::read_csv_table;
pub use sources::{
    SourceKind, SourcePaths, SourceTables, load_sources, verify_source_paths,
};
pub use values::format_numeric;
pub use xlsx_table::read_xlsx_table;
