//! Output serialization for the three Harmony feed tables.

pub mod naming;
pub mod tsv;

pub use naming::{FEED_PREFIX, OutputKind, output_filename, output_path};
pub use tsv::write_tsv;
