use std::path::PathBuf;

use harmony_output::OutputKind;

/// Result of one feed build run.
#[derive(Debug)]
pub struct RunSummary {
    pub run_date: String,
    pub output_dir: PathBuf,
    pub source_rows: SourceRowCounts,
    /// Rows surviving the double inner join; every output table has exactly
    /// this many rows.
    pub joined_rows: usize,
    pub outputs: Vec<OutputSummary>,
    pub dry_run: bool,
}

/// Row counts of the three sources as read.
#[derive(Debug, Clone, Copy)]
pub struct SourceRowCounts {
    pub items: usize,
    pub inventory: usize,
    pub sale_items: usize,
}

/// One generated feed table.
#[derive(Debug)]
pub struct OutputSummary {
    pub kind: OutputKind,
    pub rows: usize,
    /// Absent on dry runs.
    pub path: Option<PathBuf>,
}
