//! Feed build pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: check all three input paths, then read the sources
//! 2. **Validate**: required source columns
//! 3. **Join**: two-stage inner join, joined-schema check, `sku_code`
//! 4. **Map**: master, stock, and sale SKU tables
//! 5. **Write**: TSV serialization, only after every mapper succeeded
//!
//! Each stage consumes the previous stage's tables and produces new ones.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use harmony_ingest::{SourcePaths, SourceTables, load_sources};
use harmony_model::{SaleConfig, Table};
use harmony_output::{OutputKind, output_path, write_tsv};
use harmony_transform::{
    derive_sku_code, join_sources, map_master, map_salesku, map_stock, validate_items,
    validate_join_key, validate_joined, validate_sale_items,
};

use crate::types::{OutputSummary, RunSummary, SourceRowCounts};

/// Everything a feed build needs beyond the input files themselves.
pub struct BuildInput {
    pub paths: SourcePaths,
    pub config: SaleConfig,
    pub output_dir: PathBuf,
    /// 8-digit date stamped into the output file names.
    pub run_date: String,
    pub dry_run: bool,
}

/// Loads and validates the per-run sale configuration from a TOML file.
pub fn load_sale_config(path: &Path) -> Result<SaleConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let config: SaleConfig =
        toml::from_str(&raw).with_context(|| format!("parse config: {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Runs the whole pipeline and returns the run summary.
pub fn run(input: &BuildInput) -> Result<RunSummary> {
    let run_span = info_span!("build", run_date = %input.run_date);
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    // Stage 1: ingest
    let ingest_start = Instant::now();
    let SourceTables {
        items,
        inventory,
        sale_items,
    } = info_span!("ingest").in_scope(|| load_sources(&input.paths))?;
    let source_rows = SourceRowCounts {
        items: items.row_count(),
        inventory: inventory.row_count(),
        sale_items: sale_items.row_count(),
    };
    debug!(
        items = source_rows.items,
        inventory = source_rows.inventory,
        sale_items = source_rows.sale_items,
        duration_ms = ingest_start.elapsed().as_millis() as u64,
        "ingest complete"
    );

    // Stage 2: validate source schemas
    validate_items(&items)?;
    validate_join_key(&items, &inventory, &sale_items)?;
    validate_sale_items(&sale_items)?;

    // Stage 3: join and derive the correlation key
    let join_start = Instant::now();
    let base = info_span!("join").in_scope(|| -> Result<Table> {
        let joined = join_sources(&items, &inventory, &sale_items)?;
        validate_joined(&joined)?;
        derive_sku_code(&joined)
    })?;
    debug!(
        rows = base.row_count(),
        duration_ms = join_start.elapsed().as_millis() as u64,
        "join complete"
    );

    // Stage 4: map the output tables
    let map_start = Instant::now();
    let tables = info_span!("map").in_scope(|| -> Result<_> {
        let master = map_master(&base, &input.config).context("map master table")?;
        let stock = map_stock(&base, &input.config).context("map stock table")?;
        let salesku = map_salesku(&base, &input.config).context("map sale sku table")?;
        Ok([
            (OutputKind::Master, master),
            (OutputKind::Stock, stock),
            (OutputKind::SaleSku, salesku),
        ])
    })?;
    debug!(
        duration_ms = map_start.elapsed().as_millis() as u64,
        "mapping complete"
    );

    // Stage 5: write
    let mut outputs = Vec::with_capacity(tables.len());
    for (kind, table) in &tables {
        let path = if input.dry_run {
            None
        } else {
            let path = output_path(&input.output_dir, *kind, &input.run_date);
            write_tsv(table, &path).with_context(|| format!("write {}", path.display()))?;
            Some(path)
        };
        outputs.push(OutputSummary {
            kind: *kind,
            rows: table.row_count(),
            path,
        });
    }

    info!(
        joined_rows = base.row_count(),
        dry_run = input.dry_run,
        duration_ms = run_start.elapsed().as_millis() as u64,
        "build complete"
    );
    Ok(RunSummary {
        run_date: input.run_date.clone(),
        output_dir: input.output_dir.clone(),
        source_rows,
        joined_rows: base.row_count(),
        outputs,
        dry_run: input.dry_run,
    })
}
