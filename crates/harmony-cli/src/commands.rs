use anyhow::Result;
use chrono::Local;
use comfy_table::Table;

use harmony_ingest::SourcePaths;
use harmony_transform::columns::{
    INVENTORY_REQUIRED, ITEMS_REQUIRED, SALE_ITEMS_REQUIRED,
};

use crate::cli::BuildArgs;
use crate::pipeline::{BuildInput, load_sale_config, run};
use crate::summary::apply_table_style;
use crate::types::RunSummary;

/// Run the feed build pipeline from CLI arguments.
pub fn run_build(args: &BuildArgs) -> Result<RunSummary> {
    let config = load_sale_config(&args.config)?;
    let run_date = match &args.run_date {
        Some(date) => date.clone(),
        None => Local::now().format("%Y%m%d").to_string(),
    };
    let input = BuildInput {
        paths: SourcePaths {
            items: args.items.clone(),
            inventory: args.inventory.clone(),
            sale_items: args.sale_items.clone(),
        },
        config,
        output_dir: args.output_dir.clone(),
        run_date,
        dry_run: args.dry_run,
    };
    run(&input)
}

/// Print the columns each input source must provide.
pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Source", "Required columns"]);
    apply_table_style(&mut table);
    table.add_row(vec!["items (SKU master)".to_string(), ITEMS_REQUIRED.join(", ")]);
    table.add_row(vec!["inventory (MBO)".to_string(), INVENTORY_REQUIRED.join(", ")]);
    table.add_row(vec!["sale items".to_string(), SALE_ITEMS_REQUIRED.join(", ")]);
    println!("{table}");
    Ok(())
}
