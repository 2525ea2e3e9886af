//! CLI argument definitions for the Harmony feed builder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use harmony_model::is_yyyymmdd;

#[derive(Parser)]
#[command(
    name = "harmony-feed",
    version,
    about = "Harmony feed builder - convert product data sources into Harmony TSV feeds",
    long_about = "Join the SKU master, inventory, and sale item sources on the JAN code\n\
                  and emit the Harmony master, stock, and sale SKU feed tables."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the three Harmony feed tables from the input sources.
    Build(BuildArgs),

    /// List the columns each input source must provide.
    Columns,
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Path to the SKU master CSV (e.g. 2023AW_SKU.csv).
    #[arg(long = "items", value_name = "CSV")]
    pub items: PathBuf,

    /// Path to the inventory CSV (e.g. 2023AW_MBO.csv).
    #[arg(long = "inventory", value_name = "CSV")]
    pub inventory: PathBuf,

    /// Path to the sale items spreadsheet (e.g. 0918_SALE.xlsx).
    #[arg(long = "sale-items", value_name = "XLSX")]
    pub sale_items: PathBuf,

    /// Path to the per-run sale configuration TOML.
    #[arg(long = "config", value_name = "TOML")]
    pub config: PathBuf,

    /// Output directory for the generated feed files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Run date stamped into the output file names (default: today).
    #[arg(long = "run-date", value_name = "YYYYMMDD", value_parser = parse_run_date)]
    pub run_date: Option<String>,

    /// Run the full pipeline and report counts without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

fn parse_run_date(value: &str) -> Result<String, String> {
    if is_yyyymmdd(value) {
        Ok(value.to_string())
    } else {
        Err(format!("expected an 8-digit YYYYMMDD date, got {value:?}"))
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
