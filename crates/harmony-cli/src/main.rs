//! Harmony feed builder CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use harmony_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use harmony_cli::commands::{run_build, run_columns};
use harmony_cli::logging::{LogConfig, LogFormat, init_logging};
use harmony_cli::summary::print_summary;
use harmony_model::{EXIT_RUNTIME, EXIT_SUCCESS, FeedError};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_RUNTIME);
    }
    let exit_code = match cli.command {
        Command::Build(args) => match run_build(&args) {
            Ok(summary) => {
                print_summary(&summary);
                EXIT_SUCCESS
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                error_exit_code(&error)
            }
        },
        Command::Columns => match run_columns() {
            Ok(()) => EXIT_SUCCESS,
            Err(error) => {
                eprintln!("error: {error:#}");
                error_exit_code(&error)
            }
        },
    };
    std::process::exit(exit_code);
}

/// Maps classified feed errors to their dedicated exit codes; anything else
/// is a generic runtime failure.
fn error_exit_code(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<FeedError>()
        .map_or(EXIT_RUNTIME, FeedError::exit_code)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
