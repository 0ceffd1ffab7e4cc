//! Enrollment cleaner CLI.

use std::io::{self, IsTerminal, Write};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use tanaw_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use tanaw_cli::commands::{run_clean, run_records, run_summary};
use tanaw_cli::logging::{LogConfig, LogFormat, init_logging};

mod summary;

use crate::summary::{print_clean_report, print_enrollment_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match cli.command {
        Command::Clean(args) => run_clean(&args).map(|report| print_clean_report(&report)),
        Command::Summary(args) => run_summary(&args).and_then(|summary| {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_enrollment_summary(&summary);
            }
            Ok(())
        }),
        Command::Records(args) => run_records(&args).and_then(|records| {
            let mut out = io::stdout().lock();
            for record in &records {
                serde_json::to_writer(&mut out, record)?;
                writeln!(out)?;
            }
            Ok(())
        }),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
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
