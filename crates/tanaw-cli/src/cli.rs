//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tanaw",
    version,
    about = "Clean and summarize school enrollment spreadsheets",
    long_about = "Clean raw school enrollment spreadsheets into one tidy table.\n\n\
                  Finds the real header under banner rows, handles school-level and\n\
                  region-level layouts, expands school name abbreviations, drops rows\n\
                  with impossible counts and standardizes column names."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Clean a raw enrollment CSV and write a new cleaned file.
    Clean(CleanArgs),

    /// Print headline figures for a cleaned file.
    Summary(SummaryArgs),

    /// Print the rows of a cleaned file as JSON lines.
    Records(RecordsArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Raw enrollment spreadsheet exported as CSV.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Directory for cleaned files (default: cleaned_files).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Largest enrollment count accepted for one grade and gender.
    #[arg(long = "ceiling", value_name = "N")]
    pub ceiling: Option<f64>,

    /// TOML file with cleaning options; flags override its values.
    #[arg(long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Clean and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct SummaryArgs {
    /// Cleaned enrollment CSV.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Print the summary as JSON.
    #[arg(long = "json")]
    pub json: bool,

    /// Number of year levels reported (default: 13, Kindergarten to Grade 12).
    #[arg(long = "year-levels", value_name = "N")]
    pub year_levels: Option<u32>,
}

#[derive(Parser)]
pub struct RecordsArgs {
    /// Cleaned enrollment CSV.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Print at most this many records.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,
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
