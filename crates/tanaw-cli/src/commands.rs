//! Subcommand implementations.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tanaw_model::{CleanOutcome, CleaningOptions};
use tanaw_report::{EnrollmentSummary, Record, read_records, summarize_file};
use tanaw_transform::{clean_file, clean_path};

use crate::cli::{CleanArgs, RecordsArgs, SummaryArgs};
use crate::config::{apply_overrides, load_options};

/// Result of the `clean` subcommand.
#[derive(Debug, Clone)]
pub struct CleanReport {
    pub input: PathBuf,
    pub outcome: CleanOutcome,
    pub dry_run: bool,
}

/// Resolves options for `clean` from the config file and flags.
pub fn clean_options(args: &CleanArgs) -> Result<CleaningOptions> {
    let options = load_options(args.config.as_deref())?;
    apply_overrides(options, args.output_dir.as_ref(), args.ceiling)
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanReport> {
    let span = info_span!("clean", input = %args.input.display(), dry_run = args.dry_run);
    let _guard = span.enter();
    let start = Instant::now();

    let options = clean_options(args)?;
    let outcome = if args.dry_run {
        clean_path(&args.input, &options)
            .map(|cleaned| cleaned.outcome(None))
            .with_context(|| format!("clean {}", args.input.display()))?
    } else {
        clean_file(&args.input, &options)
            .with_context(|| format!("clean {}", args.input.display()))?
    };

    info!(
        layout = %outcome.layout,
        rows_retained = outcome.rows_retained,
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    Ok(CleanReport {
        input: args.input.clone(),
        outcome,
        dry_run: args.dry_run,
    })
}

pub fn run_summary(args: &SummaryArgs) -> Result<EnrollmentSummary> {
    let year_levels = args
        .year_levels
        .unwrap_or(CleaningOptions::default().year_levels);
    summarize_file(&args.input, year_levels)
        .with_context(|| format!("summarize {}", args.input.display()))
}

pub fn run_records(args: &RecordsArgs) -> Result<Vec<Record>> {
    let mut records =
        read_records(&args.input).with_context(|| format!("read {}", args.input.display()))?;
    if let Some(limit) = args.limit {
        records.truncate(limit);
    }
    Ok(records)
}
