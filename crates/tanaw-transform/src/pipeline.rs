//! End-to-end cleaning: locate, classify, normalize, filter, standardize, write.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, info_span};

use tanaw_ingest::{classify_layout, locate_header, read_raw_table, validate_csv_extension};
use tanaw_model::{CleanOutcome, CleaningOptions, RawTable, Result};

use crate::frame::{CleanedTable, TextTable, build_frame};
use crate::output::write_cleaned_frame;
use crate::rules::CleaningRules;
use crate::standardize::standardize_columns;
use crate::strategy::CleaningStrategy;

/// Cleans a raw table in memory.
///
/// Fails with `HeaderNotFound` when no header can be located and with
/// `SchemaMismatch` when a school-level table lacks its required columns or
/// the layout is ambiguous.
pub fn clean_table(
    raw: &RawTable,
    options: &CleaningOptions,
    rules: &CleaningRules,
) -> Result<CleanedTable> {
    let start = Instant::now();
    let header = info_span!("locate_header").in_scope(|| locate_header(raw))?;
    let table_header = classify_layout(raw, header)?;
    let strategy = CleaningStrategy::select(raw, table_header, options);
    let layout = strategy.layout();
    info!(
        %layout,
        header_row = header.first_row(),
        duration_ms = start.elapsed().as_millis(),
        "header located"
    );

    let normalized = info_span!("normalize", %layout).in_scope(|| -> Result<_> {
        let start = Instant::now();
        let normalized = strategy.clean(raw, rules)?;
        debug!(
            rows_read = normalized.rows_read,
            rows_dropped = normalized.rows_dropped,
            duration_ms = start.elapsed().as_millis(),
            "normalize complete"
        );
        Ok(normalized)
    })?;

    let frame = info_span!("standardize").in_scope(|| {
        let headers = standardize_columns(&normalized.table.headers, &rules.column_names);
        build_frame(&TextTable {
            headers,
            rows: normalized.table.rows,
        })
    })?;

    info!(
        %layout,
        rows_read = normalized.rows_read,
        rows_retained = frame.height(),
        rows_dropped = normalized.rows_dropped,
        columns = frame.width(),
        duration_ms = start.elapsed().as_millis(),
        "cleaning complete"
    );
    Ok(CleanedTable {
        layout,
        frame,
        rows_read: normalized.rows_read,
        rows_dropped: normalized.rows_dropped,
    })
}

/// Validates and reads `path`, then cleans it without writing anything.
pub fn clean_path(path: &Path, options: &CleaningOptions) -> Result<CleanedTable> {
    validate_csv_extension(path)?;
    let raw = info_span!("read", path = %path.display()).in_scope(|| -> Result<RawTable> {
        let start = Instant::now();
        let raw = read_raw_table(path)?;
        info!(
            rows = raw.len(),
            duration_ms = start.elapsed().as_millis(),
            "read raw table"
        );
        Ok(raw)
    })?;
    let rules = CleaningRules::standard()?;
    clean_table(&raw, options, &rules)
}

/// Cleans the CSV file at `path` and writes the result under
/// `options.output_dir`.
///
/// Nothing is written unless every stage succeeds.
pub fn clean_file(path: &Path, options: &CleaningOptions) -> Result<CleanOutcome> {
    let span = info_span!("clean_file", path = %path.display());
    let _guard = span.enter();

    let mut cleaned = clean_path(path, options)?;
    let output_path = info_span!("write").in_scope(|| {
        write_cleaned_frame(&mut cleaned.frame, &options.output_dir)
    })?;
    Ok(cleaned.outcome(Some(output_path)))
}
