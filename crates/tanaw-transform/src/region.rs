//! Region-level tables: flat column names from a two-row header.
//!
//! Region-level sources carry grade labels on one row and gender labels on
//! the row below, with a grade label written once over its gender columns:
//!
//! ```text
//! Region | K    |        | G1   |
//!        | Male | Female | Male | Female
//! ```
//!
//! becomes `Region, K Male, K Female, G1 Male, G1 Female`. Column names are
//! canonicalized later by the standardizer.

use tracing::{debug, warn};

use tanaw_ingest::normalize_header;
use tanaw_model::{ABSENT_COUNT_PLACEHOLDER, CleanError, REGION_COLUMN, ZERO_SENTINEL, column_name_eq};

use crate::frame::TextTable;

/// Title-cased gender for a `male`/`female` cell.
fn gender_label(cell: &str) -> Option<&'static str> {
    if cell.eq_ignore_ascii_case("male") {
        Some("Male")
    } else if cell.eq_ignore_ascii_case("female") {
        Some("Female")
    } else {
        None
    }
}

fn cell_at(row: &[String], idx: usize) -> String {
    row.get(idx).map(|cell| normalize_header(cell)).unwrap_or_default()
}

/// Builds one column name per position from the grade and gender rows.
///
/// `anchor_row` is the banner row above the grade row, when the header was
/// found as a block; a `Region` cell there names its column too. A column
/// with neither a grade nor a gender label is left blank.
pub fn synthesize_region_headers(
    grade_row: &[String],
    gender_row: &[String],
    anchor_row: Option<&[String]>,
) -> Vec<String> {
    let width = grade_row
        .len()
        .max(gender_row.len())
        .max(anchor_row.map_or(0, <[String]>::len));

    let mut carried: Option<String> = None;
    let mut headers = Vec::with_capacity(width);
    for idx in 0..width {
        let grade = cell_at(grade_row, idx);
        let anchor = anchor_row.map(|row| cell_at(row, idx)).unwrap_or_default();

        let is_region = column_name_eq(&grade, REGION_COLUMN)
            || (grade.is_empty() && column_name_eq(&anchor, REGION_COLUMN));
        if is_region {
            carried = None;
            headers.push(REGION_COLUMN.to_string());
            continue;
        }

        if !grade.is_empty() {
            carried = Some(grade);
        }
        let gender = gender_label(&cell_at(gender_row, idx));
        let name = match (carried.as_deref(), gender) {
            (Some(grade), Some(gender)) => format!("{grade} {gender}"),
            (Some(grade), None) => grade.to_string(),
            (None, Some(gender)) => gender.to_string(),
            (None, None) => String::new(),
        };
        headers.push(name);
    }
    headers
}

/// Cleans the data rows below a region-level header.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionLevelCleaner;

impl RegionLevelCleaner {
    /// Builds the region table from its header and the rows after the gender row.
    ///
    /// Blank rows are dropped, rows are fitted to the header width, blank
    /// headers are resolved and `-` cells become `0`. A width mismatch is
    /// logged, not fatal.
    pub fn clean(&self, headers: Vec<String>, rows: &[Vec<String>]) -> TextTable {
        let mut table = TextTable::new(headers, rows.to_vec());
        let blank = table.drop_blank_rows();
        if blank > 0 {
            debug!(rows = blank, "dropped blank region-level rows");
        }

        let mismatched = table.fit_rows();
        if mismatched > 0 {
            let error = CleanError::schema_mismatch(format!(
                "{mismatched} region-level rows differ from the header width of {}",
                table.width()
            ));
            warn!(%error, "fitting rows to the header");
        }
        let removed = table.resolve_blank_headers();
        if !removed.is_empty() {
            debug!(positions = ?removed, "dropped empty unnamed region-level columns");
        }

        for row in &mut table.rows {
            for cell in row.iter_mut() {
                let trimmed = cell.trim();
                if trimmed == ABSENT_COUNT_PLACEHOLDER {
                    *cell = ZERO_SENTINEL.to_string();
                } else if trimmed.len() != cell.len() {
                    *cell = trimmed.to_string();
                }
            }
        }
        table
    }
}
