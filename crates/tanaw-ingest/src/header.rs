//! Header row location.
//!
//! Source spreadsheets carry a variable number of banner and title rows
//! above the real column headers. The header is the first row that names a
//! `Region` column and at least one grade-level column. Region-level files
//! sometimes put `Region` on a banner row of its own with the grade labels
//! underneath; a looser second scan picks those up as a header block.

use tracing::debug;

use tanaw_model::{CleanError, RawTable, Result};

/// Where the column headers of a raw table live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderRow {
    /// A single row holding column names (grade labels for region-level
    /// tables, with the gender row directly below).
    Single(usize),
    /// A `Region` anchor row with the grade row and gender row below it.
    Block {
        anchor: usize,
        grade_row: usize,
        gender_row: usize,
    },
}

impl HeaderRow {
    /// Index of the first row that belongs to the header.
    pub fn first_row(self) -> usize {
        match self {
            Self::Single(row) => row,
            Self::Block { anchor, .. } => anchor,
        }
    }
}

/// Returns true for a cell naming the region column.
pub fn is_region_marker(cell: &str) -> bool {
    cell.trim().eq_ignore_ascii_case("region")
}

/// Returns true for a cell naming a grade level.
///
/// Accepts `Kindergarten`/`Kinder`/`K`, `G1`..`G12` and `Grade <n>`, each
/// optionally followed by more words (`K Male`, `G11 (STEM) Female`).
pub fn is_grade_marker(cell: &str) -> bool {
    let lower = cell.trim().to_ascii_lowercase();
    let mut words = lower.split_whitespace();
    let Some(first) = words.next() else {
        return false;
    };
    if matches!(first, "k" | "kinder" | "kindergarten") {
        return true;
    }
    if first == "grade" {
        return words
            .next()
            .is_some_and(|next| next.starts_with(|ch: char| ch.is_ascii_digit()));
    }
    first
        .strip_prefix('g')
        .and_then(|digits| digits.parse::<u8>().ok())
        .is_some_and(|grade| (1..=12).contains(&grade))
}

fn has_region_marker(row: &[String]) -> bool {
    row.iter().any(|cell| is_region_marker(cell))
}

fn has_grade_marker(row: &[String]) -> bool {
    row.iter().any(|cell| is_grade_marker(cell))
}

/// Finds the first row containing both a region marker and a grade marker.
pub fn find_header_row(table: &RawTable) -> Option<usize> {
    table
        .rows
        .iter()
        .position(|row| has_region_marker(row) && has_grade_marker(row))
}

/// Finds a `Region` anchor row whose next row holds grade labels.
pub fn find_region_anchor(table: &RawTable) -> Option<usize> {
    table.rows.iter().enumerate().find_map(|(idx, row)| {
        let next = table.row(idx + 1)?;
        (has_region_marker(row) && has_grade_marker(next)).then_some(idx)
    })
}

/// Locates the header of a raw enrollment table.
///
/// First match wins. Fails with [`CleanError::HeaderNotFound`] when neither
/// a header row nor a region header block exists.
pub fn locate_header(table: &RawTable) -> Result<HeaderRow> {
    if let Some(row) = find_header_row(table) {
        debug!(header_row = row, "located header row");
        return Ok(HeaderRow::Single(row));
    }
    if let Some(anchor) = find_region_anchor(table) {
        debug!(anchor, "located region header block");
        return Ok(HeaderRow::Block {
            anchor,
            grade_row: anchor + 1,
            gender_row: anchor + 2,
        });
    }
    Err(CleanError::HeaderNotFound {
        rows_scanned: table.len(),
    })
}
