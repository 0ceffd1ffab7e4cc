//! Layout classification.
//!
//! Once the header is located, the table is school-level when it names both
//! a school identifier column and a school name column, and region-level
//! when it names neither. Naming exactly one of them is ambiguous and
//! rejected rather than guessed.

use tracing::debug;

use tanaw_model::{
    CleanError, Layout, RawTable, Result, SCHOOL_ID_ALIASES, SCHOOL_NAME_COLUMN, find_column,
};

use crate::csv::normalize_header;
use crate::header::HeaderRow;

/// Header information for a classified table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableHeader {
    /// One header row of column names; data starts on the next row.
    School { header_row: usize, columns: Vec<String> },
    /// Grade labels over gender labels; data starts after the gender row.
    Region {
        anchor: Option<usize>,
        grade_row: usize,
        gender_row: usize,
    },
}

impl TableHeader {
    pub fn layout(&self) -> Layout {
        match self {
            Self::School { .. } => Layout::SchoolLevel,
            Self::Region { .. } => Layout::RegionLevel,
        }
    }

    /// Index of the last header row; data rows follow it.
    pub fn last_row(&self) -> usize {
        match self {
            Self::School { header_row, .. } => *header_row,
            Self::Region { gender_row, .. } => *gender_row,
        }
    }
}

/// Normalized column names of a header row.
pub fn header_columns(table: &RawTable, row: usize) -> Vec<String> {
    table
        .row(row)
        .unwrap_or(&[])
        .iter()
        .map(|cell| normalize_header(cell))
        .collect()
}

/// Classifies a located header as school-level or region-level.
pub fn classify_layout(table: &RawTable, header: HeaderRow) -> Result<TableHeader> {
    let classified = match header {
        HeaderRow::Block {
            anchor,
            grade_row,
            gender_row,
        } => TableHeader::Region {
            anchor: Some(anchor),
            grade_row,
            gender_row,
        },
        HeaderRow::Single(row) => {
            let columns = header_columns(table, row);
            let school_id = find_column(&columns, SCHOOL_ID_ALIASES);
            let school_name = find_column(&columns, &[SCHOOL_NAME_COLUMN]);
            match (school_id, school_name) {
                (Some(_), Some(_)) => TableHeader::School {
                    header_row: row,
                    columns,
                },
                (None, None) => TableHeader::Region {
                    anchor: None,
                    grade_row: row,
                    gender_row: row + 1,
                },
                (Some(_), None) => {
                    return Err(CleanError::schema_mismatch(format!(
                        "header row {row} has a school identifier column but no '{SCHOOL_NAME_COLUMN}' column"
                    )));
                }
                (None, Some(_)) => {
                    return Err(CleanError::schema_mismatch(format!(
                        "header row {row} has a '{SCHOOL_NAME_COLUMN}' column but no school identifier column"
                    )));
                }
            }
        }
    };
    debug!(layout = %classified.layout(), "classified table layout");
    Ok(classified)
}
