//! Layout-specific cleaning, selected by the classifier.

use tracing::debug;

use tanaw_ingest::TableHeader;
use tanaw_model::{CleaningOptions, Layout, RawTable, Result};

use crate::frame::TextTable;
use crate::region::{RegionLevelCleaner, synthesize_region_headers};
use crate::rules::CleaningRules;
use crate::school::SchoolLevelCleaner;

/// Output of a cleaning strategy, before column standardization.
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    pub table: TextTable,
    pub rows_read: usize,
    pub rows_dropped: usize,
}

/// A layout's cleaner together with the header it cleans under.
#[derive(Debug, Clone)]
pub enum CleaningStrategy {
    School {
        cleaner: SchoolLevelCleaner,
        columns: Vec<String>,
        last_header_row: usize,
    },
    /// Column names are synthesized from the grade and gender rows up front.
    Region {
        cleaner: RegionLevelCleaner,
        headers: Vec<String>,
        last_header_row: usize,
    },
}

impl CleaningStrategy {
    /// Picks the cleaner for a classified header.
    pub fn select(raw: &RawTable, header: TableHeader, options: &CleaningOptions) -> Self {
        let last_header_row = header.last_row();
        match header {
            TableHeader::School { columns, .. } => Self::School {
                cleaner: SchoolLevelCleaner::new(options.enrollment_ceiling),
                columns,
                last_header_row,
            },
            TableHeader::Region {
                anchor,
                grade_row,
                gender_row,
            } => {
                let headers = synthesize_region_headers(
                    raw.row(grade_row).unwrap_or(&[]),
                    raw.row(gender_row).unwrap_or(&[]),
                    anchor.and_then(|row| raw.row(row)),
                );
                debug!(columns = ?headers, "synthesized region-level header");
                Self::Region {
                    cleaner: RegionLevelCleaner,
                    headers,
                    last_header_row,
                }
            }
        }
    }

    pub fn layout(&self) -> Layout {
        match self {
            Self::School { .. } => Layout::SchoolLevel,
            Self::Region { .. } => Layout::RegionLevel,
        }
    }

    /// Runs the layout's normalizer over the rows below the header.
    pub fn clean(&self, raw: &RawTable, rules: &CleaningRules) -> Result<NormalizedTable> {
        match self {
            Self::School {
                cleaner,
                columns,
                last_header_row,
            } => {
                let cleaned = cleaner.clean(
                    columns.clone(),
                    raw.rows_after(*last_header_row),
                    &rules.school_text,
                )?;
                Ok(NormalizedTable {
                    table: cleaned.table,
                    rows_read: cleaned.rows_read,
                    rows_dropped: cleaned.rows_dropped,
                })
            }
            Self::Region {
                cleaner,
                headers,
                last_header_row,
            } => {
                let table = cleaner.clean(headers.clone(), raw.rows_after(*last_header_row));
                Ok(NormalizedTable {
                    rows_read: table.height(),
                    rows_dropped: 0,
                    table,
                })
            }
        }
    }
}
