//! School-level tables: one header row, one row per school.

use tracing::{debug, info, warn};

use tanaw_model::{CleanError, PLACEHOLDER_COLUMNS, Result, TEXT_COLUMNS, find_column};

use crate::filter::filter_unrealistic_rows;
use crate::frame::TextTable;
use crate::normalization::{normalize_text, replace_no_data};
use crate::rules::RuleSet;

/// Cleans the rows below a school-level header.
#[derive(Debug, Clone, Copy)]
pub struct SchoolLevelCleaner {
    pub enrollment_ceiling: f64,
}

/// Result of cleaning a school-level table.
#[derive(Debug, Clone)]
pub struct SchoolCleaning {
    pub table: TextTable,
    /// Non-blank data rows before filtering.
    pub rows_read: usize,
    pub rows_dropped: usize,
}

/// Column index of each required text column.
pub fn require_text_columns(headers: &[String]) -> Result<Vec<usize>> {
    let missing: Vec<&str> = TEXT_COLUMNS
        .iter()
        .copied()
        .filter(|name| find_column(headers, &[*name]).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(CleanError::schema_mismatch(format!(
            "school-level table is missing required columns: {}",
            missing.join(", ")
        )));
    }
    Ok(TEXT_COLUMNS
        .iter()
        .filter_map(|name| find_column(headers, &[*name]))
        .collect())
}

impl SchoolLevelCleaner {
    pub fn new(enrollment_ceiling: f64) -> Self {
        Self { enrollment_ceiling }
    }

    /// Normalizes text fields, fills address placeholders and filters rows.
    pub fn clean(
        &self,
        columns: Vec<String>,
        rows: &[Vec<String>],
        rules: &RuleSet,
    ) -> Result<SchoolCleaning> {
        let mut table = TextTable::new(columns, rows.to_vec());
        require_text_columns(&table.headers)?;

        let blank = table.drop_blank_rows();
        if blank > 0 {
            debug!(rows = blank, "dropped blank school-level rows");
        }
        let mismatched = table.fit_rows();
        if mismatched > 0 {
            let error = CleanError::schema_mismatch(format!(
                "{mismatched} school-level rows differ from the header width of {}",
                table.width()
            ));
            warn!(%error, "fitting rows to the header");
        }
        let removed = table.resolve_blank_headers();
        if !removed.is_empty() {
            debug!(positions = ?removed, "dropped empty unnamed school-level columns");
        }
        let text_columns = require_text_columns(&table.headers)?;
        let rows_read = table.height();

        for idx in text_columns {
            table.map_column(idx, |cell| normalize_text(cell, rules));
        }
        for name in PLACEHOLDER_COLUMNS {
            if let Some(idx) = find_column(&table.headers, &[*name]) {
                table.map_column(idx, replace_no_data);
            }
        }

        let rows_dropped = filter_unrealistic_rows(&mut table, self.enrollment_ceiling);
        info!(
            rows_read,
            rows_dropped,
            ceiling = self.enrollment_ceiling,
            "filtered unrealistic enrollment rows"
        );
        Ok(SchoolCleaning {
            table,
            rows_read,
            rows_dropped,
        })
    }
}
