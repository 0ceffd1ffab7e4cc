//! Quality filter for school-level enrollment rows.
//!
//! Every column outside the identifier vocabulary is an enrollment count.
//! A row is dropped as a whole when any of its counts is negative,
//! fractional, above the ceiling, or not a number at all.

use tracing::debug;

use tanaw_model::ColumnRole;

use crate::frame::TextTable;
use crate::normalization::{CountIssue, assess_count, parse_enrollment};

/// Indices of the enrollment columns in `headers`.
pub fn enrollment_columns(headers: &[String]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, name)| ColumnRole::of(name).is_enrollment())
        .map(|(idx, _)| idx)
        .collect()
}

/// First unrealistic count in a row, with the offending column index.
pub fn first_issue(
    headers: &[String],
    row: &[String],
    enrollment: &[usize],
    ceiling: f64,
) -> Option<(usize, CountIssue)> {
    enrollment.iter().find_map(|&idx| {
        let raw = row.get(idx).map_or("", String::as_str);
        let issue = match parse_enrollment(&headers[idx], raw) {
            Ok(value) => assess_count(value, ceiling).err(),
            Err(error) => {
                debug!(%error, "enrollment value failed numeric coercion");
                Some(CountIssue::Malformed)
            }
        };
        issue.map(|issue| (idx, issue))
    })
}

/// Removes rows with unrealistic enrollment counts. Returns the dropped count.
pub fn filter_unrealistic_rows(table: &mut TextTable, ceiling: f64) -> usize {
    let enrollment = enrollment_columns(&table.headers);
    if enrollment.is_empty() {
        return 0;
    }
    let before = table.rows.len();
    let headers = &table.headers;
    let mut row_number = 0usize;
    table.rows.retain(|row| {
        row_number += 1;
        match first_issue(headers, row, &enrollment, ceiling) {
            Some((idx, issue)) => {
                debug!(
                    row = row_number,
                    column = %headers[idx],
                    value = %row.get(idx).map_or("", String::as_str),
                    %issue,
                    "dropping unrealistic row"
                );
                false
            }
            None => true,
        }
    });
    before - table.rows.len()
}
