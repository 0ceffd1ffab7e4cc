//! Column vocabulary for enrollment tables.
//!
//! Enrollment spreadsheets mix identifying/demographic columns (region,
//! school id, address, ...) with one count column per grade and gender.
//! [`ColumnRole`] partitions the two so text rules and numeric checks are
//! applied to the right columns.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const REGION_COLUMN: &str = "Region";
pub const SCHOOL_ID_COLUMN: &str = "BEIS School ID";
pub const SCHOOL_NAME_COLUMN: &str = "School Name";
pub const STREET_ADDRESS_COLUMN: &str = "Street Address";
pub const BARANGAY_COLUMN: &str = "Barangay";

/// Header spellings accepted as the school identifier column.
pub const SCHOOL_ID_ALIASES: &[&str] = &[SCHOOL_ID_COLUMN, "School ID"];

/// Identifier and demographic columns; everything else is an enrollment count.
pub const IDENTIFIER_COLUMNS: &[&str] = &[
    "Region",
    "Division",
    "District",
    "BEIS School ID",
    "School ID",
    "School Name",
    "Street Address",
    "Province",
    "Municipality",
    "Legislative District",
    "Barangay",
    "Sector",
    "School Subclassification",
    "School Type",
    "Modified COC",
];

/// Free-text columns cleaned with the abbreviation rules on the school-level path.
pub const TEXT_COLUMNS: &[&str] = &[
    SCHOOL_NAME_COLUMN,
    STREET_ADDRESS_COLUMN,
    "Province",
    "Municipality",
    BARANGAY_COLUMN,
];

/// Columns whose "no data" placeholders are replaced by [`UNKNOWN_SENTINEL`].
pub const PLACEHOLDER_COLUMNS: &[&str] = &[STREET_ADDRESS_COLUMN, BARANGAY_COLUMN];

/// Values treated as "no data" in address-like columns (compared after normalization).
pub const NO_DATA_PLACEHOLDERS: &[&str] = &[
    "N/A",
    "N.A.",
    "N / A",
    "NA",
    "NONE",
    "NULL",
    "NOT APPLICABLE",
    "",
    "0",
    "_",
    "=",
    ".",
    "-----",
];

/// Sentinel for missing text in address-like columns.
pub const UNKNOWN_SENTINEL: &str = "UNKNOWN";

/// Sentinel for missing counts in region-level tables.
pub const ZERO_SENTINEL: &str = "0";

/// Placeholder region-level sources use for an absent count.
pub const ABSENT_COUNT_PLACEHOLDER: &str = "-";

/// Role of a column in an enrollment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnRole {
    /// Region, division, school id, name, address, sector, ...
    Identifier,
    /// Learner count for one grade and gender.
    Enrollment,
}

impl ColumnRole {
    /// Classifies a header by name (case-insensitive, whitespace-collapsed).
    pub fn of(name: &str) -> Self {
        if contains_column(IDENTIFIER_COLUMNS, name) {
            Self::Identifier
        } else {
            Self::Enrollment
        }
    }

    pub fn is_enrollment(self) -> bool {
        self == Self::Enrollment
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier => write!(f, "identifier"),
            Self::Enrollment => write!(f, "enrollment"),
        }
    }
}

/// Collapses runs of whitespace to single spaces and trims the ends.
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Compares two header names ignoring case and whitespace runs.
pub fn column_name_eq(left: &str, right: &str) -> bool {
    collapse_whitespace(left).eq_ignore_ascii_case(&collapse_whitespace(right))
}

/// Returns true if `name` matches any entry of `candidates`.
pub fn contains_column(candidates: &[&str], name: &str) -> bool {
    candidates
        .iter()
        .any(|candidate| column_name_eq(candidate, name))
}

/// Finds the index of the first header matching any of `candidates`.
pub fn find_column<S: AsRef<str>>(headers: &[S], candidates: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|header| contains_column(candidates, header.as_ref()))
}
