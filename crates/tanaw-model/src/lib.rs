//! Enrollment data model.
//!
//! Shared types for the cleaning workspace: untyped source tables, column
//! roles and vocabulary, run options, layouts and the error taxonomy.

pub mod columns;
pub mod error;
pub mod options;
pub mod processing;
pub mod table;

pub use columns::{
    ABSENT_COUNT_PLACEHOLDER, BARANGAY_COLUMN, ColumnRole, IDENTIFIER_COLUMNS,
    NO_DATA_PLACEHOLDERS, PLACEHOLDER_COLUMNS, REGION_COLUMN, SCHOOL_ID_ALIASES,
    SCHOOL_ID_COLUMN, SCHOOL_NAME_COLUMN, STREET_ADDRESS_COLUMN, TEXT_COLUMNS, UNKNOWN_SENTINEL,
    ZERO_SENTINEL, collapse_whitespace, column_name_eq, contains_column, find_column,
};
pub use error::{CleanError, Result};
pub use options::{
    CleaningOptions, DEFAULT_ENROLLMENT_CEILING, DEFAULT_OUTPUT_DIR, DEFAULT_YEAR_LEVELS,
};
pub use processing::{CleanOutcome, Layout};
pub use table::{RawTable, is_blank_row};
