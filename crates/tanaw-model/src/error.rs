//! Error types shared by the cleaning pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, cleaning or writing an enrollment table.
#[derive(Debug, Error)]
pub enum CleanError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file does not carry a `.csv` extension.
    #[error("unsupported file type {path}: please upload a .csv file")]
    UnsupportedExtension { path: PathBuf },

    // === CSV Parsing Errors ===
    /// Failed to parse the delimited input.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file is empty or has no non-blank rows.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Structural Errors ===
    /// No row carries both a region marker and a grade-level marker.
    #[error("could not find a header row with a region and a grade-level column (scanned {rows_scanned} rows)")]
    HeaderNotFound { rows_scanned: usize },

    /// The table does not have the shape its layout requires.
    #[error("schema mismatch: {reason}")]
    SchemaMismatch { reason: String },

    // === Value Errors ===
    /// A cell could not be coerced to a number.
    #[error("malformed value '{value}' in column '{column}'")]
    MalformedValue { column: String, value: String },

    /// A special-case rule pattern failed to compile.
    #[error("invalid rule pattern '{pattern}': {message}")]
    InvalidRule { pattern: String, message: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    // === Output Errors ===
    /// Failed to create or write the cleaned output file.
    #[error("failed to write cleaned file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CleanError {
    /// Builds a [`CleanError::SchemaMismatch`] from any displayable reason.
    pub fn schema_mismatch(reason: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            reason: reason.into(),
        }
    }
}

impl From<polars::prelude::PolarsError> for CleanError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CleanError::FileNotFound {
            path: PathBuf::from("/path/to/enrollment.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/enrollment.csv");
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("Region".into());
        let clean_err: CleanError = polars_err.into();
        assert!(matches!(clean_err, CleanError::DataFrame { .. }));
    }

    #[test]
    fn test_schema_mismatch_reason() {
        let err = CleanError::schema_mismatch("missing School Name");
        assert!(err.to_string().contains("missing School Name"));
    }
}
