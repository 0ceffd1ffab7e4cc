//! Enrollment data ingestion.
//!
//! Reads raw enrollment spreadsheets exported as CSV and works out where the
//! real header sits and which layout the table uses.
//!
//! # Features
//!
//! - **CSV Loading**: ragged, header-less reading into a [`RawTable`](tanaw_model::RawTable)
//! - **Header Location**: first row naming a region and a grade level
//! - **Layout Classification**: school-level vs region-level
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tanaw_ingest::{classify_layout, locate_header, read_raw_table};
//!
//! let raw = read_raw_table(Path::new("enrollment.csv"))?;
//! let header = locate_header(&raw)?;
//! let table_header = classify_layout(&raw, header)?;
//! println!("{}", table_header.layout());
//! ```

mod csv;
mod header;
mod layout;

// === CSV Reading ===
pub use self::csv::{
    MAX_CSV_FILE_SIZE, check_file, normalize_cell, normalize_header, read_raw_table,
    validate_csv_extension,
};

// === Header Location ===
pub use header::{
    HeaderRow, find_header_row, find_region_anchor, is_grade_marker, is_region_marker,
    locate_header,
};

// === Layout Classification ===
pub use layout::{TableHeader, classify_layout, header_columns};
