//! CSV reading utilities.

mod header;
mod reader;

pub use header::{normalize_cell, normalize_header};
pub use reader::{MAX_CSV_FILE_SIZE, check_file, read_raw_table, validate_csv_extension};
