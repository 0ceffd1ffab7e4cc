//! Readers over cleaned enrollment tables.
//!
//! - **summary**: totals by gender, distinct schools and regions
//! - **records**: row-oriented JSON records

pub mod common;
pub mod records;
pub mod summary;

pub use common::read_cleaned_csv;
pub use records::{Record, frame_records, read_records};
pub use summary::{EnrollmentSummary, GenderColumn, summarize_file, summarize_frame};
