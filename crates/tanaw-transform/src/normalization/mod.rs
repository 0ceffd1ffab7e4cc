//! Normalization functions for enrollment data.
//!
//! - **text**: school name and address cleaning, "no data" placeholders
//! - **numeric**: numeric coercion and enrollment count checks

pub mod numeric;
pub mod text;

pub use numeric::{CountIssue, assess_count, parse_enrollment, parse_f64, parse_i64};
pub use text::{is_no_data, normalize_text, replace_no_data, strip_leading_markers};
