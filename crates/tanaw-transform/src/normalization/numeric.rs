//! Numeric coercion and enrollment count validation.

use std::fmt;

use tanaw_model::{CleanError, Result};

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<i64>().ok()
}

/// Coerces an enrollment cell to a finite number.
pub fn parse_enrollment(column: &str, value: &str) -> Result<f64> {
    parse_f64(value)
        .filter(|number| number.is_finite())
        .ok_or_else(|| CleanError::MalformedValue {
            column: column.to_string(),
            value: value.to_string(),
        })
}

/// Why an enrollment count is unrealistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountIssue {
    Negative,
    NonIntegral,
    AboveCeiling,
    Malformed,
}

impl fmt::Display for CountIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => write!(f, "negative count"),
            Self::NonIntegral => write!(f, "non-integral count"),
            Self::AboveCeiling => write!(f, "count above ceiling"),
            Self::Malformed => write!(f, "not a number"),
        }
    }
}

/// Checks one enrollment count against the realism rules.
///
/// Negative, fractional and above-ceiling values are unrealistic; a value
/// equal to the ceiling is accepted.
pub fn assess_count(value: f64, ceiling: f64) -> std::result::Result<(), CountIssue> {
    if value < 0.0 {
        Err(CountIssue::Negative)
    } else if value.fract() != 0.0 {
        Err(CountIssue::NonIntegral)
    } else if value > ceiling {
        Err(CountIssue::AboveCeiling)
    } else {
        Ok(())
    }
}
