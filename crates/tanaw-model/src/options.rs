//! Configuration options for enrollment cleaning.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Largest enrollment count accepted for a single grade/gender cell.
pub const DEFAULT_ENROLLMENT_CEILING: f64 = 5000.0;

/// Year levels covered by the source data (Kindergarten to Grade 12).
pub const DEFAULT_YEAR_LEVELS: u32 = 13;

/// Directory cleaned files are written to when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "cleaned_files";

/// Options controlling a cleaning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningOptions {
    /// Rows with any enrollment count above this value are dropped.
    /// A count equal to the ceiling is kept.
    pub enrollment_ceiling: f64,

    /// Number of year levels reported in summaries.
    pub year_levels: u32,

    /// Directory that receives `cleaned_<timestamp>.csv` files.
    pub output_dir: PathBuf,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            enrollment_ceiling: DEFAULT_ENROLLMENT_CEILING,
            year_levels: DEFAULT_YEAR_LEVELS,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl CleaningOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_enrollment_ceiling(mut self, ceiling: f64) -> Self {
        self.enrollment_ceiling = ceiling;
        self
    }

    #[must_use]
    pub fn with_year_levels(mut self, year_levels: u32) -> Self {
        self.year_levels = year_levels;
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
