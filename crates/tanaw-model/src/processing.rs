//! Layout and result types for a cleaning run.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Granularity of a source enrollment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// One row per school with identifier columns and grade/gender counts.
    SchoolLevel,
    /// One row per region with a two-row grade/gender header.
    RegionLevel,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SchoolLevel => write!(f, "school-level"),
            Self::RegionLevel => write!(f, "region-level"),
        }
    }
}

/// What a completed cleaning run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanOutcome {
    /// Where the cleaned table was written; `None` for dry runs.
    pub output_path: Option<PathBuf>,
    pub layout: Layout,
    /// Data rows seen after the header (blank rows excluded).
    pub rows_read: usize,
    pub rows_retained: usize,
    /// Rows removed by the quality filter.
    pub rows_dropped: usize,
    /// Canonical column names, in output order.
    pub columns: Vec<String>,
}
