//! Enrollment summary over a cleaned table.

use std::collections::BTreeSet;
use std::path::Path;

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use tracing::debug;

use tanaw_model::{REGION_COLUMN, Result, SCHOOL_ID_ALIASES, find_column};

use crate::common::{any_to_f64, any_to_string, read_cleaned_csv};

/// Headline figures for a cleaned enrollment table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentSummary {
    pub total_enrollments: i64,
    pub male_enrollments: i64,
    pub female_enrollments: i64,
    pub number_of_schools: usize,
    pub regions_with_schools: usize,
    pub number_of_year_levels: u32,
}

/// Gender a count column belongs to, judged by its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderColumn {
    Male,
    Female,
}

impl GenderColumn {
    /// `female` is checked first since every female column name also contains `male`.
    pub fn of(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if lower.contains("female") {
            Some(Self::Female)
        } else if lower.contains("male") {
            Some(Self::Male)
        } else {
            None
        }
    }
}

fn column_sum(frame: &DataFrame, idx: usize) -> Result<f64> {
    let column = &frame.get_columns()[idx];
    let mut sum = 0.0;
    for row in 0..frame.height() {
        if let Some(value) = any_to_f64(column.get(row)?) {
            sum += value;
        }
    }
    Ok(sum)
}

fn distinct_values(frame: &DataFrame, idx: usize) -> Result<usize> {
    let column = &frame.get_columns()[idx];
    let mut seen = BTreeSet::new();
    for row in 0..frame.height() {
        let value = any_to_string(column.get(row)?);
        let value = value.trim();
        if !value.is_empty() {
            seen.insert(value.to_string());
        }
    }
    Ok(seen.len())
}

/// Summarizes a cleaned frame. Missing columns contribute zero.
pub fn summarize_frame(frame: &DataFrame, year_levels: u32) -> Result<EnrollmentSummary> {
    let names: Vec<String> = frame
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();

    let mut male = 0.0;
    let mut female = 0.0;
    for (idx, name) in names.iter().enumerate() {
        match GenderColumn::of(name) {
            Some(GenderColumn::Female) => female += column_sum(frame, idx)?,
            Some(GenderColumn::Male) => male += column_sum(frame, idx)?,
            None => {}
        }
    }

    let number_of_schools = match find_column(&names, SCHOOL_ID_ALIASES) {
        Some(idx) => distinct_values(frame, idx)?,
        None => 0,
    };
    let regions_with_schools = match find_column(&names, &[REGION_COLUMN]) {
        Some(idx) => distinct_values(frame, idx)?,
        None => 0,
    };

    let male_enrollments = male.round() as i64;
    let female_enrollments = female.round() as i64;
    let summary = EnrollmentSummary {
        total_enrollments: male_enrollments + female_enrollments,
        male_enrollments,
        female_enrollments,
        number_of_schools,
        regions_with_schools,
        number_of_year_levels: year_levels,
    };
    debug!(?summary, "summarized enrollment table");
    Ok(summary)
}

/// Reads a cleaned CSV file and summarizes it.
pub fn summarize_file(path: &Path, year_levels: u32) -> Result<EnrollmentSummary> {
    let frame = read_cleaned_csv(path)?;
    summarize_frame(&frame, year_levels)
}
