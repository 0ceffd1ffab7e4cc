//! Table types passed between cleaning stages.
//!
//! Stages work on a row-oriented [`TextTable`] of strings. The final stage
//! converts it into a typed polars [`DataFrame`] wrapped in a
//! [`CleanedTable`], coercing each column to a number where every value
//! allows it and leaving it as text otherwise.

use std::path::PathBuf;

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use tanaw_model::{CleanOutcome, Layout, Result, is_blank_row};

use crate::normalization::{parse_f64, parse_i64};

/// Named columns over rows of text cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Settles blank header cells once rows are fitted to the header width.
    ///
    /// A blank-headed column with no values is removed; the rest are named
    /// `Column <n>` by their 1-based source position. Returns the source
    /// positions of the removed columns.
    pub fn resolve_blank_headers(&mut self) -> Vec<usize> {
        let mut removed = Vec::new();
        for (idx, header) in self.headers.iter_mut().enumerate() {
            if !header.trim().is_empty() {
                continue;
            }
            let empty = self
                .rows
                .iter()
                .all(|row| row.get(idx).is_none_or(|cell| cell.trim().is_empty()));
            if empty {
                removed.push(idx);
            } else {
                *header = format!("Column {}", idx + 1);
            }
        }
        if removed.is_empty() {
            return removed;
        }

        let keep = |idx: &usize| removed.binary_search(idx).is_err();
        self.headers = std::mem::take(&mut self.headers)
            .into_iter()
            .enumerate()
            .filter(|(idx, _)| keep(idx))
            .map(|(_, header)| header)
            .collect();
        for row in &mut self.rows {
            *row = std::mem::take(row)
                .into_iter()
                .enumerate()
                .filter(|(idx, _)| keep(idx))
                .map(|(_, cell)| cell)
                .collect();
        }
        removed
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Removes rows whose cells are all blank. Returns how many were removed.
    pub fn drop_blank_rows(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| !is_blank_row(row));
        before - self.rows.len()
    }

    /// Pads short rows with blanks and truncates long ones to the header width.
    ///
    /// Returns the number of rows whose width differed from the header.
    pub fn fit_rows(&mut self) -> usize {
        let width = self.width();
        let mut mismatched = 0;
        for row in &mut self.rows {
            if row.len() != width {
                mismatched += 1;
                row.resize(width, String::new());
            }
        }
        mismatched
    }

    /// Applies `f` to every cell of column `idx`.
    pub fn map_column<F>(&mut self, idx: usize, mut f: F)
    where
        F: FnMut(&str) -> String,
    {
        for row in &mut self.rows {
            if let Some(cell) = row.get_mut(idx) {
                *cell = f(cell);
            }
        }
    }

    /// Cells of column `idx`, blank where a row is too short.
    pub fn column_values(&self, idx: usize) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.get(idx).map_or("", |cell| cell.trim()))
            .collect()
    }
}

/// Builds a typed column: integers, then floats, then text.
///
/// Blank cells become nulls in numeric columns. A column with no values at
/// all stays text.
pub fn typed_column(name: &str, values: &[&str]) -> Column {
    if values.iter().any(|value| !value.is_empty()) {
        if values
            .iter()
            .filter(|value| !value.is_empty())
            .all(|value| parse_i64(value).is_some())
        {
            let ints: Vec<Option<i64>> = values.iter().map(|value| parse_i64(value)).collect();
            return Series::new(name.into(), ints).into();
        }
        if values
            .iter()
            .filter(|value| !value.is_empty())
            .all(|value| parse_f64(value).is_some_and(f64::is_finite))
        {
            let floats: Vec<Option<f64>> = values.iter().map(|value| parse_f64(value)).collect();
            return Series::new(name.into(), floats).into();
        }
    }
    let texts: Vec<String> = values.iter().map(|value| (*value).to_string()).collect();
    Series::new(name.into(), texts).into()
}

/// Converts a text table into a typed DataFrame.
pub fn build_frame(table: &TextTable) -> Result<DataFrame> {
    let columns: Vec<Column> = table
        .headers
        .iter()
        .enumerate()
        .map(|(idx, name)| typed_column(name, &table.column_values(idx)))
        .collect();
    Ok(DataFrame::new(columns)?)
}

/// Output of the cleaning pipeline.
#[derive(Debug, Clone)]
pub struct CleanedTable {
    pub layout: Layout,
    pub frame: DataFrame,
    /// Data rows found under the header, blank rows excluded.
    pub rows_read: usize,
    /// Rows removed by the quality filter.
    pub rows_dropped: usize,
}

impl CleanedTable {
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Column names in output order.
    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Summarizes the run for callers, with the written path if any.
    pub fn outcome(&self, output_path: Option<PathBuf>) -> CleanOutcome {
        CleanOutcome {
            output_path,
            layout: self.layout,
            rows_read: self.rows_read,
            rows_retained: self.height(),
            rows_dropped: self.rows_dropped,
            columns: self.column_names(),
        }
    }
}
