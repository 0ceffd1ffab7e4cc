//! Row-oriented records from a cleaned table.

use std::path::Path;

use polars::prelude::DataFrame;
use serde_json::{Map, Value};

use tanaw_model::Result;

use crate::common::{any_to_json, read_cleaned_csv};

/// One record per row, keyed by column name.
pub type Record = Map<String, Value>;

/// Converts every row of `frame` into a JSON object.
pub fn frame_records(frame: &DataFrame) -> Result<Vec<Record>> {
    let columns = frame.get_columns();
    let mut records = Vec::with_capacity(frame.height());
    for row in 0..frame.height() {
        let mut record = Map::with_capacity(columns.len());
        for column in columns {
            record.insert(column.name().to_string(), any_to_json(column.get(row)?));
        }
        records.push(record);
    }
    Ok(records)
}

/// Reads a cleaned CSV file as records, untransformed.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let frame = read_cleaned_csv(path)?;
    frame_records(&frame)
}
