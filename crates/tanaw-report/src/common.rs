//! Polars helpers shared by the readers.

use std::path::Path;

use polars::prelude::{AnyValue, CsvReadOptions, DataFrame, SerReader};
use serde_json::{Number, Value};

use tanaw_model::{CleanError, Result};

/// Rows used to infer column types of a cleaned file.
const INFER_SCHEMA_ROWS: usize = 100;

/// Reads a cleaned CSV (header row present) into a DataFrame.
pub fn read_cleaned_csv(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(CleanError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    Ok(frame)
}

/// Converts a Polars `AnyValue` to a `String`; nulls become empty strings.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::Float64(v) => v.to_string(),
        other => other.to_string(),
    }
}

/// Converts an `AnyValue` to `f64`; `None` for nulls and non-numeric values.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        _ => None,
    }
}

/// Converts an `AnyValue` to JSON, keeping numbers numeric and nulls null.
pub fn any_to_json(value: AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(b) => Value::Bool(b),
        AnyValue::Int8(v) => Value::from(v),
        AnyValue::Int16(v) => Value::from(v),
        AnyValue::Int32(v) => Value::from(v),
        AnyValue::Int64(v) => Value::from(v),
        AnyValue::UInt8(v) => Value::from(v),
        AnyValue::UInt16(v) => Value::from(v),
        AnyValue::UInt32(v) => Value::from(v),
        AnyValue::UInt64(v) => Value::from(v),
        AnyValue::Float32(v) => Number::from_f64(f64::from(v)).map_or(Value::Null, Value::Number),
        AnyValue::Float64(v) => Number::from_f64(v).map_or(Value::Null, Value::Number),
        other => Value::String(any_to_string(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_values() {
        assert_eq!(any_to_json(AnyValue::Null), Value::Null);
        assert_eq!(any_to_json(AnyValue::Int64(7)), Value::from(7));
        assert_eq!(any_to_json(AnyValue::Float64(f64::NAN)), Value::Null);
        assert_eq!(any_to_json(AnyValue::String("NCR")), Value::from("NCR"));
    }

    #[test]
    fn numeric_values() {
        assert_eq!(any_to_f64(AnyValue::Int64(3)), Some(3.0));
        assert_eq!(any_to_f64(AnyValue::String("3")), None);
        assert_eq!(any_to_string(AnyValue::Null), "");
    }
}
