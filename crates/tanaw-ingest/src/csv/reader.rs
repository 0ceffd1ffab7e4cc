//! Raw CSV reading without assuming a header position.

use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use tracing::debug;

use tanaw_model::{CleanError, RawTable, Result};

use super::header::normalize_cell;

/// Maximum file size accepted for cleaning (100 MB).
pub const MAX_CSV_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects paths that do not carry a `.csv` extension (case-insensitive).
pub fn validate_csv_extension(path: &Path) -> Result<()> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        Ok(())
    } else {
        Err(CleanError::UnsupportedExtension {
            path: path.to_path_buf(),
        })
    }
}

/// Checks that the file exists, is readable and is within [`MAX_CSV_FILE_SIZE`].
pub fn check_file(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CleanError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CleanError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    if metadata.len() > MAX_CSV_FILE_SIZE {
        return Err(CleanError::CsvParse {
            path: path.to_path_buf(),
            message: format!(
                "file is {} bytes, larger than the {MAX_CSV_FILE_SIZE} byte limit",
                metadata.len()
            ),
        });
    }
    Ok(())
}

/// Reads every row of a comma-separated file into a [`RawTable`].
///
/// Rows may have differing widths. Cells are trimmed and decoded lossily so
/// stray Latin-1 bytes (e.g. in `NIÑO`) never abort a read. Rows made of
/// empty cells are kept; fully empty lines are skipped by the reader.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    check_file(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| CleanError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut record = ByteRecord::new();
    loop {
        let more = reader
            .read_byte_record(&mut record)
            .map_err(|e| CleanError::CsvParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        if !more {
            break;
        }
        let row: Vec<String> = record
            .iter()
            .map(|bytes| normalize_cell(&String::from_utf8_lossy(bytes)))
            .collect();
        rows.push(row);
    }

    let table = RawTable::new(rows);
    if table.rows.iter().all(|row| tanaw_model::is_blank_row(row)) {
        return Err(CleanError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    debug!(
        path = %path.display(),
        rows = table.len(),
        width = table.width(),
        "read raw table"
    );
    Ok(table)
}
