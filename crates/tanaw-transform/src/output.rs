//! Writing the cleaned table to a new timestamped CSV file.

use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Local;
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::{info, warn};

use tanaw_model::{CleanError, Result};

/// Collision retries before giving up on a timestamp.
const MAX_NAME_ATTEMPTS: usize = 1000;

/// File name for a cleaned table: `cleaned_<stamp>.csv`, or
/// `cleaned_<stamp>_<attempt>.csv` after a collision.
pub fn cleaned_file_name(stamp: &str, attempt: usize) -> String {
    if attempt == 0 {
        format!("cleaned_{stamp}.csv")
    } else {
        format!("cleaned_{stamp}_{attempt}.csv")
    }
}

/// Local-time stamp used in output names.
pub fn timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Creates a file that did not exist before, adding a counter on collision.
fn create_unique(dir: &Path, stamp: &str) -> Result<(PathBuf, File)> {
    for attempt in 0..MAX_NAME_ATTEMPTS {
        let path = dir.join(cleaned_file_name(stamp, attempt));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(CleanError::OutputWrite { path, source: e }),
        }
    }
    Err(CleanError::OutputWrite {
        path: dir.join(cleaned_file_name(stamp, MAX_NAME_ATTEMPTS)),
        source: std::io::Error::new(ErrorKind::AlreadyExists, "no free output file name"),
    })
}

/// Writes `frame` with a header row into `dir`. Returns the new file's path.
///
/// The directory is created if needed; existing files are never overwritten.
pub fn write_cleaned_frame(frame: &mut DataFrame, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| CleanError::OutputWrite {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let (path, mut file) = create_unique(dir, &timestamp())?;
    let written = CsvWriter::new(&mut file).include_header(true).finish(frame);
    if let Err(error) = written {
        drop(file);
        if let Err(cleanup) = fs::remove_file(&path) {
            warn!(path = %path.display(), %cleanup, "could not remove partial output");
        }
        return Err(error.into());
    }

    info!(
        path = %path.display(),
        rows = frame.height(),
        columns = frame.width(),
        "wrote cleaned table"
    );
    Ok(path)
}
