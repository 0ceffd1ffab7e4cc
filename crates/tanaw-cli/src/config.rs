//! Cleaning options from an optional TOML file plus CLI overrides.
//!
//! ```toml
//! enrollment_ceiling = 4000
//! year_levels = 13
//! output_dir = "out/cleaned"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use tracing::debug;

use tanaw_model::CleaningOptions;

/// Loads options from `path`, or the defaults when no file is given.
pub fn load_options(path: Option<&Path>) -> Result<CleaningOptions> {
    let Some(path) = path else {
        return Ok(CleaningOptions::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let options: CleaningOptions =
        toml::from_str(&text).with_context(|| format!("parse config {}", path.display()))?;
    debug!(config = %path.display(), ?options, "loaded cleaning options");
    Ok(options)
}

/// Applies command-line values over file or default options.
pub fn apply_overrides(
    mut options: CleaningOptions,
    output_dir: Option<&PathBuf>,
    ceiling: Option<f64>,
) -> Result<CleaningOptions> {
    if let Some(dir) = output_dir {
        options = options.with_output_dir(dir.clone());
    }
    if let Some(ceiling) = ceiling {
        options = options.with_enrollment_ceiling(ceiling);
    }
    ensure!(
        options.enrollment_ceiling.is_finite() && options.enrollment_ceiling >= 0.0,
        "enrollment ceiling must be a non-negative number, got {}",
        options.enrollment_ceiling
    );
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_file() {
        let options = load_options(None).unwrap();
        assert_eq!(options, CleaningOptions::default());
    }

    #[test]
    fn flags_override_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "enrollment_ceiling = 4000.0\noutput_dir = \"from-file\"").unwrap();

        let options = load_options(Some(file.path())).unwrap();
        assert_eq!(options.enrollment_ceiling, 4000.0);

        let flag_dir = PathBuf::from("from-flag");
        let options = apply_overrides(options, Some(&flag_dir), None).unwrap();
        assert_eq!(options.output_dir, flag_dir);
        assert_eq!(options.enrollment_ceiling, 4000.0);
    }

    #[test]
    fn rejects_negative_ceiling() {
        let err = apply_overrides(CleaningOptions::default(), None, Some(-1.0)).unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn bad_toml_names_the_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "enrollment_ceiling = \"lots\"").unwrap();
        let err = load_options(Some(file.path())).unwrap_err();
        assert!(err.to_string().starts_with("parse config"));
    }
}
