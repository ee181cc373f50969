//! Pre-flight checks for vtune-report
//!
//! Validates the target directory before any analysis runs, so the two fatal
//! conditions surface as clear errors instead of an empty report.

use crate::domain::CliError;
use std::path::Path;

/// Check that `path` exists and is a directory.
///
/// # Errors
/// Returns [`CliError::DirectoryNotFound`] or [`CliError::NotADirectory`].
pub fn check_result_dir(path: &Path) -> Result<(), CliError> {
    if !path.exists() {
        return Err(CliError::DirectoryNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(CliError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}
