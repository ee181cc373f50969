//! Structured error types for vtune-report
//!
//! Using thiserror for automatic Display implementation and error chaining.

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

/// Fatal command-line errors. Everything else degrades to warnings.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Missing required argument: --dir or --all")]
    MissingTarget,

    #[error("Directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Failures of the `vtune` command-line fallback.
#[derive(Error, Debug)]
pub enum ProfilerError {
    #[error("Failed to run {}: {source}", .program.display())]
    SpawnFailed {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} did not finish within {}s", .program.display(), .timeout.as_secs_f64())]
    TimedOut { program: PathBuf, timeout: Duration },

    #[error("{} exited with {status}: {stderr}", .program.display())]
    Failed { program: PathBuf, status: ExitStatus, stderr: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report to {}: {error}", .path.display())]
    WriteFailed { path: PathBuf, error: std::io::Error },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_not_found_display() {
        let err = CliError::DirectoryNotFound(PathBuf::from("/no/such/dir"));
        assert_eq!(err.to_string(), "Directory does not exist: /no/such/dir");
    }

    #[test]
    fn test_profiler_timeout_display() {
        let err = ProfilerError::TimedOut {
            program: PathBuf::from("vtune"),
            timeout: Duration::from_secs(30),
        };
        assert_eq!(err.to_string(), "vtune did not finish within 30s");
    }

    #[test]
    fn test_write_failed_names_path() {
        let err = ReportError::WriteFailed {
            path: PathBuf::from("/tmp/out/ANALYSIS_REPORT.md"),
            error: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("ANALYSIS_REPORT.md"));
        assert!(err.to_string().contains("denied"));
    }
}
