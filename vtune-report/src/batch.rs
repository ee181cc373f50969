//! Report generation for one or many result directories.
//!
//! Batch mode walks the subdirectories of a base directory in name order.
//! Each directory is independent: a failure is reported and the walk moves on.

use crate::analysis::{analyze, AnalyzerConfig};
use crate::domain::ReportError;
use crate::export::{write_report, ReportContext, ReportFormat};
use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Options shared by single-directory and batch runs.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub format: ReportFormat,
    pub analyzer: AnalyzerConfig,
    pub quiet: bool,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Reports written, in processing order.
    pub written: Vec<PathBuf>,
    /// Result directories that failed, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchSummary {
    #[must_use]
    pub fn processed(&self) -> usize {
        self.written.len() + self.failed.len()
    }
}

/// Analyze one result directory and write its report.
///
/// The report goes to `output` if given, otherwise to the format's default
/// file name inside `result_dir`. Returns the path written.
///
/// # Errors
/// Returns an error if the report cannot be rendered or written.
pub fn process_result_dir(
    result_dir: &Path,
    output: Option<&Path>,
    options: &RunOptions,
) -> Result<PathBuf, ReportError> {
    let analysis = analyze(result_dir, &options.analyzer);
    info!(
        "{}: {} hotspots, {} recommendations",
        result_dir.display(),
        analysis.hotspots.len(),
        analysis.recommendations.len()
    );

    let path = output.map_or_else(|| options.format.default_path(result_dir), Path::to_path_buf);
    write_report(&analysis, options.format, &ReportContext::now(result_dir), &path)?;
    Ok(path)
}

/// Non-hidden subdirectories of `base_dir`, sorted by name.
///
/// # Errors
/// Returns an error if `base_dir` cannot be read.
pub fn list_result_dirs(base_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(base_dir)
        .with_context(|| format!("Failed to read {}", base_dir.display()))?;

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {e}", base_dir.display());
                None
            }
        })
        .filter(|path| path.is_dir())
        .filter(|path| !path.file_name().is_some_and(|n| n.to_string_lossy().starts_with('.')))
        .collect();

    dirs.sort();
    Ok(dirs)
}

/// Write a report into every result directory under `base_dir`.
///
/// # Errors
/// Returns an error only if `base_dir` itself cannot be listed.
pub fn run_batch(base_dir: &Path, options: &RunOptions) -> Result<BatchSummary> {
    let dirs = list_result_dirs(base_dir)?;
    let mut summary = BatchSummary::default();

    if dirs.is_empty() {
        warn!("No VTune result directories found in {}", base_dir.display());
        return Ok(summary);
    }

    if !options.quiet {
        println!("found {} result directories", dirs.len());
    }

    for dir in dirs {
        let name = dir.file_name().map_or_else(
            || dir.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        if !options.quiet {
            println!("\nanalyzing: {name}");
        }

        match process_result_dir(&dir, None, options) {
            Ok(path) => {
                if !options.quiet {
                    println!("  saved: {}", path.display());
                }
                summary.written.push(path);
            }
            Err(e) => {
                eprintln!("  error: {name}: {e}");
                summary.failed.push((dir, e.to_string()));
            }
        }
    }

    Ok(summary)
}
