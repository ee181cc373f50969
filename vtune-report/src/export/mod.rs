//! Report export
//!
//! Two formats: a JSON dump of [`PerformanceAnalysis`] for tooling, and a
//! Markdown document for humans.

pub mod json;
pub mod markdown;

pub use json::to_json;
pub use markdown::{render_markdown, ReportContext};

use crate::domain::ReportError;
use crate::report_data::PerformanceAnalysis;
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// Output format of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
}

impl ReportFormat {
    /// File name used when the report is written into the result directory.
    #[must_use]
    pub fn default_file_name(self) -> &'static str {
        match self {
            ReportFormat::Markdown => "ANALYSIS_REPORT.md",
            ReportFormat::Json => "analysis.json",
        }
    }

    #[must_use]
    pub fn default_path(self, result_dir: &Path) -> PathBuf {
        result_dir.join(self.default_file_name())
    }
}

/// Render an analysis in the given format.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render(
    analysis: &PerformanceAnalysis,
    format: ReportFormat,
    context: &ReportContext,
) -> Result<String, ReportError> {
    match format {
        ReportFormat::Json => to_json(analysis),
        ReportFormat::Markdown => Ok(render_markdown(analysis, context)),
    }
}

/// Render and write a report to `path`, replacing any existing file.
///
/// # Errors
/// Returns an error if rendering or writing fails.
pub fn write_report(
    analysis: &PerformanceAnalysis,
    format: ReportFormat,
    context: &ReportContext,
    path: &Path,
) -> Result<(), ReportError> {
    let contents = render(analysis, format, context)?;
    std::fs::write(path, contents)
        .map_err(|error| ReportError::WriteFailed { path: path.to_path_buf(), error })
}
