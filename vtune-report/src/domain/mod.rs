//! Domain model for vtune-report
//!
//! This module contains core domain types and errors that provide:
//! - Compile-time safety for the analysis kind inferred from a result directory
//! - Self-documenting function signatures
//! - Structured error handling

pub mod errors;
pub mod types;

// Re-export common types for convenience
pub use types::AnalysisType;

pub use errors::{CliError, ProfilerError, ReportError};
