//! # vtune-report - Intel VTune Result Summarizer
//!
//! vtune-report turns VTune result directories into short, readable reports:
//! the top CPU hotspots, whatever memory/threading/microarchitecture metrics
//! were measured, and a list of rule-based optimization hints.
//!
//! ## Pipeline
//!
//! ```text
//! result dir ──► parsing ──► analysis ──► export
//!  hotspots.csv   (tolerant    (ranking,    (Markdown /
//!  summary.csv     CSV, units)  rules)       JSON)
//!      │
//!      └─ no CSV? ──► profiling (one bounded `vtune -report` call)
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`]: column-alias matching and unit parsing for VTune CSV exports
//! - [`profiling`]: the `vtune` command-line fallback
//! - [`analysis`]: hotspot ranking, recommendation rules, per-directory driver
//! - [`export`]: JSON and Markdown rendering
//! - [`batch`]: single-directory and batch report generation
//! - [`preflight`]: target directory validation
//! - [`cli`]: command-line argument parsing and configuration
//! - [`report_data`]: the report data model
//! - [`domain`]: core domain types and errors
//!
//! ## Typical Usage
//!
//! ```bash
//! # One result directory, Markdown report written next to the results
//! vtune-report --dir vtune_results/hotspots_koios_dla_like_large
//!
//! # Every result directory, JSON reports
//! vtune-report --all vtune_results/ --format json
//! ```
//!
//! All parse problems are warnings (`RUST_LOG` controls verbosity); only a
//! missing target argument or a nonexistent directory stops the run.

pub mod analysis;
pub mod batch;
pub mod cli;
pub mod domain;
pub mod export;
pub mod parsing;
pub mod preflight;
pub mod profiling;
pub mod report_data;
