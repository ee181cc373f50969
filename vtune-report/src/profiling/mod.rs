//! Profiler invocation
//!
//! The report normally works from CSV files already exported next to the
//! VTune result. When those are missing, the `vtune` command-line tool is
//! asked once for a hotspots report.

pub mod vtune_cli;

pub use vtune_cli::{hotspots_from_vtune, VtuneCommand, DEFAULT_VTUNE_TIMEOUT};
