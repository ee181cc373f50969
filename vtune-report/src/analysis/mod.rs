//! Analysis logic for VTune results
//!
//! This module contains the pure business logic (ranking, recommendation
//! rules) plus the per-directory driver that feeds it, separated from report
//! rendering.

pub mod hotspot_analyzer;
pub mod recommendations;
pub mod result_analyzer;

pub use hotspot_analyzer::{rank_hotspots, MAX_HOTSPOTS, MAX_TABLE_ROWS};
pub use recommendations::{generate_recommendations, NO_BOTTLENECK_MESSAGE};
pub use result_analyzer::{analyze, AnalyzerConfig};
