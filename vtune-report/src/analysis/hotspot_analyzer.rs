//! Hotspot ranking.
//!
//! VTune exports list functions in whatever order the report view used, and
//! the fallback CLI report may differ again. Both paths funnel through
//! [`rank_hotspots`] so the report always sees the same ordering.

use crate::report_data::HotspotFunction;
use std::cmp::Ordering;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Number of hotspots kept in the analysis (and the JSON report).
pub const MAX_HOTSPOTS: usize = 20;

/// Number of hotspots shown in the Markdown table.
pub const MAX_TABLE_ROWS: usize = 10;

/// Percentage above which a single function is the primary optimization target.
pub const CRITICAL_HOTSPOT_PERCENT: f64 = 10.0;

/// Percentage above which a function counts as "high CPU".
pub const HIGH_CPU_PERCENT: f64 = 5.0;

/// Sort hotspots by CPU time (descending) and keep the top [`MAX_HOTSPOTS`].
///
/// The sort is stable, so functions with equal CPU time keep their report order.
#[must_use]
pub fn rank_hotspots(mut hotspots: Vec<HotspotFunction>) -> Vec<HotspotFunction> {
    hotspots.sort_by(|a, b| b.cpu_time.partial_cmp(&a.cpu_time).unwrap_or(Ordering::Equal));
    hotspots.truncate(MAX_HOTSPOTS);
    hotspots
}

/// Hotspots whose share of CPU time exceeds [`HIGH_CPU_PERCENT`].
pub fn high_cpu_hotspots(hotspots: &[HotspotFunction]) -> impl Iterator<Item = &HotspotFunction> {
    hotspots.iter().filter(|h| h.cpu_time_percent > HIGH_CPU_PERCENT)
}
