//! Analysis of a single VTune result directory.
//!
//! ```text
//! <result_dir>/
//!     hotspots.csv   (optional)  ─┐
//!     summary.csv    (optional)   ├─► PerformanceAnalysis ─► recommendations
//!     vtune -report  (fallback)  ─┘
//! ```
//!
//! Nothing in here fails: missing or malformed inputs are logged and the
//! report is built from whatever could be read.

use crate::analysis::hotspot_analyzer::rank_hotspots;
use crate::analysis::recommendations::generate_recommendations;
use crate::domain::types::benchmark_from_dir_name;
use crate::domain::AnalysisType;
use crate::parsing::{read_hotspots, read_summary, SummaryTable};
use crate::profiling::{hotspots_from_vtune, VtuneCommand};
use crate::report_data::{
    HotspotFunction, MemoryMetrics, MicroarchMetrics, PerformanceAnalysis, ThreadingMetrics,
};
use log::{debug, warn};
use std::fs::File;
use std::path::Path;

pub const HOTSPOTS_CSV: &str = "hotspots.csv";
pub const SUMMARY_CSV: &str = "summary.csv";

/// Analyzer settings.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    /// VTune CLI used when `hotspots.csv` has nothing to offer.
    /// `None` disables the fallback.
    pub vtune: Option<VtuneCommand>,
}

/// Analyze one result directory.
#[must_use]
pub fn analyze(result_dir: &Path, config: &AnalyzerConfig) -> PerformanceAnalysis {
    let dir_name = result_dir_name(result_dir);
    let analysis_type = AnalysisType::from_dir_name(&dir_name);
    let benchmark = benchmark_from_dir_name(&dir_name);
    debug!("Analyzing {} as {analysis_type} (benchmark: {benchmark})", result_dir.display());

    let mut hotspots = load_hotspots_csv(&result_dir.join(HOTSPOTS_CSV));
    if hotspots.is_empty() {
        if let Some(vtune) = &config.vtune {
            hotspots = hotspots_from_vtune(vtune, result_dir);
        }
    }

    let summary = load_summary_csv(&result_dir.join(SUMMARY_CSV));
    debug!("{SUMMARY_CSV}: {} entries", summary.len());

    let mut analysis = PerformanceAnalysis::new(analysis_type, benchmark, rank_hotspots(hotspots));

    // TODO: fill these blocks from summary.csv once the metric names of each
    // VTune collection are pinned down; until then every field is "not measured".
    match analysis_type {
        AnalysisType::MemoryAccess => analysis.memory = Some(MemoryMetrics::default()),
        AnalysisType::Threading => analysis.threading = Some(ThreadingMetrics::default()),
        AnalysisType::UarchExploration => analysis.microarch = Some(MicroarchMetrics::default()),
        AnalysisType::Hotspots | AnalysisType::Unknown => {}
    }

    analysis.recommendations = generate_recommendations(&analysis);
    analysis
}

/// Directory name used for type/benchmark inference.
///
/// Paths like `.` have no final component, so fall back to the canonical path.
fn result_dir_name(result_dir: &Path) -> String {
    if let Some(name) = result_dir.file_name() {
        return name.to_string_lossy().into_owned();
    }
    std::fs::canonicalize(result_dir)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_default()
}

/// Read `hotspots.csv` if present. Unranked.
#[must_use]
pub fn load_hotspots_csv(path: &Path) -> Vec<HotspotFunction> {
    if !path.is_file() {
        return Vec::new();
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            warn!("Failed to open {}: {e}", path.display());
            return Vec::new();
        }
    };

    read_hotspots(file).unwrap_or_else(|e| {
        warn!("Failed to parse {}: {e}", path.display());
        Vec::new()
    })
}

/// Read `summary.csv` if present.
#[must_use]
pub fn load_summary_csv(path: &Path) -> SummaryTable {
    if !path.is_file() {
        return SummaryTable::default();
    }

    match File::open(path) {
        Ok(file) => read_summary(file),
        Err(e) => {
            warn!("Failed to open {}: {e}", path.display());
            SummaryTable::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::recommendations::NO_BOTTLENECK_MESSAGE;
    use std::fs;

    fn no_fallback() -> AnalyzerConfig {
        AnalyzerConfig { vtune: None }
    }

    #[test]
    fn test_empty_directory_yields_fallback_report() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("hotspots_empty_bench");
        fs::create_dir(&dir).unwrap();

        let analysis = analyze(&dir, &no_fallback());

        assert_eq!(analysis.analysis_type, AnalysisType::Hotspots);
        assert_eq!(analysis.benchmark, "empty_bench");
        assert!(analysis.hotspots.is_empty());
        assert_eq!(analysis.recommendations, vec![NO_BOTTLENECK_MESSAGE.to_string()]);
    }

    #[test]
    fn test_missing_vtune_binary_is_not_fatal() {
        let temp = tempfile::tempdir().unwrap();
        let config =
            AnalyzerConfig { vtune: Some(VtuneCommand::new("/nonexistent/bin/vtune")) };

        let analysis = analyze(temp.path(), &config);
        assert!(analysis.hotspots.is_empty());
        assert_eq!(analysis.recommendations.len(), 1);
    }

    #[test]
    fn test_metric_block_follows_analysis_type() {
        let temp = tempfile::tempdir().unwrap();
        for (name, memory, threading, microarch) in [
            ("memory_b", true, false, false),
            ("threading_b", false, true, false),
            ("uarch_b", false, false, true),
            ("hotspots_b", false, false, false),
        ] {
            let dir = temp.path().join(name);
            fs::create_dir(&dir).unwrap();
            let analysis = analyze(&dir, &no_fallback());

            assert_eq!(analysis.memory.is_some(), memory, "{name}");
            assert_eq!(analysis.threading.is_some(), threading, "{name}");
            assert_eq!(analysis.microarch.is_some(), microarch, "{name}");
        }
    }

    #[test]
    fn test_hotspots_csv_is_ranked() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("hotspots_ranked");
        fs::create_dir(&dir).unwrap();
        fs::write(
            dir.join(HOTSPOTS_CSV),
            "Function,CPU Time,CPU Time:Self %,Module\n\
             small,1s,5%,app\n\
             big,10s,50%,app\n",
        )
        .unwrap();

        let analysis = analyze(&dir, &no_fallback());
        assert_eq!(analysis.hotspots[0].name, "big");
        assert!(analysis.recommendations[0].contains("big"));
    }

    #[test]
    fn test_result_dir_name_of_dot() {
        assert!(!result_dir_name(Path::new(".")).is_empty());
    }
}
