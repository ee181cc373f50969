//! Domain types providing compile-time safety and self-documentation

use serde::Serialize;
use std::fmt;

/// Kind of VTune collection a result directory holds.
///
/// VTune does not record this in the CSV exports, so it is inferred from the
/// result directory name (e.g. `memory_koios_dla_like_large`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisType {
    Hotspots,
    MemoryAccess,
    Threading,
    UarchExploration,
    Unknown,
}

impl AnalysisType {
    /// Infer the analysis type from a result directory name.
    ///
    /// Patterns are checked in order, so `hotspots_memory_x` is a hotspots run.
    #[must_use]
    pub fn from_dir_name(dir_name: &str) -> Self {
        if dir_name.contains("hotspots") {
            AnalysisType::Hotspots
        } else if dir_name.contains("memory") {
            AnalysisType::MemoryAccess
        } else if dir_name.contains("threading") {
            AnalysisType::Threading
        } else if dir_name.contains("uarch") {
            AnalysisType::UarchExploration
        } else {
            AnalysisType::Unknown
        }
    }

    /// Name used in reports, matching the VTune collection name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisType::Hotspots => "hotspots",
            AnalysisType::MemoryAccess => "memory-access",
            AnalysisType::Threading => "threading",
            AnalysisType::UarchExploration => "uarch-exploration",
            AnalysisType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract the benchmark name from a result directory name.
///
/// Result directories are named `<collection>_<benchmark>`, so everything
/// after the first underscore is the benchmark:
/// `hotspots_koios_dla_like_large` → `koios_dla_like_large`.
#[must_use]
pub fn benchmark_from_dir_name(dir_name: &str) -> String {
    match dir_name.split_once('_') {
        Some((_, benchmark)) => benchmark.to_string(),
        None => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_type_from_dir_name() {
        assert_eq!(AnalysisType::from_dir_name("hotspots_bench"), AnalysisType::Hotspots);
        assert_eq!(AnalysisType::from_dir_name("memory_bench"), AnalysisType::MemoryAccess);
        assert_eq!(AnalysisType::from_dir_name("threading_bench"), AnalysisType::Threading);
        assert_eq!(AnalysisType::from_dir_name("uarch_bench"), AnalysisType::UarchExploration);
        assert_eq!(AnalysisType::from_dir_name("r000hs"), AnalysisType::Unknown);
    }

    #[test]
    fn test_hotspots_wins_over_later_patterns() {
        assert_eq!(AnalysisType::from_dir_name("hotspots_memory_bound"), AnalysisType::Hotspots);
    }

    #[test]
    fn test_analysis_type_serializes_kebab_case() {
        let json = serde_json::to_string(&AnalysisType::UarchExploration).unwrap();
        assert_eq!(json, "\"uarch-exploration\"");
        assert_eq!(AnalysisType::MemoryAccess.to_string(), "memory-access");
    }

    #[test]
    fn test_benchmark_from_dir_name() {
        assert_eq!(benchmark_from_dir_name("hotspots_koios_dla_like_large"), "koios_dla_like_large");
        assert_eq!(benchmark_from_dir_name("hotspots"), "unknown");
        assert_eq!(benchmark_from_dir_name("memory_"), "");
    }
}
