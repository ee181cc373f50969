//! Report data model
//!
//! These structures are rebuilt from scratch for every result directory and
//! serialized as-is for the JSON report. Metric fields are `Option`s: `None`
//! means "not measured", which is not the same as zero.

use crate::domain::AnalysisType;
use serde::Serialize;

/// A function ranked by CPU time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotspotFunction {
    /// Function name as reported by VTune (may be a demangled signature).
    #[serde(rename = "function_name")]
    pub name: String,

    /// CPU time in seconds.
    pub cpu_time: f64,

    /// Share of total CPU time (0.0 - 100.0).
    pub cpu_time_percent: f64,

    /// Binary or shared object the function lives in.
    pub module: String,
}

/// Memory access metrics (memory-access collection).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemoryMetrics {
    /// Miss rates in percent.
    pub l1_misses: Option<f64>,
    pub l2_misses: Option<f64>,
    pub l3_misses: Option<f64>,
    pub dtlb_misses: Option<f64>,
    pub memory_bandwidth_gb_s: Option<f64>,
}

/// Threading / concurrency metrics (threading collection).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThreadingMetrics {
    /// Effective CPU utilization in percent.
    pub cpu_utilization: Option<f64>,
    pub thread_count: Option<u32>,
    pub wait_time_percent: Option<f64>,
    pub load_imbalance: Option<f64>,
}

/// Microarchitecture metrics (uarch-exploration collection).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MicroarchMetrics {
    /// Cycles per instruction.
    pub cpi: Option<f64>,
    pub frontend_stall_percent: Option<f64>,
    pub backend_stall_percent: Option<f64>,
    pub branch_mispred_percent: Option<f64>,
}

/// Complete analysis of one VTune result directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceAnalysis {
    pub analysis_type: AnalysisType,
    pub benchmark: String,

    /// Top functions, sorted by `cpu_time` descending.
    pub hotspots: Vec<HotspotFunction>,

    pub memory: Option<MemoryMetrics>,
    pub threading: Option<ThreadingMetrics>,
    pub microarch: Option<MicroarchMetrics>,

    pub recommendations: Vec<String>,
}

impl PerformanceAnalysis {
    /// Create an analysis with no metric blocks and no recommendations yet.
    #[must_use]
    pub fn new(analysis_type: AnalysisType, benchmark: String, hotspots: Vec<HotspotFunction>) -> Self {
        Self {
            analysis_type,
            benchmark,
            hotspots,
            memory: None,
            threading: None,
            microarch: None,
            recommendations: Vec::new(),
        }
    }

    /// The function with the most CPU time, if any.
    #[must_use]
    pub fn top_hotspot(&self) -> Option<&HotspotFunction> {
        self.hotspots.first()
    }
}
