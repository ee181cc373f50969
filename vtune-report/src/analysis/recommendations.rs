//! Threshold-based optimization hints.
//!
//! A fixed decision table: each rule looks at one or two metrics and emits at
//! most one message. Rules never interact, and the table order (hotspots,
//! memory, concurrency, microarchitecture) is the output order.

use crate::analysis::hotspot_analyzer::{
    high_cpu_hotspots, CRITICAL_HOTSPOT_PERCENT, HIGH_CPU_PERCENT,
};
use crate::report_data::PerformanceAnalysis;

/// Emitted when no rule fires.
pub const NO_BOTTLENECK_MESSAGE: &str =
    "✅ No significant performance bottleneck found; try a finer-grained analysis";

const L3_MISS_PERCENT: f64 = 20.0;
const DTLB_MISS_PERCENT: f64 = 1.0;
const LOW_CPU_UTILIZATION_PERCENT: f64 = 60.0;
const WAIT_TIME_PERCENT: f64 = 10.0;
const HIGH_CPI: f64 = 2.0;
const BACKEND_STALL_PERCENT: f64 = 30.0;
const MIN_HIGH_CPU_FUNCTIONS: usize = 3;

/// Which part of the report a rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RuleCategory {
    Hotspots,
    Memory,
    Concurrency,
    Microarchitecture,
}

/// One row of the decision table.
pub struct Rule {
    pub name: &'static str,
    pub category: RuleCategory,
    evaluate: fn(&PerformanceAnalysis) -> Option<String>,
}

impl Rule {
    #[must_use]
    pub fn evaluate(&self, analysis: &PerformanceAnalysis) -> Option<String> {
        (self.evaluate)(analysis)
    }
}

/// All rules, in output order.
pub const RULES: &[Rule] = &[
    Rule { name: "critical-hotspot", category: RuleCategory::Hotspots, evaluate: critical_hotspot },
    Rule { name: "many-high-cpu", category: RuleCategory::Hotspots, evaluate: many_high_cpu },
    Rule { name: "l3-misses", category: RuleCategory::Memory, evaluate: l3_misses },
    Rule { name: "dtlb-misses", category: RuleCategory::Memory, evaluate: dtlb_misses },
    Rule { name: "low-utilization", category: RuleCategory::Concurrency, evaluate: low_utilization },
    Rule { name: "wait-time", category: RuleCategory::Concurrency, evaluate: wait_time },
    Rule { name: "high-cpi", category: RuleCategory::Microarchitecture, evaluate: high_cpi },
    Rule {
        name: "backend-stalls",
        category: RuleCategory::Microarchitecture,
        evaluate: backend_stalls,
    },
];

/// Run every rule against the analysis.
///
/// Deterministic: the same analysis always yields the same list. Never empty.
#[must_use]
pub fn generate_recommendations(analysis: &PerformanceAnalysis) -> Vec<String> {
    let mut recommendations: Vec<String> =
        RULES.iter().filter_map(|rule| rule.evaluate(analysis)).collect();

    if recommendations.is_empty() {
        recommendations.push(NO_BOTTLENECK_MESSAGE.to_string());
    }
    recommendations
}

fn critical_hotspot(analysis: &PerformanceAnalysis) -> Option<String> {
    let top = analysis.top_hotspot()?;
    (top.cpu_time_percent > CRITICAL_HOTSPOT_PERCENT).then(|| {
        format!(
            "🔥 Critical hotspot: {} takes {:.1}% of CPU time and is the primary optimization target",
            top.name, top.cpu_time_percent
        )
    })
}

fn many_high_cpu(analysis: &PerformanceAnalysis) -> Option<String> {
    let count = high_cpu_hotspots(&analysis.hotspots).count();
    (count > MIN_HIGH_CPU_FUNCTIONS).then(|| {
        format!(
            "📊 {count} functions use more than {HIGH_CPU_PERCENT:.0}% of CPU time each; optimize them one by one"
        )
    })
}

fn l3_misses(analysis: &PerformanceAnalysis) -> Option<String> {
    let l3 = analysis.memory.as_ref()?.l3_misses?;
    (l3 > L3_MISS_PERCENT).then(|| {
        format!(
            "💾 L3 cache miss rate of {l3:.1}% is high. Consider: 1) software prefetching \
             2) a more cache-friendly data layout 3) a smaller working set"
        )
    })
}

fn dtlb_misses(analysis: &PerformanceAnalysis) -> Option<String> {
    let dtlb = analysis.memory.as_ref()?.dtlb_misses?;
    (dtlb > DTLB_MISS_PERCENT).then(|| {
        format!("📄 DTLB miss rate of {dtlb:.1}% is high; consider enabling huge pages (2MB)")
    })
}

fn low_utilization(analysis: &PerformanceAnalysis) -> Option<String> {
    let utilization = analysis.threading.as_ref()?.cpu_utilization?;
    (utilization < LOW_CPU_UTILIZATION_PERCENT).then(|| {
        format!(
            "⚠️ CPU utilization is only {utilization:.1}%; threads are underused, \
             check load balancing and synchronization overhead"
        )
    })
}

fn wait_time(analysis: &PerformanceAnalysis) -> Option<String> {
    let wait = analysis.threading.as_ref()?.wait_time_percent?;
    (wait > WAIT_TIME_PERCENT).then(|| {
        format!(
            "⏳ Threads spend {wait:.1}% of their time waiting. Consider: 1) fewer \
             synchronization points 2) lock-free data structures 3) coarser batch granularity"
        )
    })
}

fn high_cpi(analysis: &PerformanceAnalysis) -> Option<String> {
    let cpi = analysis.microarch.as_ref()?.cpi?;
    (cpi > HIGH_CPI).then(|| {
        format!(
            "🔧 CPI (Cycles Per Instruction) of {cpi:.2} is high, pointing to a pipeline \
             bottleneck; look into memory access patterns and instruction dependencies"
        )
    })
}

fn backend_stalls(analysis: &PerformanceAnalysis) -> Option<String> {
    let stalls = analysis.microarch.as_ref()?.backend_stall_percent?;
    (stalls > BACKEND_STALL_PERCENT).then(|| {
        format!(
            "🚧 Back-end stalls account for {stalls:.1}% of cycles, mostly from slow memory \
             access or saturated execution units"
        )
    })
}
