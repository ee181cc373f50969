//! Markdown report.
//!
//! Section order is fixed: metadata, hotspots table, memory, threading,
//! microarchitecture, recommendations, footer. Metric sections appear only
//! when the analysis carries that block, and list only measured fields.

use crate::analysis::MAX_TABLE_ROWS;
use crate::report_data::{MemoryMetrics, MicroarchMetrics, PerformanceAnalysis, ThreadingMetrics};
use std::fmt::Write;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Details that are not part of the analysis itself.
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub result_dir: PathBuf,
    pub generated_at: String,
}

impl ReportContext {
    #[must_use]
    pub fn new(result_dir: &Path, generated_at: impl Into<String>) -> Self {
        Self { result_dir: result_dir.to_path_buf(), generated_at: generated_at.into() }
    }

    /// Context stamped with the current local time.
    #[must_use]
    pub fn now(result_dir: &Path) -> Self {
        Self::new(result_dir, chrono::Local::now().format(TIMESTAMP_FORMAT).to_string())
    }
}

/// Render the Markdown report.
#[must_use]
pub fn render_markdown(analysis: &PerformanceAnalysis, context: &ReportContext) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_document(&mut out, analysis, context);
    out
}

fn write_document(
    out: &mut String,
    analysis: &PerformanceAnalysis,
    context: &ReportContext,
) -> std::fmt::Result {
    write_header(out, analysis, context)?;
    write_hotspots(out, analysis)?;
    if let Some(memory) = &analysis.memory {
        write_memory(out, memory)?;
    }
    if let Some(threading) = &analysis.threading {
        write_threading(out, threading)?;
    }
    if let Some(microarch) = &analysis.microarch {
        write_microarch(out, microarch)?;
    }
    write_recommendations(out, &analysis.recommendations)?;
    write_footer(out, context)
}

fn write_header(
    out: &mut String,
    analysis: &PerformanceAnalysis,
    context: &ReportContext,
) -> std::fmt::Result {
    writeln!(out, "# VTune Performance Analysis Report\n")?;
    writeln!(out, "**Analysis type**: {}  ", analysis.analysis_type)?;
    writeln!(out, "**Benchmark**: {}  ", analysis.benchmark)?;
    writeln!(out, "**Generated**: {}\n", context.generated_at)?;
    writeln!(out, "---\n")
}

fn write_hotspots(out: &mut String, analysis: &PerformanceAnalysis) -> std::fmt::Result {
    if analysis.hotspots.is_empty() {
        return Ok(());
    }

    writeln!(out, "## 🔥 CPU Hotspots (Top {MAX_TABLE_ROWS})\n")?;
    writeln!(out, "| Rank | Function | CPU Time | Share | Module |")?;
    writeln!(out, "|------|----------|----------|-------|--------|")?;
    for (rank, hotspot) in analysis.hotspots.iter().take(MAX_TABLE_ROWS).enumerate() {
        writeln!(
            out,
            "| {} | `{}` | {:.3}s | **{:.1}%** | {} |",
            rank + 1,
            escape_cell(&hotspot.name),
            hotspot.cpu_time,
            hotspot.cpu_time_percent,
            escape_cell(&hotspot.module),
        )?;
    }
    writeln!(out)
}

fn write_memory(out: &mut String, memory: &MemoryMetrics) -> std::fmt::Result {
    writeln!(out, "## 💾 Memory Access\n")?;
    if let Some(v) = memory.l1_misses {
        writeln!(out, "- **L1 cache miss rate**: {v:.2}%")?;
    }
    if let Some(v) = memory.l2_misses {
        writeln!(out, "- **L2 cache miss rate**: {v:.2}%")?;
    }
    if let Some(v) = memory.l3_misses {
        writeln!(out, "- **L3 cache miss rate**: {v:.2}%")?;
    }
    if let Some(v) = memory.dtlb_misses {
        writeln!(out, "- **DTLB miss rate**: {v:.2}%")?;
    }
    if let Some(v) = memory.memory_bandwidth_gb_s {
        writeln!(out, "- **Memory bandwidth**: {v:.2} GB/s")?;
    }
    writeln!(out)
}

fn write_threading(out: &mut String, threading: &ThreadingMetrics) -> std::fmt::Result {
    writeln!(out, "## 🧵 Threading\n")?;
    if let Some(v) = threading.cpu_utilization {
        writeln!(out, "- **CPU utilization**: {v:.1}%")?;
    }
    if let Some(v) = threading.thread_count {
        writeln!(out, "- **Threads**: {v}")?;
    }
    if let Some(v) = threading.wait_time_percent {
        writeln!(out, "- **Wait time**: {v:.1}%")?;
    }
    if let Some(v) = threading.load_imbalance {
        writeln!(out, "- **Load imbalance**: {v:.1}%")?;
    }
    writeln!(out)
}

fn write_microarch(out: &mut String, microarch: &MicroarchMetrics) -> std::fmt::Result {
    writeln!(out, "## ⚙️ Microarchitecture\n")?;
    if let Some(v) = microarch.cpi {
        writeln!(out, "- **CPI (Cycles Per Instruction)**: {v:.2}")?;
    }
    if let Some(v) = microarch.frontend_stall_percent {
        writeln!(out, "- **Front-end stalls**: {v:.1}%")?;
    }
    if let Some(v) = microarch.backend_stall_percent {
        writeln!(out, "- **Back-end stalls**: {v:.1}%")?;
    }
    if let Some(v) = microarch.branch_mispred_percent {
        writeln!(out, "- **Branch mispredictions**: {v:.1}%")?;
    }
    writeln!(out)
}

fn write_recommendations(out: &mut String, recommendations: &[String]) -> std::fmt::Result {
    if recommendations.is_empty() {
        return Ok(());
    }

    writeln!(out, "## 💡 Recommendations\n")?;
    for (i, rec) in recommendations.iter().enumerate() {
        writeln!(out, "{}. {rec}\n", i + 1)?;
    }
    Ok(())
}

fn write_footer(out: &mut String, context: &ReportContext) -> std::fmt::Result {
    writeln!(out, "---\n")?;
    writeln!(out, "**Profiler**: Intel VTune Profiler  ")?;
    writeln!(out, "**Result directory**: `{}`", context.result_dir.display())
}

/// Keep table rows intact when a C++ signature contains `|` (e.g. `operator|`).
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
