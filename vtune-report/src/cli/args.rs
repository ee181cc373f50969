//! CLI argument definitions

use crate::analysis::AnalyzerConfig;
use crate::batch::RunOptions;
use crate::export::ReportFormat;
use crate::profiling::vtune_cli::DEFAULT_VTUNE_PROGRAM;
use crate::profiling::VtuneCommand;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "vtune-report",
    version,
    about = "Summarize Intel VTune results and suggest optimizations",
    after_help = "\
EXAMPLES:
    vtune-report -d vtune_results/hotspots_koios_dla_like_large   Analyze one result directory
    vtune-report -a vtune_results/                                 Analyze every result directory
    vtune-report -d vtune_results/hotspots_test -f json            Write analysis.json instead"
)]
pub struct Args {
    /// VTune result directory to analyze
    #[arg(short, long, value_name = "DIR", conflicts_with = "all")]
    pub dir: Option<PathBuf>,

    /// Analyze every result directory under this directory
    #[arg(short, long, value_name = "DIR")]
    pub all: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Markdown)]
    pub format: ReportFormat,

    /// Report path (default: ANALYSIS_REPORT.md or analysis.json in the result directory)
    #[arg(short, long, value_name = "FILE", conflicts_with = "all")]
    pub output: Option<PathBuf>,

    /// VTune command-line tool used when hotspots.csv is missing
    #[arg(long, value_name = "PATH", env = "VTUNE_BIN", default_value = DEFAULT_VTUNE_PROGRAM)]
    pub vtune: PathBuf,

    /// Seconds to wait for the VTune command-line tool
    #[arg(long, value_name = "SECS", default_value = "30")]
    pub vtune_timeout: u64,

    /// Never invoke the VTune command-line tool
    #[arg(long)]
    pub no_vtune: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Analyzer and report settings derived from the arguments.
    #[must_use]
    pub fn run_options(&self) -> RunOptions {
        let vtune = (!self.no_vtune).then(|| {
            VtuneCommand::new(&self.vtune).with_timeout(Duration::from_secs(self.vtune_timeout))
        });

        RunOptions { format: self.format, analyzer: AnalyzerConfig { vtune }, quiet: self.quiet }
    }
}
