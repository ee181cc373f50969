//! Bounded `vtune -report hotspots` subprocess.

use crate::domain::ProfilerError;
use crate::parsing::read_hotspots;
use crate::report_data::HotspotFunction;
use log::{debug, info, warn};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// How long `vtune -report` may run before it is killed.
pub const DEFAULT_VTUNE_TIMEOUT: Duration = Duration::from_secs(30);

/// Default program name, resolved through `PATH`.
pub const DEFAULT_VTUNE_PROGRAM: &str = "vtune";

/// How to invoke the VTune command-line tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VtuneCommand {
    pub program: PathBuf,
    pub timeout: Duration,
}

impl Default for VtuneCommand {
    fn default() -> Self {
        Self { program: PathBuf::from(DEFAULT_VTUNE_PROGRAM), timeout: DEFAULT_VTUNE_TIMEOUT }
    }
}

impl VtuneCommand {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn report_args(result_dir: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> =
            ["-report", "hotspots", "-result-dir"].iter().map(OsString::from).collect();
        args.push(result_dir.as_os_str().to_owned());
        args.extend(["-format", "csv", "-csv-delimiter", "comma"].iter().map(OsString::from));
        args
    }

    /// Run `vtune -report hotspots` for a result directory and return its CSV
    /// output. The child is killed if it outlives `timeout`.
    ///
    /// # Errors
    /// Returns an error if the program cannot be started, times out, or exits
    /// with a non-zero status.
    pub fn report_hotspots_csv(&self, result_dir: &Path) -> Result<String, ProfilerError> {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        let mut command = Command::new(&self.program);
        command
            .args(Self::report_args(result_dir))
            .stdin(Stdio::null())
            .kill_on_drop(true);

        debug!("Running {} -report hotspots on {}", self.program.display(), result_dir.display());
        let output = runtime
            .block_on(async { tokio::time::timeout(self.timeout, command.output()).await })
            .map_err(|_| ProfilerError::TimedOut {
                program: self.program.clone(),
                timeout: self.timeout,
            })?
            .map_err(|source| ProfilerError::SpawnFailed { program: self.program.clone(), source })?;

        if !output.status.success() {
            return Err(ProfilerError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Best-effort hotspot extraction through the VTune CLI.
///
/// Any failure is logged and yields an empty list. Rows come back in report
/// order; ranking is left to the caller.
#[must_use]
pub fn hotspots_from_vtune(command: &VtuneCommand, result_dir: &Path) -> Vec<HotspotFunction> {
    info!(
        "No hotspots in {}, asking {} for a report",
        result_dir.display(),
        command.program.display()
    );

    let csv = match command.report_hotspots_csv(result_dir) {
        Ok(csv) => csv,
        Err(e) => {
            warn!("Could not extract hotspots via vtune: {e}");
            return Vec::new();
        }
    };

    read_hotspots(csv.as_bytes()).unwrap_or_else(|e| {
        warn!("Could not parse vtune hotspots report: {e}");
        Vec::new()
    })
}
