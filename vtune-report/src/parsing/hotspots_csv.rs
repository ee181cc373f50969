//! Reader for `vtune -report hotspots -format csv` output.

use crate::parsing::units::{parse_percent, parse_time};
use crate::report_data::HotspotFunction;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::warn;
use std::io::Read;

/// Column aliases per logical field, in priority order.
pub const FUNCTION_COLUMNS: &[&str] = &["Function", "Function Stack"];
pub const CPU_TIME_COLUMNS: &[&str] = &["CPU Time", "CPU Time:Self"];
pub const CPU_PERCENT_COLUMNS: &[&str] = &["CPU Time:Self %", "% of Total"];
pub const MODULE_COLUMNS: &[&str] = &["Module", "Module Name"];

const UNKNOWN: &str = "Unknown";

/// Header positions of the logical hotspot fields.
///
/// Resolved once per file: the first alias present in the header wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub function: Option<usize>,
    pub cpu_time: Option<usize>,
    pub cpu_time_percent: Option<usize>,
    pub module: Option<usize>,
}

impl ColumnMap {
    #[must_use]
    pub fn from_headers(headers: &StringRecord) -> Self {
        Self {
            function: find_column(headers, FUNCTION_COLUMNS),
            cpu_time: find_column(headers, CPU_TIME_COLUMNS),
            cpu_time_percent: find_column(headers, CPU_PERCENT_COLUMNS),
            module: find_column(headers, MODULE_COLUMNS),
        }
    }

    /// Build a hotspot from one record.
    ///
    /// Missing cells fall back to `"Unknown"` / `0`. Returns `None` when the
    /// row carries no CPU time, which is how VTune pads its exports.
    #[must_use]
    pub fn hotspot(&self, record: &StringRecord) -> Option<HotspotFunction> {
        let cpu_time = cell(record, self.cpu_time).map_or(0.0, parse_time);
        if cpu_time <= 0.0 {
            return None;
        }

        Some(HotspotFunction {
            name: cell(record, self.function).unwrap_or(UNKNOWN).to_string(),
            cpu_time,
            cpu_time_percent: cell(record, self.cpu_time_percent).map_or(0.0, parse_percent),
            module: cell(record, self.module).unwrap_or(UNKNOWN).to_string(),
        })
    }
}

fn find_column(headers: &StringRecord, aliases: &[&str]) -> Option<usize> {
    aliases.iter().find_map(|alias| headers.iter().position(|h| h == *alias))
}

fn cell(record: &StringRecord, index: Option<usize>) -> Option<&str> {
    index.and_then(|i| record.get(i))
}

/// Read hotspot rows from CSV text, in file order.
///
/// Malformed records are logged and skipped. Only an unreadable header is an
/// error, since without it no column can be resolved.
///
/// # Errors
/// Returns the CSV error if the header row cannot be read.
pub fn read_hotspots<R: Read>(reader: R) -> Result<Vec<HotspotFunction>, csv::Error> {
    let mut csv_reader =
        ReaderBuilder::new().flexible(true).trim(Trim::All).from_reader(reader);

    let columns = ColumnMap::from_headers(csv_reader.headers()?);
    if columns.cpu_time.is_none() {
        warn!("hotspots CSV has no CPU time column (expected one of {CPU_TIME_COLUMNS:?})");
    }

    let mut hotspots = Vec::new();
    for result in csv_reader.records() {
        match result {
            Ok(record) => hotspots.extend(columns.hotspot(&record)),
            Err(e) => warn!("Skipping malformed hotspots row: {e}"),
        }
    }

    Ok(hotspots)
}
