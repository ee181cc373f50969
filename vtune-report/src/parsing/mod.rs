//! Tolerant readers for VTune CSV exports
//!
//! VTune's CSV column names drift between releases ("CPU Time" vs
//! "CPU Time:Self"), values carry unit suffixes, and exports occasionally
//! contain ragged rows. Everything here degrades to defaults instead of
//! failing the report.

pub mod hotspots_csv;
pub mod summary;
pub mod units;

pub use hotspots_csv::{read_hotspots, ColumnMap};
pub use summary::{read_summary, SummaryTable};
pub use units::{parse_percent, parse_time};
