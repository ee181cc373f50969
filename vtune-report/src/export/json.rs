//! JSON report: a direct serde dump of the analysis.

use crate::domain::ReportError;
use crate::report_data::PerformanceAnalysis;

/// Serialize an analysis as pretty-printed JSON (with trailing newline).
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_json(analysis: &PerformanceAnalysis) -> Result<String, ReportError> {
    let mut json = serde_json::to_string_pretty(analysis)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AnalysisType;
    use crate::report_data::{HotspotFunction, ThreadingMetrics};

    #[test]
    fn test_json_round_trips_through_value() {
        let mut analysis = PerformanceAnalysis::new(
            AnalysisType::Threading,
            "koios_dla_like_large".to_string(),
            vec![HotspotFunction {
                name: "Router::try_route".to_string(),
                cpu_time: 3.25,
                cpu_time_percent: 41.5,
                module: "vpr".to_string(),
            }],
        );
        analysis.threading =
            Some(ThreadingMetrics { thread_count: Some(16), ..ThreadingMetrics::default() });
        analysis.recommendations = vec!["🔥 hot".to_string()];

        let json = to_json(&analysis).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["analysis_type"], "threading");
        assert_eq!(value["benchmark"], "koios_dla_like_large");
        assert_eq!(value["hotspots"][0]["cpu_time"], 3.25);
        assert_eq!(value["threading"]["thread_count"], 16);
        assert!(value["threading"]["cpu_utilization"].is_null());
        assert!(value["memory"].is_null());
        // Non-ASCII is written verbatim, not escaped.
        assert!(json.contains("🔥"));
    }
}
