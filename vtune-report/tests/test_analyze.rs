use std::path::Path;
use vtune_report::analysis::{analyze, AnalyzerConfig, MAX_HOTSPOTS, NO_BOTTLENECK_MESSAGE};
use vtune_report::domain::AnalysisType;

fn no_fallback() -> AnalyzerConfig {
    AnalyzerConfig { vtune: None }
}

#[test]
fn test_hotspots_fixture_is_ranked_and_truncated() {
    let dir = Path::new("tests/fixtures/hotspots_koios_dla_like_large");
    let analysis = analyze(dir, &no_fallback());

    assert_eq!(analysis.analysis_type, AnalysisType::Hotspots);
    assert_eq!(analysis.benchmark, "koios_dla_like_large");

    // 25 valid rows, 2 junk rows
    assert_eq!(analysis.hotspots.len(), MAX_HOTSPOTS);
    for pair in analysis.hotspots.windows(2) {
        assert!(pair[0].cpu_time >= pair[1].cpu_time, "Hotspots should be sorted by CPU time");
    }

    let top = &analysis.hotspots[0];
    assert_eq!(top.name, "t_route_timing::update_slack");
    assert!((top.cpu_time - 9.87).abs() < 1e-9);
    assert!((top.cpu_time_percent - 24.26).abs() < 1e-9);
    assert_eq!(top.module, "vpr");

    assert_eq!(analysis.hotspots[19].name, "_int_malloc");
    assert!(analysis.hotspots.iter().all(|h| h.name != "RouterLookahead::get_expected_cost"));
    assert!(analysis.hotspots.iter().all(|h| h.name != "broken_row"));
}

#[test]
fn test_hotspots_fixture_recommendations() {
    let dir = Path::new("tests/fixtures/hotspots_koios_dla_like_large");
    let analysis = analyze(dir, &no_fallback());

    assert_eq!(analysis.recommendations.len(), 2);
    assert!(analysis.recommendations[0].contains("t_route_timing::update_slack"));
    assert!(analysis.recommendations[0].contains("24.3%"));
    assert!(analysis.recommendations[1].contains("6 functions"));
}

#[test]
fn test_alternate_column_names() {
    let dir = Path::new("tests/fixtures/memory_sha_large");
    let analysis = analyze(dir, &no_fallback());

    assert_eq!(analysis.analysis_type, AnalysisType::MemoryAccess);
    assert_eq!(analysis.benchmark, "sha_large");

    let names: Vec<_> = analysis.hotspots.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["process_block", "sha256_block_data_order", "memcpy", "main"]);
    assert_eq!(analysis.hotspots[1].module, "libcrypto.so.3");
    assert!((analysis.hotspots[1].cpu_time - 0.85).abs() < 1e-9);
    assert!((analysis.hotspots[3].cpu_time - 0.0005).abs() < 1e-12);

    // Memory block present but nothing measured yet
    let memory = analysis.memory.as_ref().expect("memory block");
    assert!(memory.l3_misses.is_none());
    assert!(analysis.threading.is_none());
}

#[test]
fn test_directory_without_csv_files() {
    let dir = Path::new("tests/fixtures/threading_empty");
    let analysis = analyze(dir, &no_fallback());

    assert_eq!(analysis.analysis_type, AnalysisType::Threading);
    assert!(analysis.hotspots.is_empty());
    assert!(analysis.threading.is_some());
    assert_eq!(analysis.recommendations, vec![NO_BOTTLENECK_MESSAGE.to_string()]);
}
