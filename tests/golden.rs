//! Golden file integration tests.
//!
//! Reads tests/testdata/gearspeed_golden.json and verifies the full
//! analysis of the standard kit reproduces the known results.

use std::collections::BTreeMap;

use serde::Deserialize;

use gearspeed_core::{AnalysisOptions, DrivetrainConfig, GearSetup};
use gearspeed_orchestration::{run_analysis, AnalysisReport};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

type Triple = [u32; 3];

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    combination_count: usize,
    first: Triple,
    last: Triple,
    fastest: GoldenExtreme,
    slowest: GoldenExtreme,
    nearest: Vec<GoldenNearest>,
    whole_ratio_count: usize,
    whole_ratio_sample: Vec<Triple>,
    mean_rpm: f64,
    range_rpm: f64,
    bands: GoldenBands,
    by_input_speed: BTreeMap<u32, usize>,
}

#[derive(Deserialize)]
struct GoldenExtreme {
    setup: Triple,
    output_rpm: f64,
}

#[derive(Deserialize)]
struct GoldenNearest {
    target: f64,
    setup: Triple,
    difference: f64,
}

#[derive(Deserialize)]
struct GoldenBands {
    high: usize,
    medium: usize,
    low: usize,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/gearspeed_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn triple(setup: &GearSetup) -> Triple {
    [
        setup.input_speed(),
        setup.driving_teeth(),
        setup.driven_teeth(),
    ]
}

fn analyze(target: f64) -> AnalysisReport {
    let opts = AnalysisOptions {
        target_rpm: target,
        ..AnalysisOptions::default()
    };
    run_analysis(&DrivetrainConfig::default(), &opts).unwrap()
}

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "{what}: expected {expected}, got {actual}"
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_generation_order() {
    let golden = load_golden_data();
    let report = analyze(300.0);
    assert_eq!(report.setups.len(), golden.combination_count);
    assert_eq!(triple(&report.setups[0]), golden.first);
    assert_eq!(triple(report.setups.last().unwrap()), golden.last);
}

#[test]
fn golden_extremes() {
    let golden = load_golden_data();
    let report = analyze(300.0);
    assert_eq!(triple(&report.extremes.fastest), golden.fastest.setup);
    assert_close(
        report.extremes.fastest.output_speed(),
        golden.fastest.output_rpm,
        "fastest",
    );
    assert_eq!(triple(&report.extremes.slowest), golden.slowest.setup);
    assert_close(
        report.extremes.slowest.output_speed(),
        golden.slowest.output_rpm,
        "slowest",
    );
}

#[test]
fn golden_nearest_targets() {
    let golden = load_golden_data();
    for case in &golden.nearest {
        let report = analyze(case.target);
        assert_eq!(
            triple(&report.nearest.setup),
            case.setup,
            "target {}",
            case.target
        );
        assert_close(report.nearest.difference, case.difference, "difference");
    }
}

#[test]
fn golden_whole_ratios() {
    let golden = load_golden_data();
    let report = analyze(300.0);
    assert_eq!(report.whole_ratios.count, golden.whole_ratio_count);
    let sample: Vec<Triple> = report.whole_ratios.sample.iter().map(triple).collect();
    assert_eq!(sample, golden.whole_ratio_sample);
}

#[test]
fn golden_statistics() {
    let golden = load_golden_data();
    let stats = analyze(300.0).statistics;
    assert_close(stats.mean(), golden.mean_rpm, "mean");
    assert_close(stats.range(), golden.range_rpm, "range");
    assert_eq!(stats.bands().high, golden.bands.high);
    assert_eq!(stats.bands().medium, golden.bands.medium);
    assert_eq!(stats.bands().low, golden.bands.low);
    assert_eq!(stats.by_input_speed(), &golden.by_input_speed);
}
