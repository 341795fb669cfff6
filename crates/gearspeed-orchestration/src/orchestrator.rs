//! Core orchestration: generate the setups and run every analyzer.

use tracing::{debug, info};

use gearspeed_core::{
    classify_whole_ratios, compute_statistics, find_extremes, find_nearest,
    generate_combinations, AnalysisOptions, DrivetrainConfig, GearError, GearSetup,
};

use crate::interfaces::AnalysisReport;

/// Generate every combination of `config` and analyze them.
///
/// # Errors
///
/// Returns [`GearError::InvalidInput`] if the kit contains a zero speed or
/// gear size, or [`GearError::EmptyInput`] if the kit produces no setups.
pub fn run_analysis(
    config: &DrivetrainConfig,
    opts: &AnalysisOptions,
) -> Result<AnalysisReport, GearError> {
    debug!(
        speeds = ?config.input_speeds(),
        gears = ?config.gear_sizes(),
        "generating combinations"
    );
    let setups = generate_combinations(config)?;
    analyze_setups(setups, opts)
}

/// Run every analyzer over an already generated set of setups.
///
/// Each analyzer reads the same slice independently.
///
/// # Errors
///
/// Returns [`GearError::EmptyInput`] if `setups` is empty.
pub fn analyze_setups(
    setups: Vec<GearSetup>,
    opts: &AnalysisOptions,
) -> Result<AnalysisReport, GearError> {
    let extremes = find_extremes(&setups)?;
    debug!(
        fastest = extremes.fastest.output_speed(),
        slowest = extremes.slowest.output_speed(),
        "extremal search done"
    );

    let nearest = find_nearest(&setups, opts.target_rpm)?;
    debug!(
        target = opts.target_rpm,
        difference = nearest.difference,
        "nearest-target search done"
    );

    let whole_ratios =
        classify_whole_ratios(&setups, opts.whole_ratio_tolerance, opts.whole_ratio_sample);
    debug!(count = whole_ratios.count, "whole-ratio classification done");

    let statistics = compute_statistics(&setups)?;
    info!(
        setups = setups.len(),
        mean = statistics.mean(),
        "analysis complete"
    );

    Ok(AnalysisReport {
        options: opts.clone(),
        setups,
        extremes,
        nearest,
        whole_ratios,
        statistics,
    })
}
