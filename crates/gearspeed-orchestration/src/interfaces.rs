//! Orchestration interfaces.

use serde::Serialize;

use gearspeed_core::{
    AnalysisOptions, Extremes, GearSetup, NearestMatch, SetupCalculation, SpeedStatistics,
    WholeRatioSummary,
};

/// Everything a full analysis run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Options the analyzers ran with.
    pub options: AnalysisOptions,
    /// All setups, in generation order.
    pub setups: Vec<GearSetup>,
    /// Fastest and slowest setups.
    pub extremes: Extremes,
    /// Setup closest to the target speed.
    pub nearest: NearestMatch,
    /// Whole-ratio count and sample.
    pub whole_ratios: WholeRatioSummary,
    /// Aggregate output-speed statistics.
    pub statistics: SpeedStatistics,
}

/// Trait for presenting results to the user.
pub trait ReportPresenter {
    /// Present a full analysis. `listing` is the filtered and sorted view
    /// of `report.setups` to sample from.
    fn present_report(&self, report: &AnalysisReport, listing: &[GearSetup]);

    /// Present a single evaluated setup.
    fn present_setup(&self, calc: &SetupCalculation);

    /// Present an error.
    fn present_error(&self, error: &str);
}
