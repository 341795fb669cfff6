//! Analysis options.

use serde::Serialize;

use crate::constants::{
    DEFAULT_TARGET_RPM, DEFAULT_WHOLE_RATIO_SAMPLE, DEFAULT_WHOLE_RATIO_TOLERANCE,
};

/// Options for a full analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisOptions {
    /// Output speed (RPM) the nearest-target search aims for.
    pub target_rpm: f64,
    /// Maximum distance from an integer for a ratio to count as whole.
    pub whole_ratio_tolerance: f64,
    /// Number of whole-ratio setups kept as a sample.
    pub whole_ratio_sample: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            target_rpm: DEFAULT_TARGET_RPM,
            whole_ratio_tolerance: DEFAULT_WHOLE_RATIO_TOLERANCE,
            whole_ratio_sample: DEFAULT_WHOLE_RATIO_SAMPLE,
        }
    }
}

impl AnalysisOptions {
    /// Normalize options, replacing unusable values with defaults.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if !self.target_rpm.is_finite() {
            self.target_rpm = DEFAULT_TARGET_RPM;
        }
        if !(self.whole_ratio_tolerance.is_finite() && self.whole_ratio_tolerance > 0.0) {
            self.whole_ratio_tolerance = DEFAULT_WHOLE_RATIO_TOLERANCE;
        }
        if self.whole_ratio_sample == 0 {
            self.whole_ratio_sample = DEFAULT_WHOLE_RATIO_SAMPLE;
        }
        self
    }
}
