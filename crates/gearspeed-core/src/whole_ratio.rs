//! Whole-number ratio classification.

use serde::Serialize;

use crate::setup::GearSetup;

/// Whether `ratio` lies within `tolerance` of an integer.
#[must_use]
pub fn is_whole_ratio(ratio: f64, tolerance: f64) -> bool {
    (ratio - ratio.round()).abs() < tolerance
}

/// Setups whose ratio is a whole number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WholeRatioSummary {
    /// Number of whole-ratio setups across the full input.
    pub count: usize,
    /// Number of setups examined.
    pub total: usize,
    /// Tolerance used for classification.
    pub tolerance: f64,
    /// The first whole-ratio setups in input order, at most the sample limit.
    pub sample: Vec<GearSetup>,
}

impl WholeRatioSummary {
    /// Share of whole-ratio setups as a percentage, `None` when nothing was examined.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.count as f64 / self.total as f64 * 100.0)
    }

    /// Whole-ratio setups not included in the sample.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.count - self.sample.len()
    }
}

/// Count whole-ratio setups and keep the first `sample_limit` of them.
#[must_use]
pub fn classify_whole_ratios(
    setups: &[GearSetup],
    tolerance: f64,
    sample_limit: usize,
) -> WholeRatioSummary {
    let mut count = 0;
    let mut sample = Vec::with_capacity(sample_limit.min(setups.len()));
    for setup in setups
        .iter()
        .filter(|s| is_whole_ratio(s.ratio(), tolerance))
    {
        count += 1;
        if sample.len() < sample_limit {
            sample.push(*setup);
        }
    }

    WholeRatioSummary {
        count,
        total: setups.len(),
        tolerance,
        sample,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DrivetrainConfig;
    use crate::constants::DEFAULT_WHOLE_RATIO_TOLERANCE;
    use crate::generator::generate_combinations;
    use crate::ratio::compute_ratio;

    #[test]
    fn whole_ratio_examples() {
        let tol = DEFAULT_WHOLE_RATIO_TOLERANCE;
        assert!(is_whole_ratio(compute_ratio(12, 24).unwrap(), tol));
        assert!(is_whole_ratio(compute_ratio(12, 36).unwrap(), tol));
        assert!(!is_whole_ratio(compute_ratio(24, 36).unwrap(), tol));
    }

    #[test]
    fn tolerance_is_respected() {
        assert!(is_whole_ratio(2.0005, 0.001));
        assert!(!is_whole_ratio(2.0005, 0.0001));
        assert!(is_whole_ratio(1.5, 0.6));
    }

    #[test]
    fn default_kit_count_matches_recount() {
        let setups = generate_combinations(&DrivetrainConfig::default()).unwrap();
        let summary = classify_whole_ratios(&setups, DEFAULT_WHOLE_RATIO_TOLERANCE, 10);

        let recount = setups
            .iter()
            .filter(|s| {
                let r = s.ratio();
                (r - r.round()).abs() < DEFAULT_WHOLE_RATIO_TOLERANCE
            })
            .count();
        assert_eq!(summary.count, recount);
        assert_eq!(summary.count, 45);
        assert_eq!(summary.total, 147);
        assert_eq!(summary.sample.len(), 10);
        assert_eq!(summary.remaining(), 35);
    }

    #[test]
    fn sample_keeps_generation_order() {
        let setups = generate_combinations(&DrivetrainConfig::default()).unwrap();
        let summary = classify_whole_ratios(&setups, DEFAULT_WHOLE_RATIO_TOLERANCE, 3);
        let pairs: Vec<_> = summary
            .sample
            .iter()
            .map(|s| (s.driving_teeth(), s.driven_teeth()))
            .collect();
        assert_eq!(pairs, vec![(12, 12), (12, 24), (12, 36)]);
        assert_eq!(summary.count, 45);
    }

    #[test]
    fn empty_input_counts_zero() {
        let summary = classify_whole_ratios(&[], DEFAULT_WHOLE_RATIO_TOLERANCE, 10);
        assert_eq!(summary.count, 0);
        assert!(summary.sample.is_empty());
        assert_eq!(summary.percentage(), None);
    }

    #[test]
    fn percentage() {
        let setups = [
            GearSetup::new(100, 12, 24).unwrap(),
            GearSetup::new(100, 24, 36).unwrap(),
        ];
        let summary = classify_whole_ratios(&setups, DEFAULT_WHOLE_RATIO_TOLERANCE, 10);
        assert_eq!(summary.percentage(), Some(50.0));
    }
}
