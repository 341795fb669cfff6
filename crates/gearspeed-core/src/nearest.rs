//! Nearest-to-target output speed search.

use serde::Serialize;

use crate::error::GearError;
use crate::setup::GearSetup;

/// The setup whose output speed is closest to a target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NearestMatch {
    /// Target output speed (RPM).
    pub target: f64,
    /// Closest setup.
    pub setup: GearSetup,
    /// `|output_speed - target|` for the closest setup.
    pub difference: f64,
}

/// Find the setup whose output speed is closest to `target`.
///
/// On ties the setup that comes first in `setups` wins.
///
/// # Errors
///
/// Returns [`GearError::EmptyInput`] if `setups` is empty.
pub fn find_nearest(setups: &[GearSetup], target: f64) -> Result<NearestMatch, GearError> {
    let (first, rest) = setups
        .split_first()
        .ok_or(GearError::EmptyInput("nearest-target search"))?;

    let mut best = first;
    let mut smallest = (first.output_speed() - target).abs();
    for setup in rest {
        let difference = (setup.output_speed() - target).abs();
        if difference < smallest {
            smallest = difference;
            best = setup;
        }
    }

    Ok(NearestMatch {
        target,
        setup: *best,
        difference: smallest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DrivetrainConfig;
    use crate::generator::generate_combinations;

    #[test]
    fn default_kit_balanced_setup() {
        let setups = generate_combinations(&DrivetrainConfig::default()).unwrap();
        let found = find_nearest(&setups, 300.0).unwrap();
        // Several setups hit 300 RPM exactly; the first generated one wins.
        assert_eq!(found.setup, GearSetup::new(100, 36, 12).unwrap());
        assert!(found.difference < 1e-9);
        assert_eq!(found.target, 300.0);
    }

    #[test]
    fn reports_absolute_difference() {
        let slow = GearSetup::new(100, 12, 24).unwrap(); // 50 RPM
        let fast = GearSetup::new(100, 24, 12).unwrap(); // 200 RPM
        let found = find_nearest(&[slow, fast], 160.0).unwrap();
        assert_eq!(found.setup, fast);
        assert!((found.difference - 40.0).abs() < 1e-12);
    }

    #[test]
    fn equidistant_keeps_first() {
        let slow = GearSetup::new(100, 12, 24).unwrap(); // 50 RPM
        let fast = GearSetup::new(100, 12, 12).unwrap(); // 100 RPM
        assert_eq!(find_nearest(&[slow, fast], 75.0).unwrap().setup, slow);
        assert_eq!(find_nearest(&[fast, slow], 75.0).unwrap().setup, fast);
    }

    #[test]
    fn empty_input() {
        assert!(matches!(
            find_nearest(&[], 300.0),
            Err(GearError::EmptyInput(_))
        ));
    }
}
