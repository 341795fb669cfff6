//! Constants for the standard drivetrain kit and analysis defaults.

/// Motor speeds (RPM) available in the standard kit.
pub const DEFAULT_INPUT_SPEEDS: [u32; 3] = [100, 200, 600];

/// Gear tooth counts available in the standard kit.
/// Each size can be fitted on either the driving or the driven shaft.
pub const DEFAULT_GEAR_SIZES: [u32; 7] = [12, 24, 36, 48, 60, 72, 80];

/// Output speed (RPM) the nearest-target search aims for by default.
pub const DEFAULT_TARGET_RPM: f64 = 300.0;

/// Maximum distance from an integer for a ratio to count as whole.
pub const DEFAULT_WHOLE_RATIO_TOLERANCE: f64 = 0.001;

/// Number of whole-ratio setups kept as a sample.
pub const DEFAULT_WHOLE_RATIO_SAMPLE: usize = 10;

/// Output speeds strictly above this value (RPM) are in the high band.
pub const HIGH_SPEED_THRESHOLD: f64 = 500.0;

/// Output speeds at or below this value (RPM) are in the low band.
pub const LOW_SPEED_THRESHOLD: f64 = 100.0;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A gear size or motor speed was not positive.
    pub const ERROR_INVALID_INPUT: i32 = 2;
    /// An analyzer received no setups.
    pub const ERROR_EMPTY_INPUT: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_kit_sizes() {
        assert_eq!(DEFAULT_INPUT_SPEEDS.len(), 3);
        assert_eq!(DEFAULT_GEAR_SIZES.len(), 7);
        assert!(DEFAULT_GEAR_SIZES.iter().all(|&t| t > 0));
    }

    #[test]
    fn band_thresholds_ordered() {
        assert!(LOW_SPEED_THRESHOLD < HIGH_SPEED_THRESHOLD);
    }
}
