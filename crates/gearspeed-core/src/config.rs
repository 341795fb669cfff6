//! Drivetrain kit configuration: the motor speeds and gear sizes to combine.

use serde::Serialize;

use crate::constants::{DEFAULT_GEAR_SIZES, DEFAULT_INPUT_SPEEDS};

/// The motor speeds and gear sizes the combination generator draws from.
///
/// The same gear-size list is used for both the driving and driven shaft.
/// Order matters: it fixes the order of generated setups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrivetrainConfig {
    input_speeds: Vec<u32>,
    gear_sizes: Vec<u32>,
}

impl Default for DrivetrainConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_SPEEDS.to_vec(), DEFAULT_GEAR_SIZES.to_vec())
    }
}

impl DrivetrainConfig {
    /// Create a configuration from explicit speed and gear-size lists.
    #[must_use]
    pub fn new(input_speeds: Vec<u32>, gear_sizes: Vec<u32>) -> Self {
        Self {
            input_speeds,
            gear_sizes,
        }
    }

    /// Motor speeds (RPM), in generation order.
    #[must_use]
    pub fn input_speeds(&self) -> &[u32] {
        &self.input_speeds
    }

    /// Gear tooth counts, in generation order.
    #[must_use]
    pub fn gear_sizes(&self) -> &[u32] {
        &self.gear_sizes
    }

    /// Number of setups the generator will produce.
    #[must_use]
    pub fn combination_count(&self) -> usize {
        self.input_speeds.len() * self.gear_sizes.len() * self.gear_sizes.len()
    }
}
