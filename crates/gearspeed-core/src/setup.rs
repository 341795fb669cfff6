//! The gear setup record and its speed band.

use std::fmt;

use serde::Serialize;

use crate::constants::{HIGH_SPEED_THRESHOLD, LOW_SPEED_THRESHOLD};
use crate::error::GearError;
use crate::ratio::{compute_output_speed, compute_ratio};

/// Speed band of an output speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedBand {
    /// Output speed above [`HIGH_SPEED_THRESHOLD`].
    High,
    /// Output speed above [`LOW_SPEED_THRESHOLD`], up to and including
    /// [`HIGH_SPEED_THRESHOLD`].
    Medium,
    /// Output speed at or below [`LOW_SPEED_THRESHOLD`].
    Low,
}

impl SpeedBand {
    /// All bands, fastest first.
    pub const ALL: [SpeedBand; 3] = [SpeedBand::High, SpeedBand::Medium, SpeedBand::Low];

    /// Classify an output speed.
    #[must_use]
    pub fn classify(output_speed: f64) -> Self {
        if output_speed > HIGH_SPEED_THRESHOLD {
            SpeedBand::High
        } else if output_speed > LOW_SPEED_THRESHOLD {
            SpeedBand::Medium
        } else {
            SpeedBand::Low
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SpeedBand::High => "High Speed",
            SpeedBand::Medium => "Medium Speed",
            SpeedBand::Low => "Low Speed",
        }
    }
}

impl fmt::Display for SpeedBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One (motor speed, driving gear, driven gear) combination.
///
/// Ratio and output speed are derived once at construction; the record
/// cannot be modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GearSetup {
    input_speed: u32,
    driving_teeth: u32,
    driven_teeth: u32,
    ratio: f64,
    output_speed: f64,
}

impl GearSetup {
    /// Build a setup and derive its ratio and output speed.
    ///
    /// # Errors
    ///
    /// Returns [`GearError::InvalidInput`] if the motor speed or either
    /// gear size is zero.
    pub fn new(input_speed: u32, driving_teeth: u32, driven_teeth: u32) -> Result<Self, GearError> {
        if input_speed == 0 {
            return Err(GearError::InvalidInput(
                "motor speed must be positive".into(),
            ));
        }
        let ratio = compute_ratio(driving_teeth, driven_teeth)?;
        let output_speed = compute_output_speed(input_speed, driving_teeth, driven_teeth)?;
        Ok(Self {
            input_speed,
            driving_teeth,
            driven_teeth,
            ratio,
            output_speed,
        })
    }

    /// Motor speed (RPM).
    #[must_use]
    pub fn input_speed(&self) -> u32 {
        self.input_speed
    }

    /// Teeth on the motor-side gear.
    #[must_use]
    pub fn driving_teeth(&self) -> u32 {
        self.driving_teeth
    }

    /// Teeth on the wheel-side gear.
    #[must_use]
    pub fn driven_teeth(&self) -> u32 {
        self.driven_teeth
    }

    /// `driven / driving`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Output speed (RPM).
    #[must_use]
    pub fn output_speed(&self) -> f64 {
        self.output_speed
    }

    /// Speed band of the output speed.
    #[must_use]
    pub fn band(&self) -> SpeedBand {
        SpeedBand::classify(self.output_speed)
    }
}
