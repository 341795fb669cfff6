//! Combination generator.
//!
//! Produces one [`GearSetup`] per ordered (motor speed, driving gear,
//! driven gear) triple. Motor speed is the outermost loop and the driven
//! gear the innermost; callers that sample the first or last setups rely
//! on this order.

use tracing::debug;

use crate::config::DrivetrainConfig;
use crate::error::GearError;
use crate::setup::GearSetup;

/// Lazy iterator over every combination of a [`DrivetrainConfig`].
pub struct Combinations<'a> {
    config: &'a DrivetrainConfig,
    speed_idx: usize,
    driving_idx: usize,
    driven_idx: usize,
    remaining: usize,
}

impl<'a> Combinations<'a> {
    /// Create an iterator over the combinations of `config`.
    #[must_use]
    pub fn new(config: &'a DrivetrainConfig) -> Self {
        Self {
            config,
            speed_idx: 0,
            driving_idx: 0,
            driven_idx: 0,
            remaining: config.combination_count(),
        }
    }

    fn advance(&mut self) {
        let gear_count = self.config.gear_sizes().len();
        self.driven_idx += 1;
        if self.driven_idx == gear_count {
            self.driven_idx = 0;
            self.driving_idx += 1;
            if self.driving_idx == gear_count {
                self.driving_idx = 0;
                self.speed_idx += 1;
            }
        }
    }
}

impl Iterator for Combinations<'_> {
    type Item = Result<GearSetup, GearError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let gears = self.config.gear_sizes();
        let setup = GearSetup::new(
            self.config.input_speeds()[self.speed_idx],
            gears[self.driving_idx],
            gears[self.driven_idx],
        );
        self.remaining -= 1;
        self.advance();
        Some(setup)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Combinations<'_> {}

/// Generate every combination of `config`, in generation order.
///
/// # Errors
///
/// Returns [`GearError::InvalidInput`] if any motor speed or gear size is zero.
pub fn generate_combinations(config: &DrivetrainConfig) -> Result<Vec<GearSetup>, GearError> {
    let setups = Combinations::new(config).collect::<Result<Vec<_>, _>>()?;
    debug!(count = setups.len(), "generated gear combinations");
    Ok(setups)
}
