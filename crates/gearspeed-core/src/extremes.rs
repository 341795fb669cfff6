//! Fastest and slowest setup search.

use serde::Serialize;

use crate::error::GearError;
use crate::setup::GearSetup;

/// The setups with the highest and lowest output speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extremes {
    /// Highest output speed.
    pub fastest: GearSetup,
    /// Lowest output speed.
    pub slowest: GearSetup,
}

/// Find the fastest and slowest setups.
///
/// On ties the setup that comes first in `setups` wins.
///
/// # Errors
///
/// Returns [`GearError::EmptyInput`] if `setups` is empty.
pub fn find_extremes(setups: &[GearSetup]) -> Result<Extremes, GearError> {
    let (first, rest) = setups
        .split_first()
        .ok_or(GearError::EmptyInput("extremal search"))?;

    let mut fastest = first;
    let mut slowest = first;
    for setup in rest {
        if setup.output_speed() > fastest.output_speed() {
            fastest = setup;
        }
        if setup.output_speed() < slowest.output_speed() {
            slowest = setup;
        }
    }

    Ok(Extremes {
        fastest: *fastest,
        slowest: *slowest,
    })
}
