//! Aggregate output-speed statistics.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::GearError;
use crate::setup::{GearSetup, SpeedBand};

/// Setup counts per speed band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BandCounts {
    /// Setups above the high-speed threshold.
    pub high: usize,
    /// Setups between the thresholds.
    pub medium: usize,
    /// Setups at or below the low-speed threshold.
    pub low: usize,
}

impl BandCounts {
    /// Count for one band.
    #[must_use]
    pub fn get(&self, band: SpeedBand) -> usize {
        match band {
            SpeedBand::High => self.high,
            SpeedBand::Medium => self.medium,
            SpeedBand::Low => self.low,
        }
    }

    /// Sum over all bands.
    #[must_use]
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }

    fn record(&mut self, band: SpeedBand) {
        match band {
            SpeedBand::High => self.high += 1,
            SpeedBand::Medium => self.medium += 1,
            SpeedBand::Low => self.low += 1,
        }
    }
}

/// Share of setups per speed band, as unrounded percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BandPercentages {
    /// Share above the high-speed threshold.
    pub high: f64,
    /// Share between the thresholds.
    pub medium: f64,
    /// Share at or below the low-speed threshold.
    pub low: f64,
}

impl BandPercentages {
    /// Percentage for one band.
    #[must_use]
    pub fn get(&self, band: SpeedBand) -> f64 {
        match band {
            SpeedBand::High => self.high,
            SpeedBand::Medium => self.medium,
            SpeedBand::Low => self.low,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_counts(bands: BandCounts, count: usize) -> Self {
        let pct = |n: usize| n as f64 / count as f64 * 100.0;
        Self {
            high: pct(bands.high),
            medium: pct(bands.medium),
            low: pct(bands.low),
        }
    }
}

/// Summary statistics over the output speeds of a set of setups.
///
/// Only [`compute_statistics`] builds this, so `count` is never zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedStatistics {
    count: usize,
    mean: f64,
    max: f64,
    min: f64,
    range: f64,
    bands: BandCounts,
    band_percentages: BandPercentages,
    by_input_speed: BTreeMap<u32, usize>,
}

impl SpeedStatistics {
    /// Number of setups.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Arithmetic mean output speed.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Highest output speed.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Lowest output speed.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// `max - min`.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.range
    }

    /// Counts per speed band.
    #[must_use]
    pub fn bands(&self) -> BandCounts {
        self.bands
    }

    /// Percentages per speed band.
    #[must_use]
    pub fn band_percentages(&self) -> BandPercentages {
        self.band_percentages
    }

    /// Share of setups in `band`, as an unrounded percentage.
    #[must_use]
    pub fn band_percentage(&self, band: SpeedBand) -> f64 {
        self.band_percentages.get(band)
    }

    /// Counts per motor speed, keyed by RPM.
    #[must_use]
    pub fn by_input_speed(&self) -> &BTreeMap<u32, usize> {
        &self.by_input_speed
    }
}

/// Compute output-speed statistics.
///
/// # Errors
///
/// Returns [`GearError::EmptyInput`] if `setups` is empty.
#[allow(clippy::cast_precision_loss)]
pub fn compute_statistics(setups: &[GearSetup]) -> Result<SpeedStatistics, GearError> {
    let first = setups
        .first()
        .ok_or(GearError::EmptyInput("speed statistics"))?;

    let mut total = 0.0;
    let mut max = first.output_speed();
    let mut min = first.output_speed();
    let mut bands = BandCounts::default();
    let mut by_input_speed = BTreeMap::new();

    for setup in setups {
        let speed = setup.output_speed();
        total += speed;
        if speed > max {
            max = speed;
        }
        if speed < min {
            min = speed;
        }
        bands.record(setup.band());
        *by_input_speed.entry(setup.input_speed()).or_insert(0) += 1;
    }

    let count = setups.len();
    Ok(SpeedStatistics {
        count,
        mean: total / count as f64,
        max,
        min,
        range: max - min,
        bands,
        band_percentages: BandPercentages::from_counts(bands, count),
        by_input_speed,
    })
}
