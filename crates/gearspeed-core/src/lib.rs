//! # gearspeed-core
//!
//! Core library for the gearspeed drivetrain analyzer.
//! Computes gear ratios and output speeds for every (motor, driving gear,
//! driven gear) combination and reduces the combination set into
//! extremes, a target match, whole-ratio counts, and aggregate statistics.

pub mod config;
pub mod constants;
pub mod error;
pub mod extremes;
pub mod generator;
pub mod nearest;
pub mod options;
pub mod ratio;
pub mod setup;
pub mod statistics;
pub mod whole_ratio;

// Re-exports
pub use config::DrivetrainConfig;
pub use constants::{
    exit_codes, DEFAULT_GEAR_SIZES, DEFAULT_INPUT_SPEEDS, DEFAULT_TARGET_RPM,
    DEFAULT_WHOLE_RATIO_SAMPLE, DEFAULT_WHOLE_RATIO_TOLERANCE, HIGH_SPEED_THRESHOLD,
    LOW_SPEED_THRESHOLD,
};
pub use error::GearError;
pub use extremes::{find_extremes, Extremes};
pub use generator::{generate_combinations, Combinations};
pub use nearest::{find_nearest, NearestMatch};
pub use options::AnalysisOptions;
pub use ratio::{calculate_setup, compute_output_speed, compute_ratio, SetupCalculation};
pub use setup::{GearSetup, SpeedBand};
pub use statistics::{compute_statistics, BandCounts, BandPercentages, SpeedStatistics};
pub use whole_ratio::{classify_whole_ratios, is_whole_ratio, WholeRatioSummary};
