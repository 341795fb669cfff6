//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use gearspeed_core::{AnalysisOptions, GearError, DEFAULT_TARGET_RPM};
use gearspeed_orchestration::{ListingView, SortOrder};

/// gearspeed — gear ratio combination analyzer for robot drivetrains.
#[derive(Parser, Debug)]
#[command(name = "gearspeed", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Output speed (RPM) the balanced-setup search aims for.
    #[arg(short, long, default_value_t = DEFAULT_TARGET_RPM, env = "GEARSPEED_TARGET")]
    pub target: f64,

    /// Maximum distance from an integer for a ratio to count as whole.
    #[arg(long, default_value = "0.001")]
    pub tolerance: f64,

    /// Rows shown from each end of the listing, and whole-ratio examples shown.
    #[arg(short = 'n', long, default_value = "10")]
    pub sample_size: usize,

    /// Only list setups driven by this motor speed (RPM).
    #[arg(long)]
    pub input_rpm: Option<u32>,

    /// Listing order: generation, output, ratio, or input.
    #[arg(long, default_value = "generation")]
    pub sort: SortOrder,

    /// Print the full analysis as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write the full analysis as JSON to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode (only print the balanced setup).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Evaluate a single setup instead of the full kit.
    #[arg(long)]
    pub calc: bool,

    /// Motor speed (RPM) for --calc.
    #[arg(long, default_value = "200", requires = "calc")]
    pub rpm: u32,

    /// Driving gear teeth for --calc.
    #[arg(long, default_value = "24", requires = "calc")]
    pub driving: u32,

    /// Driven gear teeth for --calc.
    #[arg(long, default_value = "48", requires = "calc")]
    pub driven: u32,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Reject values the analyzers cannot use.
    pub fn validate(&self) -> Result<(), GearError> {
        if !self.target.is_finite() {
            return Err(GearError::Config(format!(
                "target speed must be a finite number, got {}",
                self.target
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(GearError::Config(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.sample_size == 0 {
            return Err(GearError::Config("sample size must be at least 1".into()));
        }
        Ok(())
    }

    /// Analysis options derived from the flags.
    #[must_use]
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            target_rpm: self.target,
            whole_ratio_tolerance: self.tolerance,
            whole_ratio_sample: self.sample_size,
        }
        .normalize()
    }

    /// Listing view derived from the flags.
    #[must_use]
    pub fn listing_view(&self) -> ListingView {
        ListingView {
            input_speed: self.input_rpm,
            sort: self.sort,
        }
    }
}
