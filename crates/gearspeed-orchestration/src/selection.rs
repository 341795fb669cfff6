//! Listing selection: filter, sort, and sample the setup list for display.

use std::fmt;
use std::str::FromStr;

use gearspeed_core::{GearError, GearSetup};

/// Order of the setup listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Generation order (motor speed, driving gear, driven gear).
    #[default]
    Generation,
    /// Output speed, fastest first.
    Output,
    /// Ratio, highest first.
    Ratio,
    /// Motor speed, lowest first; generation order within a speed.
    Input,
}

impl SortOrder {
    /// Accepted names, in the order shown to users.
    pub const NAMES: [&'static str; 4] = ["generation", "output", "ratio", "input"];

    fn name(self) -> &'static str {
        match self {
            SortOrder::Generation => "generation",
            SortOrder::Output => "output",
            SortOrder::Ratio => "ratio",
            SortOrder::Input => "input",
        }
    }
}

impl FromStr for SortOrder {
    type Err = GearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generation" | "none" => Ok(SortOrder::Generation),
            "output" | "speed" => Ok(SortOrder::Output),
            "ratio" => Ok(SortOrder::Ratio),
            "input" | "rpm" => Ok(SortOrder::Input),
            other => Err(GearError::Config(format!(
                "unknown sort order '{other}' (expected one of: {})",
                Self::NAMES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the setup listing should be filtered and ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingView {
    /// Keep only setups driven by this motor speed.
    pub input_speed: Option<u32>,
    /// Listing order.
    pub sort: SortOrder,
}

/// Apply a listing view to the setups. Sorting is stable.
#[must_use]
pub fn select_setups(setups: &[GearSetup], view: &ListingView) -> Vec<GearSetup> {
    let mut selected: Vec<GearSetup> = setups
        .iter()
        .filter(|s| view.input_speed.map_or(true, |rpm| s.input_speed() == rpm))
        .copied()
        .collect();

    match view.sort {
        SortOrder::Generation => {}
        SortOrder::Output => {
            selected.sort_by(|a, b| b.output_speed().total_cmp(&a.output_speed()));
        }
        SortOrder::Ratio => selected.sort_by(|a, b| b.ratio().total_cmp(&a.ratio())),
        SortOrder::Input => selected.sort_by_key(GearSetup::input_speed),
    }
    selected
}

/// Split a listing into its first and last `n` entries.
///
/// Returns `(head, tail, omitted)`. When the listing holds at most `2 * n`
/// entries the head is the whole listing and the tail is empty.
#[must_use]
pub fn sample_ends(setups: &[GearSetup], n: usize) -> (&[GearSetup], &[GearSetup], usize) {
    if setups.len() <= n.saturating_mul(2) {
        return (setups, &[], 0);
    }
    let tail_start = setups.len() - n;
    (&setups[..n], &setups[tail_start..], tail_start - n)
}
