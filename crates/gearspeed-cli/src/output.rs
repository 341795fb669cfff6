//! CLI output formatting and JSON export.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use gearspeed_core::GearSetup;
use gearspeed_orchestration::AnalysisReport;

/// Error writing a report.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// File could not be created or written.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),

    /// Report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Format an output speed, e.g. `300.0 RPM`.
#[must_use]
pub fn format_rpm(rpm: f64) -> String {
    format!("{rpm:.1} RPM")
}

/// Format a ratio, e.g. `2.00:1`.
#[must_use]
pub fn format_ratio(ratio: f64) -> String {
    format!("{ratio:.2}:1")
}

/// Format a gear pair, e.g. `12T → 24T`.
#[must_use]
pub fn format_gears(driving: u32, driven: u32) -> String {
    format!("{driving}T \u{2192} {driven}T")
}

/// Format a percentage with one decimal, e.g. `25.9%`.
#[must_use]
pub fn format_percent(pct: f64) -> String {
    format!("{pct:.1}%")
}

/// Column header matching [`format_row`].
pub const TABLE_HEADER: &str = "Input RPM | Driving | Driven | Ratio | Output RPM";

/// Separator line matching [`TABLE_HEADER`].
pub const TABLE_RULE: &str = "----------|---------|--------|-------|-----------";

/// Format one setup as an aligned table row.
#[must_use]
pub fn format_row(setup: &GearSetup) -> String {
    format!(
        "{:>9} | {:>6}T | {:>5}T | {:>5.2} | {:>10.1}",
        setup.input_speed(),
        setup.driving_teeth(),
        setup.driven_teeth(),
        setup.ratio(),
        setup.output_speed()
    )
}

/// Serialize a report as pretty-printed JSON.
///
/// # Errors
///
/// Returns a serialization error if the report cannot be encoded.
pub fn report_to_json(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Write a report as JSON to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_report_json(path: &Path, report: &AnalysisReport) -> Result<(), OutputError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
