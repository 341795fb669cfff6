//! CLI report presenter.

use std::fmt::{self, Write};

use gearspeed_core::{
    GearSetup, SetupCalculation, SpeedBand, SpeedStatistics, HIGH_SPEED_THRESHOLD,
    LOW_SPEED_THRESHOLD,
};
use gearspeed_orchestration::{sample_ends, AnalysisReport, ReportPresenter};

use crate::output::{
    format_gears, format_percent, format_ratio, format_row, format_rpm, TABLE_HEADER, TABLE_RULE,
};
use crate::ui;

/// High-band setups needed before racing setups are recommended.
pub const PLENTY_HIGH_SPEED: usize = 50;

/// Low-band setups needed before torque setups are recommended.
pub const PLENTY_LOW_SPEED: usize = 30;

/// CLI report presenter.
pub struct CLIReportPresenter {
    quiet: bool,
    sample_size: usize,
}

impl CLIReportPresenter {
    /// `sample_size` is the number of rows shown from each end of the listing.
    #[must_use]
    pub fn new(quiet: bool, sample_size: usize) -> Self {
        Self { quiet, sample_size }
    }

    /// Write the full text report to `out`.
    pub fn write_report<W: Write>(
        &self,
        out: &mut W,
        report: &AnalysisReport,
        listing: &[GearSetup],
    ) -> fmt::Result {
        if self.quiet {
            let s = &report.nearest.setup;
            return writeln!(
                out,
                "{} {} {} {:.1}",
                s.input_speed(),
                s.driving_teeth(),
                s.driven_teeth(),
                s.output_speed()
            );
        }

        self.write_listing(out, report.setups.len(), listing)?;
        write_extremes(out, report)?;
        write_nearest(out, report)?;
        write_whole_ratios(out, report)?;
        write_statistics(out, &report.statistics)?;
        write_recommendations(out, &report.statistics)
    }

    /// Render the full text report.
    pub fn render_report(
        &self,
        report: &AnalysisReport,
        listing: &[GearSetup],
    ) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.write_report(&mut out, report, listing)?;
        Ok(out)
    }

    /// Write a single evaluated setup to `out`.
    pub fn write_setup<W: Write>(&self, out: &mut W, calc: &SetupCalculation) -> fmt::Result {
        if self.quiet {
            return writeln!(out, "{:.1}", calc.output_speed);
        }
        writeln!(out, "{}", ui::section("Gear Setup"))?;
        writeln!(
            out,
            "   Input: {} RPM | Gears: {}",
            calc.input_speed,
            format_gears(calc.driving_teeth, calc.driven_teeth)
        )?;
        writeln!(out, "   Ratio: {}", format_ratio(calc.ratio))?;
        writeln!(out, "   Output: {}", ui::highlight(&format_rpm(calc.output_speed)))?;
        writeln!(out, "   Speed factor: {:.2}x", calc.speed_factor)?;
        writeln!(out, "   Torque factor: {:.2}x", calc.torque_factor)
    }

    /// Render a single evaluated setup.
    pub fn render_setup(&self, calc: &SetupCalculation) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.write_setup(&mut out, calc)?;
        Ok(out)
    }

    fn write_listing<W: Write>(
        &self,
        out: &mut W,
        total: usize,
        listing: &[GearSetup],
    ) -> fmt::Result {
        writeln!(out, "{}", ui::section("Gear Combinations"))?;
        writeln!(out, "Total combinations analyzed: {total}")?;
        if listing.is_empty() {
            return writeln!(out, "No setups match the selected filter.\n");
        }

        let (head, tail, omitted) = sample_ends(listing, self.sample_size);
        writeln!(out, "\n{TABLE_HEADER}\n{TABLE_RULE}")?;
        for setup in head {
            writeln!(out, "{}", format_row(setup))?;
        }
        if !tail.is_empty() {
            writeln!(out, "\n... ({omitted} more combinations) ...\n")?;
            writeln!(out, "Last {} combinations:", tail.len())?;
            for setup in tail {
                writeln!(out, "{}", format_row(setup))?;
            }
        }
        writeln!(out)
    }
}

fn write_setup_lines<W: Write>(out: &mut W, setup: &GearSetup) -> fmt::Result {
    writeln!(
        out,
        "   Input: {} RPM | Gears: {}",
        setup.input_speed(),
        format_gears(setup.driving_teeth(), setup.driven_teeth())
    )?;
    writeln!(
        out,
        "   Ratio: {} | Output: {}",
        format_ratio(setup.ratio()),
        ui::highlight(&format_rpm(setup.output_speed()))
    )
}

fn write_extremes<W: Write>(out: &mut W, report: &AnalysisReport) -> fmt::Result {
    writeln!(out, "{}", ui::section("Optimization"))?;
    writeln!(out, "Fastest setup (maximum speed):")?;
    write_setup_lines(out, &report.extremes.fastest)?;
    writeln!(out, "   Best for: speed challenges, racing, quick traversal")?;
    writeln!(out, "Slowest setup (maximum torque):")?;
    write_setup_lines(out, &report.extremes.slowest)?;
    writeln!(out, "   Best for: heavy lifting, climbing, pushing objects\n")
}

fn write_nearest<W: Write>(out: &mut W, report: &AnalysisReport) -> fmt::Result {
    let nearest = &report.nearest;
    writeln!(out, "{}", ui::section("Balanced Setup"))?;
    writeln!(out, "Closest to {}:", format_rpm(nearest.target))?;
    write_setup_lines(out, &nearest.setup)?;
    writeln!(
        out,
        "   Difference from target: {}\n",
        format_rpm(nearest.difference)
    )
}

fn write_whole_ratios<W: Write>(out: &mut W, report: &AnalysisReport) -> fmt::Result {
    let summary = &report.whole_ratios;
    writeln!(out, "{}", ui::section("Whole-Number Ratios"))?;
    for setup in &summary.sample {
        writeln!(
            out,
            "   {} RPM | {} | Ratio: {:.0}:1 | Output: {}",
            setup.input_speed(),
            format_gears(setup.driving_teeth(), setup.driven_teeth()),
            setup.ratio().round(),
            format_rpm(setup.output_speed())
        )?;
    }
    if summary.remaining() > 0 {
        writeln!(out, "   ... and {} more whole ratios", summary.remaining())?;
    }
    write!(out, "Total whole ratios: {} of {}", summary.count, summary.total)?;
    if let Some(pct) = summary.percentage() {
        write!(out, " ({})", format_percent(pct))?;
    }
    writeln!(out, "\n")
}

fn write_statistics<W: Write>(out: &mut W, stats: &SpeedStatistics) -> fmt::Result {
    writeln!(out, "{}", ui::section("Statistics"))?;
    writeln!(out, "   Fastest setup: {}", format_rpm(stats.max()))?;
    writeln!(out, "   Slowest setup: {}", format_rpm(stats.min()))?;
    writeln!(out, "   Average speed: {}", format_rpm(stats.mean()))?;
    writeln!(out, "   Speed range: {}", format_rpm(stats.range()))?;

    writeln!(out, "Speed bands:")?;
    for band in SpeedBand::ALL {
        let bounds = match band {
            SpeedBand::High => format!("> {HIGH_SPEED_THRESHOLD:.0} RPM"),
            SpeedBand::Medium => {
                format!("{LOW_SPEED_THRESHOLD:.0}-{HIGH_SPEED_THRESHOLD:.0} RPM")
            }
            SpeedBand::Low => format!("<= {LOW_SPEED_THRESHOLD:.0} RPM"),
        };
        writeln!(
            out,
            "   {band} ({bounds}): {} setups ({})",
            stats.bands().get(band),
            format_percent(stats.band_percentage(band))
        )?;
    }

    writeln!(out, "By motor speed:")?;
    for (rpm, count) in stats.by_input_speed() {
        writeln!(out, "   {rpm} RPM motor: {count} combinations")?;
    }
    writeln!(out)
}

/// Recommendation lines driven by the statistics.
#[must_use]
pub fn recommendations(stats: &SpeedStatistics) -> Vec<String> {
    let bands = stats.bands();
    let mut lines = Vec::new();
    if bands.high > PLENTY_HIGH_SPEED {
        lines.push("Plenty of high-speed options for racing challenges".to_string());
    }
    if bands.low > PLENTY_LOW_SPEED {
        lines.push("Good torque options available for heavy-duty tasks".to_string());
    }
    lines.push(format!(
        "{} average provides balanced performance",
        format_rpm(stats.mean())
    ));
    lines.push(format!(
        "{} range offers maximum flexibility",
        format_rpm(stats.range())
    ));
    lines
}

fn write_recommendations<W: Write>(out: &mut W, stats: &SpeedStatistics) -> fmt::Result {
    writeln!(out, "{}", ui::section("Recommendations"))?;
    for line in recommendations(stats) {
        writeln!(out, "   -> {line}")?;
    }
    Ok(())
}

impl ReportPresenter for CLIReportPresenter {
    fn present_report(&self, report: &AnalysisReport, listing: &[GearSetup]) {
        match self.render_report(report, listing) {
            Ok(text) => print!("{text}"),
            Err(err) => self.present_error(&format!("failed to render report: {err}")),
        }
    }

    fn present_setup(&self, calc: &SetupCalculation) {
        match self.render_setup(calc) {
            Ok(text) => print!("{text}"),
            Err(err) => self.present_error(&format!("failed to render setup: {err}")),
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
