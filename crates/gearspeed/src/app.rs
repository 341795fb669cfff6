//! Application entry point and dispatch.

use anyhow::Result;
use tracing::info;

use gearspeed_cli::output::{report_to_json, write_report_json};
use gearspeed_cli::CLIReportPresenter;
use gearspeed_core::{calculate_setup, DrivetrainConfig};
use gearspeed_orchestration::{run_analysis, select_setups, ReportPresenter};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        gearspeed_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let presenter = CLIReportPresenter::new(config.quiet, config.sample_size);
    run_with(config, &presenter)
}

/// Dispatch to the calculator or the report; failures are shown by `presenter`.
pub fn run_with(config: &AppConfig, presenter: &dyn ReportPresenter) -> Result<()> {
    let result = dispatch(config, presenter);
    if let Err(ref err) = result {
        presenter.present_error(&format!("{err:#}"));
    }
    result
}

fn dispatch(config: &AppConfig, presenter: &dyn ReportPresenter) -> Result<()> {
    config.validate()?;
    if config.calc {
        return run_calculator(config, presenter);
    }
    run_report(config, presenter)
}

fn run_calculator(config: &AppConfig, presenter: &dyn ReportPresenter) -> Result<()> {
    let calc = calculate_setup(config.rpm, config.driving, config.driven)?;
    presenter.present_setup(&calc);
    Ok(())
}

fn run_report(config: &AppConfig, presenter: &dyn ReportPresenter) -> Result<()> {
    let kit = DrivetrainConfig::default();
    let report = run_analysis(&kit, &config.analysis_options())?;

    if let Some(ref path) = config.output {
        write_report_json(path, &report)?;
        info!(path = %path.display(), "wrote JSON report");
    }

    if config.json {
        println!("{}", report_to_json(&report)?);
        return Ok(());
    }

    let listing = select_setups(&report.setups, &config.listing_view());
    presenter.present_report(&report, &listing);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use clap::Parser;
    use gearspeed_core::{GearSetup, SetupCalculation};
    use gearspeed_orchestration::AnalysisReport;

    use super::*;
    use crate::errors::exit_code;

    #[derive(Default)]
    struct RecordingPresenter {
        calls: RefCell<Vec<String>>,
    }

    impl ReportPresenter for RecordingPresenter {
        fn present_report(&self, report: &AnalysisReport, listing: &[GearSetup]) {
            self.calls
                .borrow_mut()
                .push(format!("report {} {}", report.setups.len(), listing.len()));
        }

        fn present_setup(&self, calc: &SetupCalculation) {
            self.calls
                .borrow_mut()
                .push(format!("setup {}", calc.output_speed));
        }

        fn present_error(&self, error: &str) {
            self.calls.borrow_mut().push(format!("error {error}"));
        }
    }

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("gearspeed").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn config_error_goes_to_presenter() {
        let presenter = RecordingPresenter::default();
        let err = run_with(&parse(&["--sample-size", "0"]), &presenter).unwrap_err();
        assert_eq!(exit_code(&err), 4);
        let calls = presenter.calls.into_inner();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].starts_with("error "));
        assert!(calls[0].contains("sample size"));
    }

    #[test]
    fn invalid_setup_goes_to_presenter() {
        let presenter = RecordingPresenter::default();
        let err = run_with(&parse(&["--calc", "--driving", "0"]), &presenter).unwrap_err();
        assert_eq!(exit_code(&err), 2);
        let calls = presenter.calls.into_inner();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].starts_with("error "));
    }

    #[test]
    fn success_reports_no_error() {
        let presenter = RecordingPresenter::default();
        run_with(&parse(&["--calc"]), &presenter).unwrap();
        run_with(&parse(&["-n", "5"]), &presenter).unwrap();
        assert_eq!(
            presenter.calls.into_inner(),
            vec!["setup 100".to_string(), "report 147 147".to_string()]
        );
    }
}
