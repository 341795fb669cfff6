//! # gearspeed-orchestration
//!
//! Runs the analysis pipeline, selects listing views, and defines the
//! presenter interface the reporter implements.

pub mod interfaces;
pub mod orchestrator;
pub mod selection;

pub use interfaces::{AnalysisReport, ReportPresenter};
pub use orchestrator::{analyze_setups, run_analysis};
pub use selection::{sample_ends, select_setups, ListingView, SortOrder};
