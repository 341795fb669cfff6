//! # gearspeed-cli
//!
//! Report rendering, JSON export, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::CLIReportPresenter;
