//! gearspeed library — application logic for the drivetrain analyzer.

pub mod app;
pub mod config;
pub mod errors;
