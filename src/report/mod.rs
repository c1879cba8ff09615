pub mod format;
pub mod config;
pub mod sections;
pub mod demo;

pub use config::{DemoConfig, Section};
pub use demo::{DemoReport, build_report, run_demo};
