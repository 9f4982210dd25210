//! Command-line front end for the binary-to-decimal demo and benchmark

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod observability;
pub mod report;

pub use commands::{run_bench, run_convert, run_sweep};
pub use config::{Config, ConfigBuilder, OutputFormat, TelemetryConfig};
pub use error::{Error, Result};
pub use report::{BenchPoint, BenchReport, DemoReport};
