//! Command-line interface and orchestration for flowmetrics
//!
//! This module implements the single flowmetrics command and coordinates the other
//! modules to turn an exported snapshot into a report. It handles argument parsing,
//! configuration management, logging setup, and progress output.
//!
//! # Execution Flow
//!
//! The `run` function parses command-line arguments using clap and hands them to
//! `process_report`, which:
//!
//! 1. Initializes logging and loads configuration
//! 2. Loads the snapshot with the `loader` module, announcing each file on the error stream
//! 3. Computes the summary with the `metrics` module
//! 4. Writes the console report to the output stream, and optionally a JSON report to a file
//!
//! Configuration is managed through a TOML file with a `[thresholds]` table (the report's
//! targets) and a `[reviews]` table (which reviewers and associations to ignore).

mod common;
mod config;
mod host;
mod progress_reporter;
mod report;
mod run;

#[cfg(debug_assertions)]
pub use config::Config;

pub use host::Host;
pub use progress_reporter::ProgressReporter;
pub use report::{ReportArgs, process_report};
pub use run::run;
