#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for flowmetrics
//!
//! This library consolidates all functionality for the flowmetrics tool, which reports
//! engineering flow metrics (review latency, merge time, issue completion) from exported
//! issue, pull request, and review JSON files.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`records`]: Extraction of typed records from raw export JSON
//! - [`loader`]: Discovery and loading of snapshot files
//! - [`metrics`]: Aggregation of records into a metrics summary
//! - [`reports`]: Report generation for the console and JSON

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod loader;
#[cfg(not(any(debug_assertions, test)))]
mod loader;

#[cfg(any(debug_assertions, test))]
pub mod metrics;
#[cfg(not(any(debug_assertions, test)))]
mod metrics;

#[cfg(any(debug_assertions, test))]
pub mod records;
#[cfg(not(any(debug_assertions, test)))]
mod records;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
