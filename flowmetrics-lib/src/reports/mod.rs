//! Report generation for engineering flow metrics
//!
//! Two generators are provided, each accessed through a `generate` function:
//! - **Console**: a fixed-layout terminal summary with status colors
//! - **JSON**: the same summary as machine-readable structured data
//!
//! Both operate on a [`MetricsSummary`](crate::metrics::MetricsSummary) and write to any
//! `core::fmt::Write`, leaving the choice of destination to the caller. The console
//! generator classifies each metric against a [`ReportThresholds`] table and colors it by
//! the resulting [`Status`].

mod console;
mod json;
mod thresholds;

pub use console::generate as generate_console;
pub use json::generate as generate_json;
pub use thresholds::{ReportThresholds, Status};
