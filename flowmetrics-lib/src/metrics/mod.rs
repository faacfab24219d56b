//! Flow metrics derived from issue, pull request, and review records
//!
//! # Implementation Model
//!
//! [`aggregate`] makes a single pass over the loaded records and produces a
//! [`MetricsSummary`]. Reviews arrive as one flat list; they are grouped by the pull request
//! they belong to inside the aggregator, keyed by [`PullRequestKey`](crate::records::PullRequestKey),
//! keeping only the earliest submission per pull request.
//!
//! Every statistic follows a "no data is zero" policy: an empty sample set yields 0 for its
//! median, mean, and rate, never NaN and never an error.

mod aggregator;
mod stats;
mod summary;

pub use aggregator::{DEFAULT_RESPONSE_TARGET_HOURS, aggregate};
pub use stats::{mean, median, percentage};
pub use summary::{BlockerMetric, MetricsSummary};
