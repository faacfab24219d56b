use serde::Serialize;

/// Engineering flow metrics for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct MetricsSummary {
    /// Number of pull requests considered
    pub pull_requests: u64,

    // Time to first response, in hours
    pub first_response_samples: u64,
    pub median_first_response_hours: f64,
    pub mean_first_response_hours: f64,

    // Time to merge, in days
    pub merge_samples: u64,
    pub median_merge_days: f64,
    pub mean_merge_days: f64,

    /// Share of first responses within the response target, 0..=100
    pub review_compliance_pct: f64,

    // Issue completion
    pub issues_completed: u64,
    pub issues_total: u64,
    pub issues_completed_pct: f64,

    pub blockers: BlockerMetric,
}

/// Blockers resolved within 48 hours
///
/// Exports carry no notion of a blocking issue, so this is always reported as 0/0 and
/// flagged as untracked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlockerMetric {
    pub resolved: u64,
    pub total: u64,
    pub pct: f64,
    pub tracked: bool,
}

impl BlockerMetric {
    #[must_use]
    pub const fn untracked() -> Self {
        Self {
            resolved: 0,
            total: 0,
            pct: 0.0,
            tracked: false,
        }
    }
}

impl Default for BlockerMetric {
    fn default() -> Self {
        Self::untracked()
    }
}
