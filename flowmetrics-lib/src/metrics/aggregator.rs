use super::summary::{BlockerMetric, MetricsSummary};
use super::{mean, median, percentage};
use crate::records::{IssueRecord, PullRequestKey, PullRequestRecord, ReviewRecord, hours_between};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

const LOG_TARGET: &str = "   metrics";
const HOURS_PER_DAY: f64 = 24.0;

/// First responses at or below this many hours count as compliant
pub const DEFAULT_RESPONSE_TARGET_HOURS: f64 = 24.0;

/// Compute the flow metrics for one snapshot.
///
/// `reviews` is the flat list of every review in the snapshot. A pull request's first
/// response is its earliest timestamped review; pull requests without one are left out of
/// the response statistics rather than counted as zero. Issues without a creation time are
/// left out of the completion rate entirely.
#[must_use]
pub fn aggregate(
    issues: &[IssueRecord],
    pull_requests: &[PullRequestRecord],
    reviews: &[ReviewRecord],
    response_target_hours: f64,
) -> MetricsSummary {
    let first_reviews = first_review_by_pull_request(reviews);

    let mut first_response_hours = Vec::with_capacity(pull_requests.len());
    let mut merge_days = Vec::with_capacity(pull_requests.len());

    for pr in pull_requests {
        let Some(created_at) = pr.created_at else {
            log::debug!(target: LOG_TARGET, "Pull request {} has no creation time, skipping", pr.key());
            continue;
        };

        if let Some(&first_review) = first_reviews.get(&pr.key()) {
            first_response_hours.push(hours_between(created_at, first_review));
        }

        if let Some(hours) = pr.hours_to_merge() {
            merge_days.push(hours / HOURS_PER_DAY);
        }
    }

    let compliant = first_response_hours.iter().filter(|&&h| h <= response_target_hours).count() as u64;

    let dated_issues = issues.iter().filter(|i| i.created_at.is_some());
    let issues_total = dated_issues.clone().count() as u64;
    let issues_completed = dated_issues.filter(|i| i.is_closed()).count() as u64;

    log::info!(
        target: LOG_TARGET,
        "Aggregated {} pull request(s): {} with a first response, {} merged; {issues_completed}/{issues_total} issue(s) completed",
        pull_requests.len(),
        first_response_hours.len(),
        merge_days.len(),
    );

    MetricsSummary {
        pull_requests: pull_requests.len() as u64,
        first_response_samples: first_response_hours.len() as u64,
        median_first_response_hours: median(&first_response_hours),
        mean_first_response_hours: mean(&first_response_hours),
        merge_samples: merge_days.len() as u64,
        median_merge_days: median(&merge_days),
        mean_merge_days: mean(&merge_days),
        review_compliance_pct: percentage(compliant, first_response_hours.len() as u64),
        issues_completed,
        issues_total,
        issues_completed_pct: percentage(issues_completed, issues_total),
        blockers: BlockerMetric::untracked(),
    }
}

/// Earliest submission time per pull request, ignoring reviews that were never submitted.
fn first_review_by_pull_request(reviews: &[ReviewRecord]) -> HashMap<&PullRequestKey, DateTime<Utc>> {
    let mut first: HashMap<&PullRequestKey, DateTime<Utc>> = HashMap::with_capacity(reviews.len());

    for review in reviews {
        if let Some(submitted_at) = review.submitted_at {
            let _ = first
                .entry(&review.pull_request)
                .and_modify(|t| *t = (*t).min(submitted_at))
                .or_insert(submitted_at);
        }
    }

    first
}
