use super::raw::{self, RawUser};
use super::{ExtractError, MissingRequiredFieldError, PullRequestKey, RecordKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reviewer logins whose reviews never count as a response
pub const DEFAULT_IGNORED_REVIEWERS: &[&str] = &["codeant-ai[bot]"];

/// Author associations whose reviews never count as a response
pub const DEFAULT_IGNORED_ASSOCIATIONS: &[&str] = &["OWNER"];

/// A single pull request review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRecord {
    pub reviewer: String,
    pub state: String,
    pub submitted_at: Option<DateTime<Utc>>,
    pub review_url: String,
    pub commit_id: String,
    pub author_association: String,

    /// The pull request this review belongs to
    pub pull_request: PullRequestKey,
}

/// Decides which reviews are dropped during extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReviewFilter {
    /// Reviews by these logins are dropped (bots, automation accounts)
    #[serde(default = "default_ignored_reviewers")]
    pub ignored_reviewers: Vec<String>,

    /// Reviews whose author association is one of these are dropped
    #[serde(default = "default_ignored_associations")]
    pub ignored_associations: Vec<String>,
}

fn default_ignored_reviewers() -> Vec<String> {
    DEFAULT_IGNORED_REVIEWERS.iter().map(ToString::to_string).collect()
}

fn default_ignored_associations() -> Vec<String> {
    DEFAULT_IGNORED_ASSOCIATIONS.iter().map(ToString::to_string).collect()
}

impl Default for ReviewFilter {
    fn default() -> Self {
        Self {
            ignored_reviewers: default_ignored_reviewers(),
            ignored_associations: default_ignored_associations(),
        }
    }
}

impl ReviewFilter {
    /// Whether a review with this reviewer and association is suppressed
    #[must_use]
    pub fn suppresses(&self, reviewer: Option<&str>, association: Option<&str>) -> bool {
        reviewer.is_some_and(|login| self.ignored_reviewers.iter().any(|r| r == login))
            || association.is_some_and(|assoc| self.ignored_associations.iter().any(|a| a == assoc))
    }
}

#[derive(Debug, Deserialize)]
struct RawReview {
    user: Option<RawUser>,
    state: Option<String>,
    #[serde(default, deserialize_with = "raw::optional_timestamp")]
    submitted_at: Option<DateTime<Utc>>,
    html_url: Option<String>,
    pull_request_url: Option<String>,
    commit_id: Option<String>,
    author_association: Option<String>,
}

/// Extract the reviews from one exported review list.
///
/// Reviews suppressed by `filter` are dropped; the remaining reviews keep their input order.
/// Each surviving review must identify its pull request through `pull_request_url` or
/// `html_url`.
pub fn extract_reviews(value: &serde_json::Value, filter: &ReviewFilter) -> Result<Vec<ReviewRecord>, ExtractError> {
    let reviews = Vec::<RawReview>::deserialize(value)?;
    let mut records = Vec::with_capacity(reviews.len());

    for review in reviews {
        let reviewer = raw::login(review.user);
        if filter.suppresses(reviewer.as_deref(), review.author_association.as_deref()) {
            continue;
        }

        let pull_request = review
            .pull_request_url
            .as_deref()
            .and_then(PullRequestKey::from_api_url)
            .or_else(|| review.html_url.as_deref().and_then(PullRequestKey::from_html_url))
            .ok_or(MissingRequiredFieldError::new(RecordKind::Review, "pull_request_url"))?;

        records.push(ReviewRecord {
            reviewer: reviewer.unwrap_or_default(),
            state: review.state.unwrap_or_default(),
            submitted_at: review.submitted_at,
            review_url: review.html_url.unwrap_or_default(),
            commit_id: review.commit_id.unwrap_or_default(),
            author_association: review.author_association.unwrap_or_default(),
            pull_request,
        });
    }

    Ok(records)
}
