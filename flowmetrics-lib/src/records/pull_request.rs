use super::raw::{self, RawLabel, RawUser};
use super::{ExtractError, MissingRequiredFieldError, PullRequestKey, RecordKind, hours_between};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A pull request, flattened from an exported pull request object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRecord {
    // Identity
    pub number: u64,
    pub repo: String,
    pub author: String,
    pub title: String,
    pub author_association: String,

    // State
    pub state: String,
    pub draft: bool,
    pub merged: bool,
    pub mergeable: Option<bool>,
    pub mergeable_state: String,

    // Timestamps
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub merged_at: Option<DateTime<Utc>>,

    // Review posture
    pub requested_reviewers: Vec<String>,

    // Activity and size
    pub comments: u64,
    pub review_comments: u64,
    pub commits: u64,
    pub additions: u64,
    pub deletions: u64,
    pub changed_files: u64,

    pub labels: Vec<String>,
}

impl PullRequestRecord {
    #[must_use]
    pub fn key(&self) -> PullRequestKey {
        PullRequestKey::new(&self.repo, self.number)
    }

    /// Hours from creation to merge, if the pull request was merged.
    #[must_use]
    pub fn hours_to_merge(&self) -> Option<f64> {
        Some(hours_between(self.created_at?, self.merged_at?))
    }
}

#[derive(Debug, Deserialize)]
struct RawBase {
    repo: Option<RawRepo>,
}

#[derive(Debug, Deserialize)]
struct RawRepo {
    full_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPullRequest {
    number: Option<u64>,
    title: Option<String>,
    base: Option<RawBase>,
    user: Option<RawUser>,
    author_association: Option<String>,
    state: Option<String>,
    draft: Option<bool>,
    merged: Option<bool>,
    mergeable: Option<bool>,
    mergeable_state: Option<String>,
    #[serde(default, deserialize_with = "raw::optional_timestamp")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "raw::optional_timestamp")]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "raw::optional_timestamp")]
    closed_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "raw::optional_timestamp")]
    merged_at: Option<DateTime<Utc>>,
    requested_reviewers: Option<Vec<RawUser>>,
    comments: Option<u64>,
    review_comments: Option<u64>,
    commits: Option<u64>,
    additions: Option<u64>,
    deletions: Option<u64>,
    changed_files: Option<u64>,
    labels: Option<Vec<RawLabel>>,
}

/// Extract a [`PullRequestRecord`] from one exported pull request object.
///
/// `number`, `base.repo.full_name`, and `user.login` are required.
pub fn extract_pull_request(value: &serde_json::Value) -> Result<PullRequestRecord, ExtractError> {
    let pr = RawPullRequest::deserialize(value)?;

    let missing = |field| MissingRequiredFieldError::new(RecordKind::PullRequest, field);

    let number = pr.number.ok_or_else(|| missing("number"))?;
    let repo = pr
        .base
        .and_then(|b| b.repo)
        .and_then(|r| r.full_name)
        .ok_or_else(|| missing("base.repo.full_name"))?;
    let author = raw::login(pr.user).ok_or_else(|| missing("user.login"))?;

    Ok(PullRequestRecord {
        number,
        repo,
        author,
        title: pr.title.unwrap_or_default(),
        author_association: pr.author_association.unwrap_or_default(),
        state: pr.state.unwrap_or_default(),
        draft: pr.draft.unwrap_or(false),
        merged: pr.merged.unwrap_or(pr.merged_at.is_some()),
        mergeable: pr.mergeable,
        mergeable_state: pr.mergeable_state.unwrap_or_default(),
        created_at: pr.created_at,
        updated_at: pr.updated_at,
        closed_at: pr.closed_at,
        merged_at: pr.merged_at,
        requested_reviewers: raw::logins(pr.requested_reviewers),
        comments: pr.comments.unwrap_or(0),
        review_comments: pr.review_comments.unwrap_or(0),
        commits: pr.commits.unwrap_or(0),
        additions: pr.additions.unwrap_or(0),
        deletions: pr.deletions.unwrap_or(0),
        changed_files: pr.changed_files.unwrap_or(0),
        labels: raw::label_names(pr.labels),
    })
}
