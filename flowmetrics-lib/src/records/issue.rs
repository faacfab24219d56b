use super::raw::{self, RawLabel, RawUser};
use super::{ExtractError, MissingRequiredFieldError, RecordKind};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// An issue, flattened from an exported issue object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    pub number: u64,
    pub title: String,
    pub url: String,
    pub state: String,
    pub author: String,
    pub author_association: String,
    pub assignees: Vec<String>,
    pub labels: Vec<String>,
    pub comments: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub body: String,
}

impl IssueRecord {
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed_at.is_some()
    }
}

#[derive(Debug, Deserialize)]
struct RawIssue {
    number: Option<u64>,
    title: Option<String>,
    html_url: Option<String>,
    state: Option<String>,
    user: Option<RawUser>,
    author_association: Option<String>,
    assignees: Option<Vec<RawUser>>,
    labels: Option<Vec<RawLabel>>,
    comments: Option<u64>,
    #[serde(default, deserialize_with = "raw::optional_timestamp")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "raw::optional_timestamp")]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "raw::optional_timestamp")]
    closed_at: Option<DateTime<Utc>>,
    body: Option<String>,
}

/// Extract an [`IssueRecord`] from one exported issue object.
///
/// Only `number` is required; everything else falls back to an empty default.
pub fn extract_issue(value: &serde_json::Value) -> Result<IssueRecord, ExtractError> {
    let issue = RawIssue::deserialize(value)?;

    Ok(IssueRecord {
        number: issue.number.ok_or(MissingRequiredFieldError::new(RecordKind::Issue, "number"))?,
        title: issue.title.unwrap_or_default(),
        url: issue.html_url.unwrap_or_default(),
        state: issue.state.unwrap_or_default(),
        author: raw::login(issue.user).unwrap_or_default(),
        author_association: issue.author_association.unwrap_or_default(),
        assignees: raw::logins(issue.assignees),
        labels: raw::label_names(issue.labels),
        comments: issue.comments.unwrap_or(0),
        created_at: issue.created_at,
        updated_at: issue.updated_at,
        closed_at: issue.closed_at,
        body: issue.body.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_full_issue() {
        let value = json!({
            "number": 42,
            "title": "Flaky login test",
            "html_url": "https://github.com/acme/widgets/issues/42",
            "state": "closed",
            "user": { "login": "alice" },
            "author_association": "MEMBER",
            "assignees": [{ "login": "bob" }, { "login": "carol" }],
            "labels": [{ "name": "bug" }],
            "comments": 3,
            "created_at": "2026-01-05T09:00:00Z",
            "updated_at": "2026-01-06T09:00:00Z",
            "closed_at": "2026-01-06T08:00:00Z",
            "body": "Fails about one run in ten.",
            "reactions": { "+1": 2 }
        });

        let issue = extract_issue(&value).unwrap();
        assert_eq!(issue.number, 42);
        assert_eq!(issue.title, "Flaky login test");
        assert_eq!(issue.url, "https://github.com/acme/widgets/issues/42");
        assert_eq!(issue.author, "alice");
        assert_eq!(issue.assignees, vec!["bob", "carol"]);
        assert_eq!(issue.labels, vec!["bug"]);
        assert_eq!(issue.comments, 3);
        assert!(issue.is_closed());
        assert_eq!(issue.created_at.unwrap().to_rfc3339(), "2026-01-05T09:00:00+00:00");
    }

    #[test]
    fn test_extract_minimal_issue_uses_defaults() {
        let issue = extract_issue(&json!({ "number": 7, "closed_at": null, "body": null })).unwrap();
        assert_eq!(issue.number, 7);
        assert_eq!(issue.title, "");
        assert_eq!(issue.author, "");
        assert!(issue.assignees.is_empty());
        assert!(issue.labels.is_empty());
        assert_eq!(issue.comments, 0);
        assert!(issue.created_at.is_none());
        assert!(!issue.is_closed());
    }

    #[test]
    fn test_extract_issue_without_number_fails() {
        let err = extract_issue(&json!({ "title": "orphan" })).unwrap_err();
        match err {
            ExtractError::MissingRequiredField(e) => {
                assert_eq!(e.record, RecordKind::Issue);
                assert_eq!(e.field, "number");
            }
            ExtractError::Malformed(e) => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn test_extract_issue_with_bad_timestamp_is_malformed() {
        let err = extract_issue(&json!({ "number": 1, "created_at": "last tuesday" })).unwrap_err();
        assert!(matches!(err, ExtractError::Malformed(_)));
    }
}
