use strum::Display;
use thiserror::Error;

/// The kind of record an extractor produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum RecordKind {
    #[strum(serialize = "issue")]
    Issue,

    #[strum(serialize = "pull request")]
    PullRequest,

    #[strum(serialize = "review")]
    Review,
}

/// A raw record lacks one of the identity fields every valid export carries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{record} record is missing required field '{field}'")]
pub struct MissingRequiredFieldError {
    pub record: RecordKind,
    pub field: &'static str,
}

impl MissingRequiredFieldError {
    #[must_use]
    pub const fn new(record: RecordKind, field: &'static str) -> Self {
        Self { record, field }
    }
}

/// Failure to turn a raw payload into a record
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    MissingRequiredField(#[from] MissingRequiredFieldError),

    /// A field has the wrong JSON type, or a timestamp is not RFC 3339
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = MissingRequiredFieldError::new(RecordKind::PullRequest, "base.repo.full_name");
        assert_eq!(err.to_string(), "pull request record is missing required field 'base.repo.full_name'");
    }

    #[test]
    fn test_extract_error_is_transparent_for_missing_field() {
        let err = ExtractError::from(MissingRequiredFieldError::new(RecordKind::Issue, "number"));
        assert_eq!(err.to_string(), "issue record is missing required field 'number'");
    }
}
