//! Flat metrics records extracted from exported code-hosting API payloads
//!
//! Each exported snapshot file mirrors a REST API object (an issue, a pull request, or
//! the list of reviews on a pull request). The extractors in this module map one such raw
//! value into a fixed-shape record: missing optional fields get explicit defaults (empty
//! strings, empty lists, zero counts, absent timestamps), while a missing identity field
//! fails with a [`MissingRequiredFieldError`].
//!
//! # Implementation Model
//!
//! Raw payloads are deserialized into private `Raw*` structs whose fields are all optional,
//! and then converted into the public records. Timestamps are parsed to `DateTime<Utc>` at
//! this layer, so downstream code never sees a malformed timestamp string.
//!
//! Reviews carry a structured [`PullRequestKey`] derived from the review's pull request
//! URL, which lets the aggregator join reviews to pull requests by value rather than by
//! string prefix.

mod elapsed;
mod error;
mod issue;
mod pull_request;
mod pull_request_key;
mod raw;
mod review;

pub use elapsed::hours_between;
pub use error::{ExtractError, MissingRequiredFieldError, RecordKind};
pub use issue::{IssueRecord, extract_issue};
pub use pull_request::{PullRequestRecord, extract_pull_request};
pub use pull_request_key::PullRequestKey;
pub use review::{DEFAULT_IGNORED_ASSOCIATIONS, DEFAULT_IGNORED_REVIEWERS, ReviewFilter, ReviewRecord, extract_reviews};
