use super::{DataSourceError, FileSet, Progress, load_dir};
use crate::records::{IssueRecord, PullRequestRecord, ReviewFilter, ReviewRecord, extract_issue, extract_pull_request, extract_reviews};
use camino::Utf8Path;

const LOG_TARGET: &str = "    loader";

/// Every record of one exported snapshot
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub issues: Vec<IssueRecord>,
    pub pull_requests: Vec<PullRequestRecord>,

    /// The reviews of all pull requests, in file order
    pub reviews: Vec<ReviewRecord>,
}

/// Load the issues, pull requests, and reviews found below `root`.
pub fn load_snapshot(root: &Utf8Path, filter: &ReviewFilter, progress: &mut dyn Progress) -> Result<Snapshot, DataSourceError> {
    let resolved = root.canonicalize_utf8().unwrap_or_else(|_| root.to_owned());
    log::info!(target: LOG_TARGET, "Loading snapshot from '{resolved}'");

    let issues = load_dir(root, &FileSet::issues(), progress, extract_issue)?;
    let pull_requests = load_dir(root, &FileSet::pull_requests(), progress, extract_pull_request)?;
    let reviews: Vec<ReviewRecord> = load_dir(root, &FileSet::reviews(), progress, |value| extract_reviews(value, filter))?
        .into_iter()
        .flatten()
        .collect();

    log::info!(
        target: LOG_TARGET,
        "Loaded {} issue(s), {} pull request(s), and {} review(s)",
        issues.len(),
        pull_requests.len(),
        reviews.len()
    );

    Ok(Snapshot {
        issues,
        pull_requests,
        reviews,
    })
}
