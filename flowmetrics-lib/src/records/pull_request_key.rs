use core::fmt::{Display, Formatter};
use std::sync::Arc;
use url::Url;

/// Identifies a pull request by repository and number
///
/// The repository full name (`owner/name`) is stored lowercased, because code hosts treat
/// repository names case-insensitively. Numbers compare exactly, so pull request `1` never
/// matches pull request `10`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PullRequestKey {
    repo: Arc<str>,
    number: u64,
}

impl PullRequestKey {
    #[must_use]
    pub fn new(repo: &str, number: u64) -> Self {
        Self {
            repo: Arc::from(repo.to_ascii_lowercase()),
            number,
        }
    }

    /// Parse an API pull request URL such as `https://api.github.com/repos/acme/widgets/pulls/12`.
    #[must_use]
    pub fn from_api_url(url: &str) -> Option<Self> {
        let url = Url::parse(url).ok()?;
        let segments: Vec<_> = url.path_segments()?.collect();
        match segments.as_slice() {
            ["repos", owner, repo, "pulls", number, ..] => Self::from_parts(owner, repo, number),
            _ => None,
        }
    }

    /// Parse a web pull request URL such as `https://github.com/acme/widgets/pull/12#pullrequestreview-99`.
    ///
    /// Trailing path segments (`/files`, `/commits/...`) and fragments are ignored.
    #[must_use]
    pub fn from_html_url(url: &str) -> Option<Self> {
        let url = Url::parse(url).ok()?;
        let segments: Vec<_> = url.path_segments()?.collect();
        match segments.as_slice() {
            [owner, repo, "pull", number, ..] => Self::from_parts(owner, repo, number),
            _ => None,
        }
    }

    fn from_parts(owner: &str, repo: &str, number: &str) -> Option<Self> {
        if owner.is_empty() || repo.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let number = number.parse().ok()?;
        Some(Self::new(&format!("{owner}/{repo}"), number))
    }

}

impl Display for PullRequestKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}#{}", self.repo, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_api_url() {
        let key = PullRequestKey::from_api_url("https://api.github.com/repos/acme/widgets/pulls/12").unwrap();
        assert_eq!(key, PullRequestKey::new("acme/widgets", 12));
    }

    #[test]
    fn test_from_html_url_with_fragment() {
        let key = PullRequestKey::from_html_url("https://github.com/acme/widgets/pull/12#pullrequestreview-3456").unwrap();
        assert_eq!(key, PullRequestKey::new("acme/widgets", 12));
    }

    #[test]
    fn test_from_html_url_with_trailing_segments() {
        let key = PullRequestKey::from_html_url("https://github.com/acme/widgets/pull/12/files").unwrap();
        assert_eq!(key, PullRequestKey::new("acme/widgets", 12));
    }

    #[test]
    fn test_number_boundary_is_anchored() {
        let pr_1 = PullRequestKey::new("acme/widgets", 1);
        for url in [
            "https://github.com/acme/widgets/pull/10#pullrequestreview-1",
            "https://github.com/acme/widgets/pull/123",
            "https://github.com/acme/widgets/pull/1x",
        ] {
            assert_ne!(PullRequestKey::from_html_url(url).as_ref(), Some(&pr_1), "{url}");
        }
        assert_eq!(PullRequestKey::from_html_url("https://github.com/acme/widgets/pull/1/files"), Some(pr_1));
    }

    #[test]
    fn test_repo_comparison_ignores_case() {
        assert_eq!(PullRequestKey::new("Acme/Widgets", 3), PullRequestKey::new("acme/widgets", 3));
    }

    #[test]
    fn test_rejects_other_urls() {
        assert!(PullRequestKey::from_html_url("https://github.com/acme/widgets/issues/12").is_none());
        assert!(PullRequestKey::from_html_url("https://github.com/acme/widgets/pull/").is_none());
        assert!(PullRequestKey::from_html_url("not a url").is_none());
        assert!(PullRequestKey::from_api_url("https://api.github.com/repos/acme/widgets/issues/12").is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(PullRequestKey::new("acme/widgets", 9).to_string(), "acme/widgets#9");
    }
}
