use super::DataSourceError;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobMatcher};
use walkdir::WalkDir;

const ISSUE_FILES: &str = "issue_*.json";
const ISSUE_SUB_RESOURCES: &str = "*events*";
const PULL_FILES: &str = "pull_*.json";
const PULL_SUB_RESOURCES: &str = "*reviews*";
const REVIEW_FILES: &str = "*_reviews_*.json";

/// Selects snapshot files by name
///
/// A file belongs to the set when its name matches the include pattern and does not match
/// the exclude pattern. Directory components play no part in matching.
#[derive(Debug, Clone)]
pub struct FileSet {
    include: GlobMatcher,
    exclude: Option<GlobMatcher>,
}

impl FileSet {
    /// Create a file set from glob patterns over file names
    pub fn new(include: &str, exclude: Option<&str>) -> Result<Self, DataSourceError> {
        Ok(Self {
            include: compile(include)?,
            exclude: exclude.map(compile).transpose()?,
        })
    }

    /// Exported issues, without their event dumps
    #[must_use]
    pub fn issues() -> Self {
        Self::new(ISSUE_FILES, Some(ISSUE_SUB_RESOURCES)).expect("built-in issue patterns are valid")
    }

    /// Exported pull requests, without their review lists
    #[must_use]
    pub fn pull_requests() -> Self {
        Self::new(PULL_FILES, Some(PULL_SUB_RESOURCES)).expect("built-in pull request patterns are valid")
    }

    /// Exported review lists, one file per pull request
    #[must_use]
    pub fn reviews() -> Self {
        Self::new(REVIEW_FILES, None).expect("built-in review patterns are valid")
    }

    /// Whether a file with this name belongs to the set
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        self.include.is_match(file_name) && !self.exclude.as_ref().is_some_and(|e| e.is_match(file_name))
    }

    /// Every file below `root` that belongs to the set, sorted by path
    pub fn find(&self, root: &Utf8Path) -> Result<Vec<Utf8PathBuf>, DataSourceError> {
        let mut paths = Vec::new();

        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|source| DataSourceError::Walk {
                path: root.to_owned(),
                source,
            })?;

            if entry.file_type().is_dir() {
                continue;
            }

            let path = Utf8PathBuf::try_from(entry.into_path()).map_err(|e| DataSourceError::NonUtf8Path(e.into_path_buf()))?;
            if path.file_name().is_some_and(|name| self.matches(name)) {
                paths.push(path);
            }
        }

        paths.sort();
        Ok(paths)
    }
}

fn compile(pattern: &str) -> Result<GlobMatcher, DataSourceError> {
    Glob::new(pattern)
        .map(|glob| glob.compile_matcher())
        .map_err(|source| DataSourceError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}
