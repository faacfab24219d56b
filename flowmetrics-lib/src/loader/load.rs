use super::{DataSourceError, FileSet, Progress};
use crate::records::ExtractError;
use camino::Utf8Path;
use std::fs;

const LOG_TARGET: &str = "    loader";

/// Load and extract every file of `files` below `root`.
///
/// Files are processed in path order and the results keep that order. The first failure
/// aborts the load; no partial results are returned.
pub fn load_dir<T>(
    root: &Utf8Path,
    files: &FileSet,
    progress: &mut dyn Progress,
    mut extract: impl FnMut(&serde_json::Value) -> Result<T, ExtractError>,
) -> Result<Vec<T>, DataSourceError> {
    if !root.is_dir() {
        return Err(DataSourceError::RootNotFound(root.to_owned()));
    }

    let paths = files.find(root)?;
    log::debug!(target: LOG_TARGET, "Found {} matching file(s) below '{root}'", paths.len());

    let mut results = Vec::with_capacity(paths.len());
    for path in paths {
        progress.file_loading(&path);
        log::info!(target: LOG_TARGET, "Loading '{path}'");

        let text = fs::read_to_string(&path).map_err(|source| DataSourceError::Read { path: path.clone(), source })?;
        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|source| DataSourceError::Parse { path: path.clone(), source })?;
        let record = extract(&value).map_err(|source| DataSourceError::Extract { path: path.clone(), source })?;

        results.push(record);
    }

    Ok(results)
}
