use crate::records::ExtractError;
use camino::Utf8PathBuf;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a snapshot directory
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("data directory '{0}' does not exist or is not a directory")]
    RootNotFound(Utf8PathBuf),

    #[error("could not scan data directory '{path}'")]
    Walk {
        path: Utf8PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("path '{}' is not valid UTF-8", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("invalid file name pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("could not read '{path}'")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{path}' is not valid JSON")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not extract records from '{path}'")]
    Extract {
        path: Utf8PathBuf,
        #[source]
        source: ExtractError,
    },
}

impl DataSourceError {
    /// The file or directory the failure relates to, when there is one
    #[must_use]
    pub fn path(&self) -> Option<&Utf8PathBuf> {
        match self {
            Self::RootNotFound(path)
            | Self::Walk { path, .. }
            | Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::Extract { path, .. } => Some(path),
            Self::NonUtf8Path(_) | Self::InvalidPattern { .. } => None,
        }
    }
}
