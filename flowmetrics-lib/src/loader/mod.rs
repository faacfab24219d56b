//! Loading exported snapshot files from disk
//!
//! A snapshot is a directory tree of JSON files, one per exported entity: `issue_*.json`,
//! `pull_*.json`, and `*_reviews_*.json` (each holding the list of reviews on one pull
//! request). Sub-resource files that share a primary prefix, such as issue event dumps or
//! the review lists of a pull request, are excluded from the primary sets by name.
//!
//! # Implementation Model
//!
//! [`load_dir`] walks the root recursively, keeps the files whose name matches a
//! [`FileSet`], sorts them by path for determinism, and runs an extractor on each parsed
//! file. Loading is all-or-nothing: the first unreadable, unparsable, or unextractable file
//! aborts the load with a [`DataSourceError`]. A [`Progress`] callback is told about every
//! file before it is read.
//!
//! [`load_snapshot`] loads all three file sets and flattens the per-file review lists into
//! a single list.

mod error;
mod file_set;
mod load;
mod progress;
mod snapshot;

pub use error::DataSourceError;
pub use file_set::FileSet;
pub use load::load_dir;
pub use progress::Progress;
pub use snapshot::{Snapshot, load_snapshot};
