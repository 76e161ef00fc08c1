use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures surfaced by the directory catalog.
///
/// Per-entry metadata problems during a listing never reach the caller;
/// they only degrade that entry's attributes.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no such file or directory: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("not a regular file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("failed to stat {}: {source}", path.display())]
    Metadata { path: PathBuf, source: io::Error },

    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to delete {}: {source}", path.display())]
    Delete { path: PathBuf, source: io::Error },
}

impl CatalogError {
    /// Map a stat failure, keeping "missing" distinct from other errors.
    pub(crate) fn from_stat(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            CatalogError::NotFound { path }
        } else {
            CatalogError::Metadata { path, source }
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            CatalogError::NotFound { path }
            | CatalogError::NotADirectory { path }
            | CatalogError::NotAFile { path }
            | CatalogError::Metadata { path, .. }
            | CatalogError::ReadDir { path, .. }
            | CatalogError::Read { path, .. }
            | CatalogError::Delete { path, .. } => path,
        }
    }
}
