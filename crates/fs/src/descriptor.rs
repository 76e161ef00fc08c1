use std::{
    fs::{self, Metadata},
    hash::{Hash, Hasher},
    path::{Path, PathBuf},
    time::SystemTime,
};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    category::{FileCategory, classify},
    error::CatalogError,
};

/// Best-effort metadata for a regular file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileAttributes {
    /// Size in bytes
    pub size: u64,
    /// Creation time; many Unix filesystems cannot report it
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    /// May be unavailable depending on mount options
    pub accessed: Option<DateTime<Utc>>,
    pub readonly: bool,
}

impl FileAttributes {
    pub fn from_metadata(metadata: &Metadata) -> Self {
        FileAttributes {
            size: metadata.len(),
            created: to_datetime(metadata.created().ok()),
            modified: to_datetime(metadata.modified().ok()),
            accessed: to_datetime(metadata.accessed().ok()),
            readonly: metadata.permissions().readonly(),
        }
    }
}

/// Immutable snapshot of one file-system entry.
///
/// Identity is the path alone: two descriptors compare equal when their
/// paths do, whatever their attributes say. The category is always derived
/// from the extension at construction.
#[derive(Debug, Clone, Serialize)]
pub struct FileDescriptor {
    display_name: String,
    is_directory: bool,
    extension: Option<String>,
    category: FileCategory,
    path: PathBuf,
    attributes: Option<FileAttributes>,
}

impl FileDescriptor {
    /// Build a descriptor. Directories drop any extension and attributes.
    pub(crate) fn new(
        path: PathBuf,
        display_name: String,
        is_directory: bool,
        attributes: Option<FileAttributes>,
    ) -> Self {
        if is_directory {
            return FileDescriptor {
                display_name,
                is_directory,
                extension: None,
                category: FileCategory::Directory,
                path,
                attributes: None,
            };
        }

        let extension = path
            .extension()
            .and_then(|os| os.to_str())
            .map(str::to_owned);
        let category = classify(extension.as_deref());

        FileDescriptor {
            display_name,
            is_directory,
            extension,
            category,
            path,
            attributes,
        }
    }

    /// Resolve a single path into a descriptor, following symlinks.
    ///
    /// A dangling symlink resolves like it lists: a file without
    /// attributes.
    pub fn resolve(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        let (is_directory, attributes) = match fs::metadata(path) {
            Ok(metadata) => {
                let is_dir = metadata.is_dir();
                (is_dir, (!is_dir).then(|| FileAttributes::from_metadata(&metadata)))
            }
            Err(e) => match fs::symlink_metadata(path) {
                Ok(link) if link.file_type().is_symlink() => (false, None),
                _ => return Err(CatalogError::from_stat(path.to_path_buf(), e)),
            },
        };

        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(FileDescriptor::new(
            path.to_path_buf(),
            display_name,
            is_directory,
            attributes,
        ))
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    /// Extension as found on disk, case preserved, without the dot.
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn category(&self) -> FileCategory {
        self.category
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn attributes(&self) -> Option<&FileAttributes> {
        self.attributes.as_ref()
    }
}

impl PartialEq for FileDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for FileDescriptor {}

impl Hash for FileDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

fn to_datetime(t: Option<SystemTime>) -> Option<DateTime<Utc>> {
    t.map(DateTime::<Utc>::from)
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod tests;
