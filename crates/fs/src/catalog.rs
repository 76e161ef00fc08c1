use std::{
    fs::{self, DirEntry, read_dir},
    io,
    path::Path,
};

use log::{debug, warn};

use crate::{
    descriptor::{FileAttributes, FileDescriptor},
    error::CatalogError,
    excludes::ExclusionRules,
};

/// List the immediate children of `dir`, minus anything `rules` excludes.
///
/// Entries come back in the order the filesystem yields them; callers sort.
/// The directory is canonicalized first, so descriptor paths are resolved
/// paths. Metadata failures on a single entry leave its attributes empty
/// rather than failing the listing.
pub fn list_directory(
    dir: impl AsRef<Path>,
    rules: &ExclusionRules,
) -> Result<Vec<FileDescriptor>, CatalogError> {
    let dir = dir.as_ref();

    let metadata =
        fs::metadata(dir).map_err(|e| CatalogError::from_stat(dir.to_path_buf(), e))?;
    if !metadata.is_dir() {
        return Err(CatalogError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let root = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    let rd = read_dir(&root).map_err(|source| CatalogError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut listing = Vec::new();
    let mut excluded = 0usize;

    for entry_res in rd {
        let entry = match entry_res {
            Ok(e) => e,
            Err(e) => {
                warn!("[list_directory] error reading entry in {:?}: {e}", root);
                continue;
            }
        };

        let Some(descriptor) = inspect_entry(&entry) else {
            continue;
        };

        if rules.is_excluded(descriptor.path(), descriptor.extension()) {
            excluded += 1;
            continue;
        }

        listing.push(descriptor);
    }

    debug!(
        "[list_directory] {:?}: {} entries, {} excluded",
        root,
        listing.len(),
        excluded
    );

    Ok(listing)
}

fn inspect_entry(entry: &DirEntry) -> Option<FileDescriptor> {
    let full_path = entry.path();

    let name = match entry.file_name().into_string() {
        Ok(name) => name,
        Err(raw) => {
            warn!("[list_directory] skipping non UTF-8 name {:?}", raw);
            return None;
        }
    };

    // One stat per entry, following symlinks so a link to a directory
    // browses like a directory.
    let (is_directory, attributes) = match fs::metadata(&full_path) {
        Ok(metadata) => {
            let is_dir = metadata.is_dir();
            (is_dir, (!is_dir).then(|| FileAttributes::from_metadata(&metadata)))
        }
        Err(e) => {
            warn!("[list_directory] metadata({:?}) failed: {e}", full_path);
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            (is_dir, None)
        }
    };

    Some(FileDescriptor::new(full_path, name, is_directory, attributes))
}

/// Remove the entry a descriptor names. Directories are removed
/// recursively; a symlink is removed itself, never its target.
///
/// The path is re-checked at call time since the descriptor may be stale.
/// Every failure, including the entry already being gone, is returned.
pub fn delete(descriptor: &FileDescriptor) -> Result<(), CatalogError> {
    let path = descriptor.path();

    let result = fs::symlink_metadata(path).and_then(|metadata| {
        if metadata.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        }
    });

    match result {
        Ok(()) => {
            debug!("[delete] removed {:?}", path);
            Ok(())
        }
        Err(source) => {
            warn!("[delete] {:?} failed: {source}", path);
            Err(CatalogError::Delete {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Read the full contents of a file descriptor, e.g. for previewing.
pub fn read_contents(descriptor: &FileDescriptor) -> Result<Vec<u8>, CatalogError> {
    let path = descriptor.path();
    if descriptor.is_directory() {
        return Err(CatalogError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CatalogError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CatalogError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
