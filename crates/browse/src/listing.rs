use std::path::{Path, PathBuf};

use filecat_fs::{CatalogError, ExclusionRules, FileDescriptor, delete, list_directory};
use filecat_runtime::default_browse_root;
use log::debug;

use crate::{
    search::{filter_by_name, sort_by_name},
    sections::{Section, sections},
};

/// The current contents of one directory, as a browser screen holds them.
///
/// Nothing is cached beyond the last enumeration: `refresh` and `delete`
/// re-read the directory.
#[derive(Debug, Clone)]
pub struct Listing {
    dir: PathBuf,
    rules: ExclusionRules,
    entries: Vec<FileDescriptor>,
}

impl Listing {
    pub fn load(dir: impl Into<PathBuf>, rules: ExclusionRules) -> Result<Self, CatalogError> {
        let mut listing = Listing {
            dir: dir.into(),
            rules,
            entries: Vec::new(),
        };
        listing.refresh()?;
        Ok(listing)
    }

    /// Listing of the default browse root (documents, else home).
    pub fn load_default(rules: ExclusionRules) -> Result<Self, CatalogError> {
        Listing::load(default_browse_root(), rules)
    }

    /// Re-enumerate the directory, sorted by name.
    pub fn refresh(&mut self) -> Result<(), CatalogError> {
        let mut entries = list_directory(&self.dir, &self.rules)?;
        sort_by_name(&mut entries);
        self.entries = entries;
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn rules(&self) -> &ExclusionRules {
        &self.rules
    }

    pub fn entries(&self) -> &[FileDescriptor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn search(&self, query: &str) -> Vec<&FileDescriptor> {
        filter_by_name(&self.entries, query)
    }

    pub fn sections(&self) -> Vec<Section> {
        sections(&self.entries)
    }

    /// Open a directory entry as a new listing with the same rules.
    pub fn open(&self, descriptor: &FileDescriptor) -> Result<Listing, CatalogError> {
        if !descriptor.is_directory() {
            return Err(CatalogError::NotADirectory {
                path: descriptor.path().to_path_buf(),
            });
        }
        Listing::load(descriptor.path(), self.rules.clone())
    }

    /// Delete an entry, then reload so the listing reflects the change.
    pub fn delete(&mut self, descriptor: &FileDescriptor) -> Result<(), CatalogError> {
        delete(descriptor)?;
        debug!("[listing] deleted {:?}, reloading {:?}", descriptor.path(), self.dir);
        self.refresh()
    }
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
