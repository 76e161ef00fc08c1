use filecat_runtime::{EXCLUDE_EXTENSIONS_ENV, EXCLUDE_PATHS_ENV, env_list};
use hashbrown::HashSet;
use std::path::{Path, PathBuf};

/// Exclusion configuration for a listing: extensions and exact paths that
/// are hidden. Built once by the caller and passed into every call.
#[derive(Debug, Clone, Default)]
pub struct ExclusionRules {
    /// Lowercase, without a leading dot
    extensions: HashSet<String>,
    paths: HashSet<PathBuf>,
}

impl ExclusionRules {
    pub fn new<E, P>(extensions: E, paths: P) -> Self
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: Into<PathBuf>,
    {
        let mut rules = ExclusionRules::default();
        for ext in extensions {
            rules.add_extension(ext.as_ref());
        }
        for path in paths {
            rules.add_path(path.into());
        }
        rules
    }

    /// Rules from `FILECAT_EXCLUDE_EXTENSIONS` and `FILECAT_EXCLUDE_PATHS`.
    pub fn from_env() -> Self {
        ExclusionRules::new(env_list(EXCLUDE_EXTENSIONS_ENV), env_list(EXCLUDE_PATHS_ENV))
    }

    #[must_use]
    pub fn with_extension(mut self, ext: impl AsRef<str>) -> Self {
        self.add_extension(ext.as_ref());
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_path(path.into());
        self
    }

    fn add_extension(&mut self, ext: &str) {
        let ext = normalize_extension(ext);
        if !ext.is_empty() {
            self.extensions.insert(ext.to_ascii_lowercase());
        }
    }

    fn add_path(&mut self, path: PathBuf) {
        self.paths.insert(resolve_rule_path(path));
    }

    pub fn excluded_extensions(&self) -> &HashSet<String> {
        &self.extensions
    }

    pub fn excluded_paths(&self) -> &HashSet<PathBuf> {
        &self.paths
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty() && self.paths.is_empty()
    }

    /// Whether an entry should be hidden. Directories pass `None` for the
    /// extension and can therefore only match a path rule.
    #[inline]
    #[must_use]
    pub fn is_excluded(&self, path: &Path, extension: Option<&str>) -> bool {
        if self.paths.contains(path) {
            return true;
        }

        match extension {
            Some(ext) if !self.extensions.is_empty() => {
                self.extensions.contains(ext.to_ascii_lowercase().as_str())
            }
            _ => false,
        }
    }
}

/// Stand-alone exclusion check over caller-owned sets.
///
/// Extension rules may use any case; matching is case-insensitive on both
/// sides and whole-extension only. Path rules match exactly.
pub fn is_excluded(
    path: &Path,
    extension: Option<&str>,
    excluded_extensions: &HashSet<String>,
    excluded_paths: &HashSet<PathBuf>,
) -> bool {
    if excluded_paths.contains(path) {
        return true;
    }

    extension.is_some_and(|ext| {
        excluded_extensions
            .iter()
            .any(|rule| normalize_extension(rule).eq_ignore_ascii_case(ext))
    })
}

/// Rule spelling accepted for extensions: surrounding whitespace and a
/// leading dot are ignored.
fn normalize_extension(rule: &str) -> &str {
    rule.trim().trim_start_matches('.')
}

/// Resolve a rule path the way listings build entry paths: the parent is
/// canonicalized (listings canonicalize the directory they read, e.g.
/// /var -> /private/var) but the last component is kept as named, so a
/// rule naming a symlink matches the link and not its target.
fn resolve_rule_path(path: PathBuf) -> PathBuf {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .and_then(|p| p.canonicalize().ok());

    let name = path.file_name().map(|n| n.to_os_string());

    match (parent, name) {
        (Some(parent), Some(name)) => parent.join(name),
        _ => path.canonicalize().unwrap_or(path),
    }
}

#[cfg(test)]
#[path = "excludes_tests.rs"]
mod tests;
