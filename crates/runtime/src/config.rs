use std::path::PathBuf;

pub const PROGRAM_NAME: &str = "filecat";
pub const PROGRAM_LOG_LEVEL: &str = "FILECAT_LOG_LEVEL";

/// Comma-separated list of extensions hidden from listings, e.g. `gif,zip`.
pub const EXCLUDE_EXTENSIONS_ENV: &str = "FILECAT_EXCLUDE_EXTENSIONS";
/// Comma-separated list of absolute paths hidden from listings.
pub const EXCLUDE_PATHS_ENV: &str = "FILECAT_EXCLUDE_PATHS";

/// Default directory a browser opens on.
///
/// Prefers the user's documents directory, then home, then the current
/// working directory.
pub fn default_browse_root() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Split a comma-separated environment value into trimmed, non-empty items.
/// An unset or non-unicode variable yields an empty list.
pub fn env_list(var: &str) -> Vec<String> {
    std::env::var(var)
        .map(|raw| split_list(&raw))
        .unwrap_or_default()
}

pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
