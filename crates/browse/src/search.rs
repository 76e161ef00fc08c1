use std::cmp::Ordering;

use filecat_fs::FileDescriptor;

/// Entries whose display name contains `query`, ignoring case.
///
/// A blank query matches everything, so an empty search box shows the
/// full listing.
pub fn filter_by_name<'a>(entries: &'a [FileDescriptor], query: &str) -> Vec<&'a FileDescriptor> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return entries.iter().collect();
    }

    entries
        .iter()
        .filter(|d| d.display_name().to_lowercase().contains(&needle))
        .collect()
}

/// Folded key used for alphabetical ordering: ASCII transliteration,
/// lowercased. "Éclair" sorts with "eclair".
pub(crate) fn sort_key(name: &str) -> String {
    deunicode::deunicode(name).to_lowercase()
}

/// Alphabetical comparison by folded name, then by exact name so the
/// order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b)).then_with(|| a.cmp(b))
}

pub fn sort_by_name(entries: &mut [FileDescriptor]) {
    entries.sort_by_cached_key(|d| (sort_key(d.display_name()), d.display_name().to_owned()));
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
