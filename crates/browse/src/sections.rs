use filecat_fs::FileDescriptor;

use crate::search::{compare_names, sort_key};

/// Index titles shown alongside a sectioned listing, in order.
pub const SECTION_INDEX_TITLES: [&str; 27] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z", "#",
];

const OTHER_INDEX: usize = 26;

/// A run of entries sharing an index title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    /// Position of `title` in [`SECTION_INDEX_TITLES`]
    pub index: usize,
    pub entries: Vec<FileDescriptor>,
}

/// Index of the section a name belongs to: its first letter after
/// transliteration, or `#` for digits, symbols and empty names.
pub fn section_index(name: &str) -> usize {
    sort_key(name)
        .chars()
        .next()
        .filter(char::is_ascii_alphabetic)
        .map(|c| (c.to_ascii_uppercase() as u8 - b'A') as usize)
        .unwrap_or(OTHER_INDEX)
}

/// Group entries into alphabetical sections, sorted within each section.
/// Empty sections are omitted; `#` comes last.
pub fn sections(entries: &[FileDescriptor]) -> Vec<Section> {
    let mut buckets: Vec<Vec<FileDescriptor>> = vec![Vec::new(); SECTION_INDEX_TITLES.len()];

    for entry in entries {
        buckets[section_index(entry.display_name())].push(entry.clone());
    }

    buckets
        .into_iter()
        .enumerate()
        .filter(|(_, bucket)| !bucket.is_empty())
        .map(|(index, mut bucket)| {
            bucket.sort_by(|a, b| compare_names(a.display_name(), b.display_name()));
            Section {
                title: SECTION_INDEX_TITLES[index],
                index,
                entries: bucket,
            }
        })
        .collect()
}

/// Map a tapped index title to the position of the section to scroll to:
/// the first non-empty section at or after that title.
pub fn section_for_index_title(sections: &[Section], title: &str) -> Option<usize> {
    let wanted = SECTION_INDEX_TITLES.iter().position(|t| *t == title)?;
    sections.iter().position(|s| s.index >= wanted)
}

#[cfg(test)]
#[path = "sections_tests.rs"]
mod tests;
