use filecat_fs::{FileCategory, FileDescriptor};

/// How a host should present a selected entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewStrategy {
    /// Open the directory as a new listing.
    Navigate,
    /// Render with [`render_preview`](crate::render_preview) in a markup view.
    Text,
    /// Hand the path to the platform's native previewer.
    Native,
}

impl PreviewStrategy {
    pub fn for_category(category: FileCategory) -> Self {
        match category {
            FileCategory::Directory => PreviewStrategy::Navigate,
            FileCategory::StructuredText(_) => PreviewStrategy::Text,
            FileCategory::Image
            | FileCategory::Pdf
            | FileCategory::Archive
            | FileCategory::Generic => PreviewStrategy::Native,
        }
    }
}

pub fn preview_strategy(descriptor: &FileDescriptor) -> PreviewStrategy {
    PreviewStrategy::for_category(descriptor.category())
}

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod tests;
