use std::fmt;

use serde::Serialize;

/// Structured-text flavours worth pretty-printing before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StructuredKind {
    Json,
    Plist,
}

/// Closed classification of a catalog entry, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    Directory,
    Image,
    Pdf,
    Archive,
    StructuredText(StructuredKind),
    Generic,
}

impl FileCategory {
    #[inline]
    pub fn is_structured_text(self) -> bool {
        matches!(self, FileCategory::StructuredText(_))
    }

    /// Stable lowercase label, e.g. for logs or JSON consumers.
    pub fn label(self) -> &'static str {
        match self {
            FileCategory::Directory => "directory",
            FileCategory::Image => "image",
            FileCategory::Pdf => "pdf",
            FileCategory::Archive => "archive",
            FileCategory::StructuredText(StructuredKind::Json) => "json",
            FileCategory::StructuredText(StructuredKind::Plist) => "plist",
            FileCategory::Generic => "file",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a file extension to its category. Case-insensitive and total;
/// `Directory` is never returned since directories carry no extension.
pub fn classify(extension: Option<&str>) -> FileCategory {
    let Some(ext) = extension else {
        return FileCategory::Generic;
    };

    match ext.to_ascii_lowercase().as_str() {
        "gif" | "jpg" | "png" => FileCategory::Image,
        "pdf" => FileCategory::Pdf,
        "zip" => FileCategory::Archive,
        "json" => FileCategory::StructuredText(StructuredKind::Json),
        "plist" => FileCategory::StructuredText(StructuredKind::Plist),
        _ => FileCategory::Generic,
    }
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
