use filecat_fs::{FileCategory, FileDescriptor, StructuredKind, read_contents};
use log::debug;

use crate::{
    document::html_document,
    error::{DecodeError, PreviewError},
    structured::{describe_plist, pretty_json},
};

/// A rendered preview ready for a markup view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPreview {
    /// Title for the preview screen, the entry's display name
    pub title: String,
    pub html: String,
}

/// Turn raw bytes into display text for a category.
///
/// Property lists and JSON documents are pretty-printed when they parse;
/// anything else, including malformed structured text, is decoded as
/// UTF-8 verbatim. Only a failed UTF-8 decode is an error.
pub fn format_text(category: FileCategory, bytes: &[u8]) -> Result<String, DecodeError> {
    let structured = match category {
        FileCategory::StructuredText(StructuredKind::Plist) => describe_plist(bytes),
        FileCategory::StructuredText(StructuredKind::Json) => pretty_json(bytes),
        _ => None,
    };

    if let Some(text) = structured {
        return Ok(text);
    }

    if category.is_structured_text() {
        debug!("[format_text] {category} did not parse, showing raw text");
    }

    let text = std::str::from_utf8(bytes)?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_owned())
}

/// Render `bytes` of `descriptor` as an HTML page with the text escaped
/// inside a `<pre>` block.
pub fn render_preview(descriptor: &FileDescriptor, bytes: &[u8]) -> Result<String, DecodeError> {
    let text = format_text(descriptor.category(), bytes)?;
    Ok(html_document(&text))
}

/// Read a file through the catalog and render its preview.
pub fn load_preview(descriptor: &FileDescriptor) -> Result<TextPreview, PreviewError> {
    let bytes = read_contents(descriptor)?;
    let html = render_preview(descriptor, &bytes)?;

    Ok(TextPreview {
        title: descriptor.display_name().to_owned(),
        html,
    })
}

#[cfg(test)]
#[path = "formatter_tests.rs"]
mod tests;
