mod document;
mod error;
mod escape;
mod formatter;
mod strategy;
mod structured;

pub use document::html_document;
pub use error::{DecodeError, PreviewError};
pub use escape::escape_html;
pub use formatter::{TextPreview, format_text, load_preview, render_preview};
pub use strategy::{PreviewStrategy, preview_strategy};
