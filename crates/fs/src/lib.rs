mod catalog;
mod category;
mod descriptor;
mod error;
mod excludes;

pub use catalog::{delete, list_directory, read_contents};
pub use category::{FileCategory, StructuredKind, classify};
pub use descriptor::{FileAttributes, FileDescriptor};
pub use error::CatalogError;
pub use excludes::{ExclusionRules, is_excluded};
