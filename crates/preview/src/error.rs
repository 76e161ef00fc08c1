use std::str::Utf8Error;

use filecat_fs::CatalogError;
use thiserror::Error;

/// The bytes have no text interpretation under any supported encoding.
#[derive(Debug, Error)]
#[error("content is not valid UTF-8 (first bad byte at offset {valid_up_to})")]
pub struct DecodeError {
    pub valid_up_to: usize,
    #[source]
    pub source: Utf8Error,
}

impl From<Utf8Error> for DecodeError {
    fn from(source: Utf8Error) -> Self {
        DecodeError {
            valid_up_to: source.valid_up_to(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
