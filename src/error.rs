//! Error types for nood library.

use std::io;
use thiserror::Error;

/// Result type alias for nood operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, saving or editing documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file does not start with the `NOOD` signature.
    #[error("Invalid file signature: not a NOOD document")]
    InvalidSignature,

    /// The container version is not one this library understands.
    #[error("Unsupported NOOD version: {0}")]
    UnsupportedVersion(u16),

    /// Fewer bytes are available than the container header promises.
    #[error("Truncated file: {0}")]
    TruncatedFile(String),

    /// The decompressed payload is internally inconsistent.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// The decompressed payload exceeds the configured limit.
    #[error("Payload exceeds the {limit} byte limit")]
    PayloadTooLarge {
        /// Configured limit in bytes
        limit: usize,
    },

    /// A mutator was called with a page index outside the document.
    #[error("Page index {index} is out of range (document has {page_count} pages)")]
    InvalidPageIndex {
        /// Requested index (0-based)
        index: usize,
        /// Number of pages in the document
        page_count: usize,
    },

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Error::MalformedPayload(msg.into())
    }

    pub(crate) fn truncated(msg: impl Into<String>) -> Self {
        Error::TruncatedFile(msg.into())
    }
}
