//! Error types for the retrieval engine

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Engine errors
///
/// Per-document extraction failures are deliberately absent: the extractor
/// degrades to empty text or a placeholder string and logs instead of
/// propagating, so retrieval never aborts because one document is unreadable.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (the only fatal-at-startup class)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Document not found in the metadata record store
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// Metadata record store failure (status write-back)
    #[error("Metadata store error: {0}")]
    Metadata(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a metadata store error
    pub fn metadata(message: impl Into<String>) -> Self {
        Self::Metadata(message.into())
    }
}
