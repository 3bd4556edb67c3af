//! Core data types

pub mod document;
pub mod response;

pub use document::{DocumentMeta, DocumentStatus, IndexedDocument, MimeType};
pub use response::{RetrievedContext, SourceCitation};
