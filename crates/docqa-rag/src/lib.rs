//! docqa-rag: Document ingestion and keyword retrieval engine
//!
//! This crate is the retrieval core of a chat-with-your-documents backend. It
//! extracts plain text from uploaded files (plain text, PDF, Word), chunks it
//! into overlapping segments, keeps a process-lifetime index of extracted
//! text, and assembles a bounded-size context block with source citations for
//! a downstream language model.
//!
//! User accounts, HTTP upload handling, chat persistence and answer
//! generation are external collaborators; this crate only consumes document
//! metadata records and writes back processing status through the
//! [`providers::MetadataStore`] trait.

pub mod config;
pub mod error;
pub mod index;
pub mod ingestion;
pub mod providers;
pub mod retrieval;
pub mod types;

pub use config::RagConfig;
pub use error::{Error, Result};
pub use index::DocumentIndex;
pub use ingestion::{IngestOutcome, IngestPipeline, TextExtractor};
pub use retrieval::RagService;
pub use types::{
    document::{DocumentMeta, DocumentStatus, IndexedDocument, MimeType},
    response::{RetrievedContext, SourceCitation},
};
