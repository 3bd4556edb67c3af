//! Document ingestion pipeline: extraction, chunking, status write-back

pub mod chunker;
pub mod extractor;

pub use chunker::chunk_text;
pub use extractor::TextExtractor;

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Result;
use crate::index::DocumentIndex;
use crate::providers::MetadataStore;
use crate::types::document::{DocumentMeta, DocumentStatus, MimeType};

/// Outcome of one ingestion attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Text was extracted and the document is now indexed
    Indexed {
        /// Number of chunks produced
        chunks: usize,
    },
    /// Extraction produced no text; the document was marked failed
    NoText,
}

/// Extract text for a document, offloading CPU-bound parsing
///
/// PDF and Word parsing run on the blocking worker pool so concurrent
/// requests on the runtime are not stalled; plain text is read inline since
/// it is I/O-only. A failed worker task degrades to empty text, it never
/// propagates.
pub async fn extract_text(path: PathBuf, mime: MimeType) -> String {
    if mime.is_cpu_bound() {
        match tokio::task::spawn_blocking(move || TextExtractor::extract(&path, mime)).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Extraction task failed: {}", e);
                String::new()
            }
        }
    } else if mime == MimeType::PlainText {
        match tokio::fs::read(&path).await {
            Ok(bytes) => extractor::decode_text_bytes(&bytes),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                String::new()
            }
        }
    } else {
        TextExtractor::extract(&path, mime)
    }
}

/// Ingestion pipeline for uploaded documents
///
/// Orchestrates extraction, chunking, the status transition in the external
/// record store, and the in-memory index insert. The status commit is the
/// authoritative outcome signal and always precedes the index entry.
pub struct IngestPipeline {
    index: Arc<DocumentIndex>,
    metadata: Arc<dyn MetadataStore>,
}

impl IngestPipeline {
    /// Create a new pipeline over an explicitly owned index and record store
    pub fn new(index: Arc<DocumentIndex>, metadata: Arc<dyn MetadataStore>) -> Self {
        Self { index, metadata }
    }

    /// Run one ingestion attempt for a document
    pub async fn process(&self, meta: &DocumentMeta) -> Result<IngestOutcome> {
        let mime = meta.resolved_mime();
        tracing::info!("Processing document: {}", meta.file_name);

        let text = extract_text(meta.file_path.clone(), mime).await;

        if text.trim().is_empty() {
            tracing::warn!("No text extracted from {}", meta.file_name);
            self.metadata.set_status(&meta.id, DocumentStatus::Failed).await?;
            return Ok(IngestOutcome::NoText);
        }

        // Status must be committed before the index entry becomes visible
        // for retrieval.
        self.metadata.set_status(&meta.id, DocumentStatus::Completed).await?;
        let record = self.index.insert(meta, text);

        tracing::info!(
            "Document {} processed into {} chunks",
            meta.file_name,
            record.chunks.len()
        );
        Ok(IngestOutcome::Indexed { chunks: record.chunks.len() })
    }

    /// Re-ingest a document, discarding any prior indexed record first
    pub async fn reprocess(&self, meta: &DocumentMeta) -> Result<IngestOutcome> {
        self.index.remove(&meta.id);
        self.process(meta).await
    }
}
