//! Process-lifetime document index
//!
//! Maps document ids to their extracted text, chunk list and denormalized
//! metadata. Entries live for the life of the process and are never evicted;
//! this is bounded by the ingested corpus size at the target deployment
//! scale. Larger corpora would need an eviction or spill policy.

use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::config::ChunkingConfig;
use crate::ingestion;
use crate::ingestion::chunker::chunk_text;
use crate::types::document::{DocumentMeta, IndexedDocument};

/// In-memory index of extracted document text
///
/// Explicitly constructed and owned by the caller; there is no hidden
/// global instance. Shared across concurrent requests behind an `Arc`.
pub struct DocumentIndex {
    chunking: ChunkingConfig,
    records: DashMap<Uuid, Arc<IndexedDocument>>,
}

impl DocumentIndex {
    /// Create an empty index with the given chunking parameters
    pub fn new(chunking: ChunkingConfig) -> Self {
        Self {
            chunking,
            records: DashMap::new(),
        }
    }

    /// Look up the indexed record for a document
    pub fn get(&self, id: &Uuid) -> Option<Arc<IndexedDocument>> {
        self.records.get(id).map(|r| r.clone())
    }

    /// Build and store the indexed record for a document
    ///
    /// Replaces any existing record wholesale; there is no partial merge.
    pub fn insert(&self, meta: &DocumentMeta, full_text: String) -> Arc<IndexedDocument> {
        let chunks = chunk_text(&full_text, self.chunking.chunk_size, self.chunking.chunk_overlap);
        let record = Arc::new(IndexedDocument {
            full_text,
            chunks,
            owner_id: meta.owner_id,
            file_name: meta.file_name.clone(),
            mime_type: meta.resolved_mime(),
        });
        self.records.insert(meta.id, record.clone());
        record
    }

    /// Return the indexed record, extracting and indexing lazily on first use
    ///
    /// Returns `None` when extraction yields no text; such documents are not
    /// indexable yet and retrieval skips them. Concurrent first-time calls for
    /// the same id may race to index it; both compute identical records and
    /// the insert is a whole-record replacement, so the race is benign.
    pub async fn get_or_index(&self, meta: &DocumentMeta) -> Option<Arc<IndexedDocument>> {
        if let Some(record) = self.get(&meta.id) {
            return Some(record);
        }

        let text = ingestion::extract_text(meta.file_path.clone(), meta.resolved_mime()).await;
        if text.trim().is_empty() {
            tracing::debug!("Document {} has no indexable text", meta.file_name);
            return None;
        }

        Some(self.insert(meta, text))
    }

    /// Drop the indexed record for a document (re-ingestion, deletion)
    pub fn remove(&self, id: &Uuid) -> bool {
        self.records.remove(id).is_some()
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the index holds no documents
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all indexed records (test lifecycle control)
    pub fn clear(&self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::document::{DocumentStatus, MimeType};
    use std::io::Write;

    fn meta_for(path: &std::path::Path) -> DocumentMeta {
        let mut meta = DocumentMeta::new(1, "notes.txt", path, "text/plain");
        meta.status = DocumentStatus::Completed;
        meta
    }

    #[tokio::test]
    async fn test_get_or_index_is_idempotent() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Fire safety requires evacuation drills every month.")
            .unwrap();
        let meta = meta_for(file.path());

        let index = DocumentIndex::new(ChunkingConfig::default());
        let first = index.get_or_index(&meta).await.unwrap();
        let second = index.get_or_index(&meta).await.unwrap();

        assert_eq!(*first, *second);
        assert_eq!(index.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_extraction_is_not_stored() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let meta = meta_for(file.path());

        let index = DocumentIndex::new(ChunkingConfig::default());
        assert!(index.get_or_index(&meta).await.is_none());
        assert!(index.is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_mime_never_indexed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x89PNG\r\n").unwrap();
        let mut meta = meta_for(file.path());
        meta.mime_type = "image/png".to_string();

        let index = DocumentIndex::new(ChunkingConfig::default());
        assert!(index.get_or_index(&meta).await.is_none());
        assert!(index.is_empty());
    }

    #[tokio::test]
    async fn test_insert_replaces_whole_record() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"original text").unwrap();
        let meta = meta_for(file.path());

        let index = DocumentIndex::new(ChunkingConfig::default());
        index.insert(&meta, "original text".to_string());
        index.insert(&meta, "replacement text".to_string());

        let record = index.get(&meta.id).unwrap();
        assert_eq!(record.full_text, "replacement text");
        assert_eq!(index.len(), 1);
        assert_eq!(record.mime_type, MimeType::PlainText);
    }
}
