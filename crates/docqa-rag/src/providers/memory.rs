//! In-memory metadata store for tests and single-process deployments

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::providers::MetadataStore;
use crate::types::document::{DocumentMeta, DocumentStatus};

/// Map-backed [`MetadataStore`]
#[derive(Default)]
pub struct InMemoryMetadataStore {
    statuses: RwLock<HashMap<Uuid, DocumentStatus>>,
}

impl InMemoryMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document record so status transitions can target it
    pub fn register(&self, meta: &DocumentMeta) {
        self.statuses.write().insert(meta.id, meta.status);
    }

    /// Current status of a registered document
    pub fn status(&self, document_id: &Uuid) -> Option<DocumentStatus> {
        self.statuses.read().get(document_id).copied()
    }
}

#[async_trait]
impl MetadataStore for InMemoryMetadataStore {
    async fn set_status(&self, document_id: &Uuid, status: DocumentStatus) -> Result<()> {
        let mut statuses = self.statuses.write();
        match statuses.get_mut(document_id) {
            Some(current) => {
                *current = status;
                Ok(())
            }
            None => Err(Error::DocumentNotFound(document_id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_status_transition_is_visible() {
        let store = InMemoryMetadataStore::new();
        let meta = DocumentMeta::new(1, "a.txt", std::path::Path::new("/tmp/a.txt"), "text/plain");
        store.register(&meta);
        assert_eq!(store.status(&meta.id), Some(DocumentStatus::Processing));

        store.set_status(&meta.id, DocumentStatus::Completed).await.unwrap();
        assert_eq!(store.status(&meta.id), Some(DocumentStatus::Completed));
    }

    #[tokio::test]
    async fn test_unknown_document_is_an_error() {
        let store = InMemoryMetadataStore::new();
        let err = store
            .set_status(&Uuid::new_v4(), DocumentStatus::Failed)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::DocumentNotFound(_)));
    }
}
