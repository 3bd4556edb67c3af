//! Pluggable backing stores
//!
//! The engine owns extraction, indexing and retrieval; durable document
//! records live behind the [`MetadataStore`] seam so callers can back them
//! with whatever database the host application uses.

pub mod memory;

pub use memory::InMemoryMetadataStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::types::document::DocumentStatus;

/// Durable document record store
///
/// The ingestion pipeline writes lifecycle status transitions through this
/// trait. Implementations must make a committed status visible to concurrent
/// readers before returning.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Commit a status transition for a document record
    async fn set_status(&self, document_id: &Uuid, status: DocumentStatus) -> Result<()>;
}
