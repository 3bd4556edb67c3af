//! Document metadata and indexed record types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Recognized document formats
///
/// Resolved once from the declared MIME type at ingestion; everything outside
/// the closed set is `Unsupported` and extracts to empty text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MimeType {
    /// Plain text (`text/plain`)
    PlainText,
    /// PDF document (`application/pdf`)
    Pdf,
    /// Word-processing document (any `*word*` MIME type, e.g. .docx)
    WordDocument,
    /// Anything else
    Unsupported,
}

impl MimeType {
    /// Resolve a declared MIME type string into the closed format set
    pub fn from_declared(mime: &str) -> Self {
        let mime = mime.to_lowercase();
        if mime == "text/plain" {
            Self::PlainText
        } else if mime == "application/pdf" {
            Self::Pdf
        } else if mime.contains("word") {
            Self::WordDocument
        } else {
            Self::Unsupported
        }
    }

    /// True for formats whose parsing is CPU-bound and must be offloaded
    /// from the request-handling task
    pub fn is_cpu_bound(&self) -> bool {
        matches!(self, Self::Pdf | Self::WordDocument)
    }

    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::PlainText => "Text File",
            Self::Pdf => "PDF",
            Self::WordDocument => "Word Document",
            Self::Unsupported => "Unsupported",
        }
    }
}

/// Processing lifecycle of a document in the metadata record store
///
/// `Processing` moves to `Completed` on successful extraction or `Failed` on
/// extraction failure or empty output. Terminal states never transition;
/// re-ingestion is a fresh attempt, not a state change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Upload accepted, extraction not finished
    Processing,
    /// Extraction succeeded, document is retrievable
    Completed,
    /// Extraction failed or produced no text
    Failed,
}

/// Document metadata as read from the external record store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Unique document ID
    pub id: Uuid,
    /// Identifier of the owning user
    pub owner_id: i64,
    /// Original filename as uploaded
    pub file_name: String,
    /// Location of the stored bytes
    pub file_path: PathBuf,
    /// Declared MIME type (resolved via [`MimeType::from_declared`])
    pub mime_type: String,
    /// Processing status
    pub status: DocumentStatus,
    /// Upload timestamp
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}

impl DocumentMeta {
    /// Create metadata for a freshly uploaded document
    pub fn new(
        owner_id: i64,
        file_name: impl Into<String>,
        file_path: impl Into<PathBuf>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            file_name: file_name.into(),
            file_path: file_path.into(),
            mime_type: mime_type.into(),
            status: DocumentStatus::Processing,
            uploaded_at: chrono::Utc::now(),
        }
    }

    /// Resolve the declared MIME type once
    pub fn resolved_mime(&self) -> MimeType {
        MimeType::from_declared(&self.mime_type)
    }
}

/// In-memory index record for one document
///
/// Exists only for documents observed with `Completed` status and non-empty
/// extracted text. Replaced wholesale on re-processing, never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedDocument {
    /// Complete extracted text
    pub full_text: String,
    /// Overlapping segments of `full_text`, in document order
    pub chunks: Vec<String>,
    /// Denormalized owner for presentation without re-querying the record store
    pub owner_id: i64,
    /// Denormalized original filename
    pub file_name: String,
    /// Resolved format
    pub mime_type: MimeType,
}
