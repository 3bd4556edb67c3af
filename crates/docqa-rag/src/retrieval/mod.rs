//! Keyword retrieval: scoring, ranking, context assembly

pub mod scorer;
pub mod snippet;

pub use scorer::{query_keywords, score_document};
pub use snippet::extract_snippet;

use std::sync::Arc;

use crate::config::RagConfig;
use crate::index::DocumentIndex;
use crate::types::document::{DocumentMeta, DocumentStatus};
use crate::types::response::{RetrievedContext, SourceCitation};

/// Retrieval service over the in-memory document index
///
/// Explicitly constructed with its configuration and index; callers own the
/// lifecycle and may share one instance across concurrent requests.
pub struct RagService {
    config: RagConfig,
    index: Arc<DocumentIndex>,
}

impl RagService {
    pub fn new(config: RagConfig, index: Arc<DocumentIndex>) -> Self {
        Self { config, index }
    }

    /// Assemble query-relevant context from the caller's documents
    ///
    /// Candidates are the document records visible to the caller; only
    /// records that are `Completed` and owned by `owner_id` participate.
    /// Documents missing from the index are extracted and indexed lazily.
    /// Zero-scoring documents are dropped entirely. The result carries at
    /// most `max_sources` citations and a context string bounded by
    /// `max_context_length`.
    pub async fn retrieve_context(
        &self,
        query: &str,
        owner_id: i64,
        candidates: &[DocumentMeta],
    ) -> RetrievedContext {
        let keywords = query_keywords(query);
        if keywords.is_empty() || candidates.is_empty() {
            return RetrievedContext::default();
        }

        let retrieval = &self.config.retrieval;
        let mut ranked: Vec<(usize, String, SourceCitation)> = Vec::new();

        for meta in candidates {
            if meta.status != DocumentStatus::Completed || meta.owner_id != owner_id {
                continue;
            }
            let Some(record) = self.index.get_or_index(meta).await else {
                continue;
            };

            let score = score_document(&record.full_text, &keywords);
            if score == 0 {
                continue;
            }

            let excerpt =
                extract_snippet(&record.full_text, &keywords, retrieval.snippet_max_length);
            let citation = SourceCitation {
                title: format!("Document: {}", meta.file_name),
                snippet: excerpt.clone(),
                file_name: meta.file_name.clone(),
                file_url: format!("/docs/{}/download", meta.id),
                relevance: score,
            };
            ranked.push((score, excerpt, citation));
        }

        if ranked.is_empty() {
            tracing::debug!("No documents matched query keywords");
            return RetrievedContext::default();
        }

        // stable sort: equal scores keep candidate order
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        ranked.truncate(retrieval.max_sources);

        let blocks: Vec<String> = ranked
            .iter()
            .map(|(_, excerpt, citation)| format!("From {}:\n{}", citation.file_name, excerpt))
            .collect();
        let mut context = blocks.join("\n\n");
        if context.len() > retrieval.max_context_length {
            context = snippet::truncate_with_ellipsis(&context, retrieval.max_context_length);
        }

        let sources = ranked.into_iter().map(|(_, _, citation)| citation).collect();
        RetrievedContext { context, sources }
    }

    /// The index this service retrieves from
    pub fn index(&self) -> &Arc<DocumentIndex> {
        &self.index
    }
}
