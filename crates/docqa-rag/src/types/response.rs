//! Retrieval response types

use serde::{Deserialize, Serialize};

/// Citation record for one retrieved source document
///
/// Serialized in the camelCase shape the citation-rendering frontend expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceCitation {
    /// Display title
    pub title: String,
    /// Keyword-dense excerpt from the document
    pub snippet: String,
    /// Original filename
    pub file_name: String,
    /// Download reference for the stored file
    pub file_url: String,
    /// Relevance score (sum of keyword occurrence counts)
    pub relevance: usize,
}

/// Assembled context plus ranked source citations
///
/// An empty context means "no relevant information was found" and is a valid
/// retrieval outcome, not an error; the answer-generation collaborator uses it
/// to report insufficient grounding instead of fabricating an answer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrievedContext {
    /// Concatenated snippet blocks, bounded by `max_context_length`
    pub context: String,
    /// Citations in the same order as the context blocks
    pub sources: Vec<SourceCitation>,
}

impl RetrievedContext {
    /// True when retrieval found no relevant documents
    pub fn is_empty(&self) -> bool {
        self.context.is_empty() && self.sources.is_empty()
    }
}
