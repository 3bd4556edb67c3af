//! Configuration for the retrieval engine

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Main engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RagConfig {
    /// Chunking configuration
    pub chunking: ChunkingConfig,
    /// Retrieval configuration
    pub retrieval: RetrievalConfig,
}

/// Text chunking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Target chunk size in characters
    pub chunk_size: usize,
    /// Overlap between consecutive chunks in characters
    pub chunk_overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 200,
        }
    }
}

/// Context assembly and ranking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Maximum length of the assembled context string in characters
    pub max_context_length: usize,
    /// Maximum length of a per-document snippet in characters
    pub snippet_max_length: usize,
    /// Maximum number of ranked source documents
    pub max_sources: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_context_length: 8000,
            snippet_max_length: 500,
            max_sources: 5,
        }
    }
}

impl RagConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self =
            toml::from_str(&raw).map_err(|e| Error::config(format!("invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from defaults plus environment overrides
    ///
    /// Honors `CHUNK_SIZE`, `CHUNK_OVERLAP` and `MAX_CONTEXT_LENGTH`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(v) = read_env_usize("CHUNK_SIZE")? {
            config.chunking.chunk_size = v;
        }
        if let Some(v) = read_env_usize("CHUNK_OVERLAP")? {
            config.chunking.chunk_overlap = v;
        }
        if let Some(v) = read_env_usize("MAX_CONTEXT_LENGTH")? {
            config.retrieval.max_context_length = v;
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.chunking.chunk_size == 0 {
            return Err(Error::config("chunk_size must be greater than zero"));
        }
        if self.retrieval.max_context_length == 0 {
            return Err(Error::config("max_context_length must be greater than zero"));
        }
        if self.chunking.chunk_overlap >= self.chunking.chunk_size {
            tracing::warn!(
                "chunk_overlap ({}) >= chunk_size ({}); overlap will be clamped during chunking",
                self.chunking.chunk_overlap,
                self.chunking.chunk_size
            );
        }
        Ok(())
    }
}

fn read_env_usize(name: &str) -> Result<Option<usize>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<usize>()
            .map(Some)
            .map_err(|_| Error::config(format!("{} must be an integer, got '{}'", name, raw))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RagConfig::default();
        assert_eq!(config.chunking.chunk_size, 1000);
        assert_eq!(config.chunking.chunk_overlap, 200);
        assert_eq!(config.retrieval.max_context_length, 8000);
        assert_eq!(config.retrieval.snippet_max_length, 500);
        assert_eq!(config.retrieval.max_sources, 5);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: RagConfig = toml::from_str("[chunking]\nchunk_size = 512\n").unwrap();
        assert_eq!(config.chunking.chunk_size, 512);
        assert_eq!(config.chunking.chunk_overlap, 200);
        assert_eq!(config.retrieval.max_sources, 5);
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let config: RagConfig = toml::from_str("[chunking]\nchunk_size = 0\n").unwrap();
        assert!(config.validate().is_err());
    }
}
