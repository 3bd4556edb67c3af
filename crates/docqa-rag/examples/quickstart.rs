//! Ingest a few documents and run a retrieval query against them.
//!
//! ```bash
//! RUST_LOG=docqa_rag=debug cargo run --example quickstart
//! ```

use std::io::Write;
use std::sync::Arc;

use docqa_rag::providers::InMemoryMetadataStore;
use docqa_rag::{DocumentIndex, DocumentMeta, IngestPipeline, RagConfig, RagService};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RagConfig::from_env()?;
    let index = Arc::new(DocumentIndex::new(config.chunking.clone()));
    let metadata = Arc::new(InMemoryMetadataStore::new());
    let pipeline = IngestPipeline::new(index.clone(), metadata.clone());
    let service = RagService::new(config, index);

    let dir = tempfile::tempdir()?;
    let corpus = [
        (
            "fire-safety.txt",
            "Fire safety requires evacuation drills every month. \
             Assembly points are marked in every stairwell. \
             All employees must attend the drills.",
        ),
        (
            "cafeteria.txt",
            "The cafeteria serves soup and sandwiches on Tuesdays. \
             The menu rotates weekly.",
        ),
        (
            "security.txt",
            "Badge access is required after hours. \
             Report lost badges to security, and attend evacuation briefings.",
        ),
    ];

    let mut documents = Vec::new();
    for (name, body) in corpus {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path)?;
        file.write_all(body.as_bytes())?;

        let meta = DocumentMeta::new(1, name, path, "text/plain");
        metadata.register(&meta);
        pipeline.process(&meta).await?;

        let mut meta = meta;
        if let Some(status) = metadata.status(&meta.id) {
            meta.status = status;
        }
        documents.push(meta);
    }

    let query = "when are evacuation drills held";
    let result = service.retrieve_context(query, 1, &documents).await;

    println!("query: {query}\n");
    if result.is_empty() {
        println!("no relevant documents found");
        return Ok(());
    }

    println!("context:\n{}\n", result.context);
    println!("sources:");
    for source in &result.sources {
        println!("  {} (relevance {}) {}", source.title, source.relevance, source.file_url);
    }

    Ok(())
}
