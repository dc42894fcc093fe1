//! Retrieval orchestrator.
//!
//! [`Retriever`] coordinates the full ingest-and-query workflow:
//! extract → chunk → embed → index on ingest, and
//! embed → search → score → filter on query.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use docrag::{Document, Retriever, RetrieverConfig};
//!
//! let retriever = Retriever::new(RetrieverConfig::default(), Arc::new(my_embedder))?;
//! let chunk_count = retriever.ingest(&Document::paged_text(bytes)).await?;
//! let results = retriever.query("search query").await?;
//! ```

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::chunking::TextSplitter;
use crate::config::RetrieverConfig;
use crate::document::{Document, SearchResult};
use crate::embedding::Embedder;
use crate::error::{Result, RetrievalError};
use crate::extract::extract_pages;
use crate::index::FlatIndex;

/// Maximum number of chunks sent to the embedder per call, bounding
/// peak memory and giving the logs partial progress during ingest.
const EMBED_BATCH_SIZE: usize = 64;

/// One fully-built corpus generation: the chunk list and the index
/// over it. Replaced wholesale on each ingest; queries hold an `Arc`
/// snapshot, so an in-flight search always sees one consistent
/// generation.
struct IndexState {
    chunks: Vec<String>,
    index: FlatIndex,
}

/// The retrieval core: owns the current chunk list and vector index.
///
/// A `Retriever` is an explicitly constructed instance — there is no
/// process-wide singleton. All methods take `&self`; the index is
/// rebuilt copy-then-swap, so concurrent queries complete against
/// either the fully-old or the fully-new index, never a partial one.
pub struct Retriever {
    config: RetrieverConfig,
    splitter: TextSplitter,
    embedder: Arc<dyn Embedder>,
    state: RwLock<Option<Arc<IndexState>>>,
}

impl Retriever {
    /// Create a new retriever with no index.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError::Chunking`] if the configured chunk
    /// size and overlap are inconsistent.
    pub fn new(config: RetrieverConfig, embedder: Arc<dyn Embedder>) -> Result<Self> {
        let splitter = TextSplitter::new(config.chunk_size, config.chunk_overlap)?;
        Ok(Self { config, splitter, embedder, state: RwLock::new(None) })
    }

    /// Ingest a document: extract → chunk → embed → rebuild the index.
    ///
    /// Returns the number of chunks indexed. The new index replaces
    /// the previous one atomically; on any failure the previous index
    /// stays in place and no partial index is published.
    ///
    /// # Errors
    ///
    /// - [`RetrievalError::Extraction`] if the document cannot be parsed.
    /// - [`RetrievalError::NoContent`] if extraction yields no chunks
    ///   (empty or whitespace-only document).
    /// - [`RetrievalError::Embedding`] propagated verbatim from the
    ///   embedder.
    /// - [`RetrievalError::DimensionMismatch`] if the embedder returns
    ///   vectors of inconsistent dimensionality.
    pub async fn ingest(&self, document: &Document) -> Result<usize> {
        let pages = extract_pages(document)?;
        let text = pages.concat();

        let chunks: Vec<String> = self.splitter.split(&text).collect();
        if chunks.is_empty() {
            return Err(RetrievalError::NoContent);
        }

        let mut vectors = Vec::with_capacity(chunks.len());
        for batch in chunks.chunks(EMBED_BATCH_SIZE) {
            let texts: Vec<&str> = batch.iter().map(String::as_str).collect();
            let embedded = self.embedder.embed_many(&texts).await.map_err(|e| {
                error!(error = %e, "embedding failed during ingest");
                e
            })?;
            if embedded.len() != texts.len() {
                return Err(RetrievalError::Embedding {
                    provider: "unknown".to_string(),
                    message: format!(
                        "embedder returned {} vectors for {} texts",
                        embedded.len(),
                        texts.len()
                    ),
                });
            }
            vectors.extend(embedded);
            debug!(embedded = vectors.len(), total = chunks.len(), "embedding progress");
        }

        let index = FlatIndex::build(vectors)?;
        let dimensions = index.dimensions();
        let chunk_count = chunks.len();

        let new_state = Arc::new(IndexState { chunks, index });
        *self.state.write().await = Some(new_state);

        info!(chunk_count, dimensions, "ingested document");
        Ok(chunk_count)
    }

    /// Query with the configured `top_k` and `similarity_threshold`.
    ///
    /// See [`query_with`](Retriever::query_with).
    pub async fn query(&self, text: &str) -> Result<Vec<SearchResult>> {
        self.query_with(text, self.config.top_k, self.config.similarity_threshold).await
    }

    /// Return the most relevant chunks for a free-text query.
    ///
    /// The `k` nearest chunks by squared Euclidean distance are scored
    /// as `similarity = 1 / (1 + squared_distance)` and then filtered
    /// to `similarity >= threshold` — top-k first, so the threshold
    /// never admits a candidate ranked below the true top-k window.
    /// An empty result after filtering is success ("no sufficiently
    /// relevant content"), not an error; the caller falls back to an
    /// unaugmented query.
    ///
    /// # Errors
    ///
    /// - [`RetrievalError::Config`] if `k == 0` or `threshold` is
    ///   outside `[0, 1]`.
    /// - [`RetrievalError::NoIndex`] before the first successful ingest.
    /// - [`RetrievalError::Embedding`] propagated verbatim from the
    ///   embedder.
    pub async fn query_with(
        &self,
        text: &str,
        k: usize,
        threshold: f64,
    ) -> Result<Vec<SearchResult>> {
        if k == 0 {
            return Err(RetrievalError::Config("k must be greater than zero".to_string()));
        }
        if !(0.0..=1.0).contains(&threshold) {
            return Err(RetrievalError::Config(format!(
                "similarity threshold ({threshold}) must be within [0, 1]"
            )));
        }

        // Snapshot the current generation; a concurrent ingest cannot
        // affect this query once the Arc is cloned out of the lock.
        let state =
            self.state.read().await.as_ref().cloned().ok_or(RetrievalError::NoIndex)?;

        let query_vector = self.embedder.embed_one(text).await.map_err(|e| {
            error!(error = %e, "embedding failed during query");
            e
        })?;

        let hits = state.index.search(&query_vector, k)?;
        let results: Vec<SearchResult> = hits
            .into_iter()
            .map(|(slot, squared_distance)| SearchResult {
                text: state.chunks[slot].clone(),
                similarity: 1.0 / (1.0 + f64::from(squared_distance)),
            })
            .filter(|result| result.similarity >= threshold)
            .collect();

        info!(result_count = results.len(), "query completed");
        Ok(results)
    }
}
