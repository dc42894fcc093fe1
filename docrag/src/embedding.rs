//! Embedder trait for mapping text to fixed-dimension vectors.

use async_trait::async_trait;

use crate::error::Result;

/// A collaborator that maps text to fixed-dimension embedding vectors.
///
/// Implementations wrap specific embedding backends behind a unified
/// async interface. All vectors produced by one embedder share the
/// dimensionality reported by [`dimensions`](Embedder::dimensions).
/// The default [`embed_many`](Embedder::embed_many) implementation
/// calls [`embed_one`](Embedder::embed_one) sequentially; backends
/// with native batching should override it.
///
/// Transport or model failures surface as
/// [`RetrievalError::Embedding`](crate::RetrievalError::Embedding) and
/// abort the current ingest or query. Retrying is the caller's
/// decision; the core never retries.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Generate an embedding vector for a single text input.
    async fn embed_one(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embedding vectors for a batch of text inputs, in the
    /// same order as the input.
    async fn embed_many(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.embed_one(text).await?);
        }
        Ok(results)
    }

    /// Return the dimensionality of embeddings produced by this embedder.
    fn dimensions(&self) -> usize;
}
