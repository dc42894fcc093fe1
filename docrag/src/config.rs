//! Configuration for the retrieval core.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RetrievalError};

/// Configuration parameters for a [`Retriever`](crate::Retriever).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetrieverConfig {
    /// Maximum chunk size in characters.
    pub chunk_size: usize,
    /// Number of overlapping characters between consecutive chunks.
    pub chunk_overlap: usize,
    /// Number of nearest neighbors to retrieve per query.
    pub top_k: usize,
    /// Minimum similarity score for results (results below this are
    /// filtered out). An empirical tuning knob, not a calibrated
    /// probability.
    pub similarity_threshold: f64,
}

impl Default for RetrieverConfig {
    fn default() -> Self {
        Self { chunk_size: 1000, chunk_overlap: 200, top_k: 3, similarity_threshold: 0.7 }
    }
}

impl RetrieverConfig {
    /// Create a new builder for constructing a [`RetrieverConfig`].
    pub fn builder() -> RetrieverConfigBuilder {
        RetrieverConfigBuilder::default()
    }
}

/// Builder for constructing a validated [`RetrieverConfig`].
#[derive(Debug, Clone, Default)]
pub struct RetrieverConfigBuilder {
    config: RetrieverConfig,
}

impl RetrieverConfigBuilder {
    /// Set the maximum chunk size in characters.
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size;
        self
    }

    /// Set the overlap between consecutive chunks in characters.
    pub fn chunk_overlap(mut self, overlap: usize) -> Self {
        self.config.chunk_overlap = overlap;
        self
    }

    /// Set the number of nearest neighbors to retrieve per query.
    pub fn top_k(mut self, k: usize) -> Self {
        self.config.top_k = k;
        self
    }

    /// Set the minimum similarity threshold for filtering results.
    pub fn similarity_threshold(mut self, threshold: f64) -> Self {
        self.config.similarity_threshold = threshold;
        self
    }

    /// Build the [`RetrieverConfig`], validating that parameters are
    /// consistent.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError::Config`] if:
    /// - `chunk_size == 0`
    /// - `chunk_overlap >= chunk_size`
    /// - `top_k == 0`
    /// - `similarity_threshold` is outside `[0, 1]`
    pub fn build(self) -> Result<RetrieverConfig> {
        if self.config.chunk_size == 0 {
            return Err(RetrievalError::Config(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        if self.config.chunk_overlap >= self.config.chunk_size {
            return Err(RetrievalError::Config(format!(
                "chunk_overlap ({}) must be less than chunk_size ({})",
                self.config.chunk_overlap, self.config.chunk_size
            )));
        }
        if self.config.top_k == 0 {
            return Err(RetrievalError::Config("top_k must be greater than zero".to_string()));
        }
        if !(0.0..=1.0).contains(&self.config.similarity_threshold) {
            return Err(RetrievalError::Config(format!(
                "similarity_threshold ({}) must be within [0, 1]",
                self.config.similarity_threshold
            )));
        }
        Ok(self.config)
    }
}
