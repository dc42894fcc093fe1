//! Error types for the `docrag` crate.

use thiserror::Error;

/// Errors that can occur during document retrieval operations.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// The document bytes could not be parsed as the declared format.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Invalid chunking parameters.
    #[error("Chunking error: {0}")]
    Chunking(String),

    /// Extraction produced no indexable text. Expected for empty or
    /// whitespace-only documents; the previous index (if any) is left
    /// untouched.
    #[error("document contains no indexable text")]
    NoContent,

    /// The embedding collaborator failed. Fatal for the current
    /// ingest or query; no partial index is ever published.
    #[error("Embedding error ({provider}): {message}")]
    Embedding {
        /// The embedding backend that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// Vectors of inconsistent dimensionality were given to the index.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimensionality the index was built with.
        expected: usize,
        /// Dimensionality actually received.
        actual: usize,
    },

    /// The index holds no vectors.
    #[error("index contains no vectors")]
    EmptyIndex,

    /// A query was issued before any document was ingested.
    #[error("no index available: ingest a document before querying")]
    NoIndex,

    /// A configuration validation error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A convenience result type for retrieval operations.
pub type Result<T> = std::result::Result<T, RetrievalError>;
