//! Data types for documents and search results.

use serde::{Deserialize, Serialize};

/// A raw document handed to the core by the document-source
/// collaborator: the bytes plus their declared format.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// The raw document bytes.
    pub bytes: Vec<u8>,
    /// The declared format of the bytes.
    pub format: DocumentFormat,
}

impl Document {
    /// Create a paged-text document from raw bytes.
    pub fn paged_text(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into(), format: DocumentFormat::PagedText }
    }
}

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DocumentFormat {
    /// UTF-8 text with pages separated by form feed (U+000C).
    PagedText,
}

/// A retrieved chunk paired with its similarity score.
///
/// The single result shape for every query call site; callers that
/// only need the text discard the score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// The text of the retrieved chunk.
    pub text: String,
    /// Similarity in `[0, 1]`, computed as `1 / (1 + squared_distance)`.
    /// Higher is more relevant.
    pub similarity: f64,
}
