//! # docrag
//!
//! Document ingestion, chunking, and flat-index semantic retrieval.
//!
//! The crate turns a paged text document into overlapping chunks,
//! embeds them through a pluggable [`Embedder`], indexes the vectors
//! in an exhaustive [`FlatIndex`], and answers free-text queries with
//! the most relevant chunks ranked by a distance-derived similarity
//! score. It generates no answers, keeps no conversation history, and
//! holds exactly one corpus in memory at a time — everything around it
//! (HTTP, persistence, prompting) belongs to its callers.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use docrag::{Document, Retriever, RetrieverConfig};
//!
//! let config = RetrieverConfig::builder()
//!     .chunk_size(1000)
//!     .chunk_overlap(200)
//!     .top_k(3)
//!     .similarity_threshold(0.7)
//!     .build()?;
//!
//! let retriever = Retriever::new(config, Arc::new(embedder))?;
//! let chunk_count = retriever.ingest(&Document::paged_text(bytes)).await?;
//! for result in retriever.query("what are mammals?").await? {
//!     println!("{:.3} {}", result.similarity, result.text);
//! }
//! ```
//!
//! Enable the `huggingface` feature for an [`Embedder`] backed by the
//! HuggingFace Inference API.

pub mod chunking;
pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod extract;
pub mod index;
pub mod retriever;

#[cfg(feature = "huggingface")]
pub mod huggingface;

pub use chunking::{Chunks, TextSplitter};
pub use config::{RetrieverConfig, RetrieverConfigBuilder};
pub use document::{Document, DocumentFormat, SearchResult};
pub use embedding::Embedder;
pub use error::{Result, RetrievalError};
pub use extract::extract_pages;
pub use index::FlatIndex;
pub use retriever::Retriever;

#[cfg(feature = "huggingface")]
pub use huggingface::HuggingFaceEmbedder;
