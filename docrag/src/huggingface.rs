//! HuggingFace embedding backend using the Inference API.
//!
//! This module is only available when the `huggingface` feature is
//! enabled.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::embedding::Embedder;
use crate::error::{Result, RetrievalError};

/// Base URL for the HuggingFace Inference API feature-extraction pipeline.
const HF_FEATURE_EXTRACTION_URL: &str = "https://api-inference.huggingface.co/pipeline/feature-extraction";

/// The default sentence-transformers model.
const DEFAULT_MODEL: &str = "sentence-transformers/all-mpnet-base-v2";

/// The dimensionality of `all-mpnet-base-v2` embeddings.
const DEFAULT_DIMENSIONS: usize = 768;

/// An [`Embedder`] backed by the HuggingFace Inference API.
///
/// Uses `reqwest` to call the feature-extraction pipeline for a
/// sentence-transformers model.
///
/// # Configuration
///
/// - `model` – defaults to `sentence-transformers/all-mpnet-base-v2`.
/// - `api_token` – from the constructor or the `HF_API_TOKEN`
///   environment variable.
///
/// # Example
///
/// ```rust,ignore
/// use docrag::huggingface::HuggingFaceEmbedder;
///
/// let embedder = HuggingFaceEmbedder::new("hf_...")?;
/// let vector = embedder.embed_one("hello world").await?;
/// ```
pub struct HuggingFaceEmbedder {
    client: reqwest::Client,
    api_token: String,
    model: String,
    dimensions: usize,
}

impl HuggingFaceEmbedder {
    /// Create a new embedder with the given API token.
    ///
    /// Uses the default model (`sentence-transformers/all-mpnet-base-v2`,
    /// 768 dimensions).
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        let api_token = api_token.into();
        if api_token.is_empty() {
            return Err(RetrievalError::Embedding {
                provider: "HuggingFace".into(),
                message: "API token must not be empty".into(),
            });
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_token,
            model: DEFAULT_MODEL.into(),
            dimensions: DEFAULT_DIMENSIONS,
        })
    }

    /// Create a new embedder using the `HF_API_TOKEN` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_token = std::env::var("HF_API_TOKEN").map_err(|_| RetrievalError::Embedding {
            provider: "HuggingFace".into(),
            message: "HF_API_TOKEN environment variable not set".into(),
        })?;
        Self::new(api_token)
    }

    /// Set the model and the dimensionality of its embeddings.
    pub fn with_model(mut self, model: impl Into<String>, dimensions: usize) -> Self {
        self.model = model.into();
        self.dimensions = dimensions;
        self
    }
}

// ── Inference API request/response types ───────────────────────────

#[derive(Serialize)]
struct FeatureExtractionRequest<'a> {
    inputs: Vec<&'a str>,
    options: RequestOptions,
}

#[derive(Serialize)]
struct RequestOptions {
    wait_for_model: bool,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

// ── Embedder implementation ────────────────────────────────────────

#[async_trait]
impl Embedder for HuggingFaceEmbedder {
    async fn embed_one(&self, text: &str) -> Result<Vec<f32>> {
        debug!(provider = "HuggingFace", text_len = text.len(), "embedding single text");

        let results = self.embed_many(&[text]).await?;
        results.into_iter().next().ok_or_else(|| RetrievalError::Embedding {
            provider: "HuggingFace".into(),
            message: "API returned empty response".into(),
        })
    }

    async fn embed_many(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(
            provider = "HuggingFace",
            batch_size = texts.len(),
            model = %self.model,
            "embedding batch"
        );

        let request_body = FeatureExtractionRequest {
            inputs: texts.to_vec(),
            options: RequestOptions { wait_for_model: true },
        };

        let url = format!("{HF_FEATURE_EXTRACTION_URL}/{}", self.model);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = "HuggingFace", error = %e, "request failed");
                RetrievalError::Embedding {
                    provider: "HuggingFace".into(),
                    message: format!("request failed: {e}"),
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail =
                serde_json::from_str::<ErrorResponse>(&body).map(|e| e.error).unwrap_or(body);

            error!(provider = "HuggingFace", %status, "API error");
            return Err(RetrievalError::Embedding {
                provider: "HuggingFace".into(),
                message: format!("API returned {status}: {detail}"),
            });
        }

        let embeddings: Vec<Vec<f32>> = response.json().await.map_err(|e| {
            error!(provider = "HuggingFace", error = %e, "failed to parse response");
            RetrievalError::Embedding {
                provider: "HuggingFace".into(),
                message: format!("failed to parse response: {e}"),
            }
        })?;

        Ok(embeddings)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
