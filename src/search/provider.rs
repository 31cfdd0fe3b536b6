//! Embedding providers.
//!
//! [`EmbeddingProvider`] is the seam between query handling and the
//! embedding backend. The production implementation calls an
//! OpenAI-compatible embeddings endpoint; tests substitute fixed
//! vectors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::EmbeddingConfig;
use crate::error::{EngineError, EngineResult};

/// Turns query text into an embedding vector.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embeds a single piece of text.
    async fn embed(&self, text: &str) -> EngineResult<Vec<f32>>;
}

/// OpenAI-compatible embedding API client.
pub struct ApiEmbeddingProvider {
    client: Client,
    api_url: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    input: [&'a str; 1],
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl ApiEmbeddingProvider {
    /// Creates a provider from configuration.
    ///
    /// The API key comes from the configuration file or, failing that,
    /// the `OPENAI_API_KEY` environment variable. Without either the
    /// provider cannot be built.
    pub fn from_config(config: &EmbeddingConfig) -> EngineResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or_else(|| EngineError::MissingCredential {
                variable: "OPENAI_API_KEY".to_string(),
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|error| EngineError::EmbeddingFailed {
                message: format!("Failed to create HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl EmbeddingProvider for ApiEmbeddingProvider {
    async fn embed(&self, text: &str) -> EngineResult<Vec<f32>> {
        let request = EmbeddingRequest {
            input: [text],
            model: &self.model,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|error| {
                if error.is_timeout() {
                    EngineError::EmbeddingFailed {
                        message: "Request timed out".to_string(),
                    }
                } else if error.is_connect() {
                    EngineError::EmbeddingFailed {
                        message: format!("Connection failed: {error}"),
                    }
                } else {
                    EngineError::EmbeddingFailed {
                        message: format!("Request failed: {error}"),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(EngineError::EmbeddingFailed {
                message: format!("API error ({status}): {body}"),
            });
        }

        let parsed: EmbeddingResponse =
            response
                .json()
                .await
                .map_err(|error| EngineError::EmbeddingFailed {
                    message: format!("Failed to parse response: {error}"),
                })?;

        parsed
            .data
            .into_iter()
            .next()
            .map(|data| data.embedding)
            .ok_or_else(|| EngineError::EmbeddingFailed {
                message: "Response contained no embeddings".to_string(),
            })
    }
}
