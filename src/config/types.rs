//! Configuration types for the leave engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the engine's YAML configuration file.

use serde::Deserialize;
use std::path::PathBuf;

/// ERP connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ErpConfig {
    /// Base URL of the ERP API.
    pub base_url: String,
    /// Bearer token for the ERP API. The API accepts a blank token in
    /// development setups, so this stays optional.
    pub bearer_token: Option<String>,
    /// Company group identifier sent with leave type requests.
    pub company_id: i64,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
    /// Start of the balance reporting window (ISO date).
    pub balance_window_start: String,
    /// End of the balance reporting window (ISO date).
    pub balance_window_end: String,
}

impl Default for ErpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8085/api".to_string(),
            bearer_token: None,
            company_id: 1,
            timeout_seconds: 30,
            balance_window_start: "2025-01-01".to_string(),
            balance_window_end: "2025-12-31".to_string(),
        }
    }
}

/// Embedding API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embeddings endpoint URL.
    pub api_url: String,
    /// Embedding model name.
    pub model: String,
    /// API key. Usually supplied through the `OPENAI_API_KEY`
    /// environment variable rather than the file.
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1/embeddings".to_string(),
            model: "text-embedding-3-large".to_string(),
            api_key: None,
            timeout_seconds: 30,
        }
    }
}

/// Policy document search settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Path to the embedded policy sections file.
    pub corpus_path: PathBuf,
    /// Minimum similarity score for a section to count as a match.
    pub score_threshold: f32,
    /// Maximum number of sections returned per query.
    pub top_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from("data/doc_knowledge.json"),
            score_threshold: 0.50,
            top_k: 5,
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// ERP connection settings.
    pub erp: ErpConfig,
    /// Embedding API settings.
    pub embedding: EmbeddingConfig,
    /// Policy document search settings.
    pub search: SearchConfig,
}
