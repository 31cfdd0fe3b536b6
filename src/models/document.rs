//! Policy document sections used for semantic search.

use serde::{Deserialize, Serialize};

/// One section of the leave policy document, with its embedding.
///
/// Corpus files may omit embeddings (they are filled in by an offline
/// indexing step); such sections never match a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSection {
    /// Section heading or label.
    pub section: String,
    /// Section body text.
    pub text: String,
    /// Embedding vector for the section text.
    #[serde(default)]
    pub embedding: Vec<f32>,
}

/// A document section matched against a query, with its similarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSection {
    /// Section heading or label.
    pub section: String,
    /// Section body text.
    pub text: String,
    /// Cosine similarity against the query embedding.
    pub score: f32,
}

impl ScoredSection {
    /// Pairs a section with its similarity score.
    pub fn new(section: &DocumentSection, score: f32) -> Self {
        Self {
            section: section.section.clone(),
            text: section.text.clone(),
            score,
        }
    }
}
