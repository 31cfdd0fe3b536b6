//! Ranking policy sections against employee questions.

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::models::{DocumentSection, ScoredSection};

use super::provider::EmbeddingProvider;
use super::similarity::cosine_similarity;

/// The outcome of a policy search.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Ranked sections, best match first.
    pub results: Vec<ScoredSection>,
    /// Set when no section reached the score threshold and the top
    /// matches were returned anyway.
    pub below_threshold: bool,
}

/// Ranks corpus sections against a query embedding.
///
/// Sections without an embedding, or with an embedding of a different
/// dimension than the query, are skipped. The top `top_k` sections
/// scoring at or above `threshold` are returned; when none qualify,
/// the top `top_k` are returned unfiltered with `below_threshold` set
/// so callers can qualify the answer.
pub fn rank_sections(
    query_embedding: &[f32],
    corpus: &[DocumentSection],
    threshold: f32,
    top_k: usize,
) -> SearchOutcome {
    let mut scored: Vec<ScoredSection> = corpus
        .iter()
        .filter_map(|section| {
            if section.embedding.is_empty() {
                return None;
            }
            if section.embedding.len() != query_embedding.len() {
                debug!(
                    section = %section.section,
                    "skipping section with mismatched embedding dimension"
                );
                return None;
            }
            let score = cosine_similarity(query_embedding, &section.embedding);
            Some(ScoredSection::new(section, score))
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(top_k);

    let results: Vec<ScoredSection> = scored
        .iter()
        .filter(|section| section.score >= threshold)
        .cloned()
        .collect();

    if results.is_empty() && !scored.is_empty() {
        return SearchOutcome {
            results: scored,
            below_threshold: true,
        };
    }

    SearchOutcome {
        results,
        below_threshold: false,
    }
}

/// Embeds `query` and ranks the corpus against it.
///
/// Embedding failures degrade to an empty outcome so the query layer
/// falls back to its no-match answer instead of erroring.
pub async fn search_sections(
    provider: &dyn EmbeddingProvider,
    query: &str,
    corpus: &[DocumentSection],
    threshold: f32,
    top_k: usize,
) -> SearchOutcome {
    let query_embedding = match provider.embed(query).await {
        Ok(embedding) => embedding,
        Err(error) => {
            warn!(%error, "embedding request failed, returning no matches");
            return SearchOutcome::default();
        }
    };

    rank_sections(&query_embedding, corpus, threshold, top_k)
}
