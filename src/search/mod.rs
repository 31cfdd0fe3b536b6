//! Semantic search over the leave policy document.
//!
//! Questions that no structured eligibility rule can answer fall
//! through to this module: the query text is embedded via an
//! OpenAI-compatible API and ranked against precomputed section
//! embeddings by cosine similarity.

mod corpus;
mod engine;
mod provider;
mod similarity;

pub use corpus::load_corpus;
pub use engine::{rank_sections, search_sections, SearchOutcome};
pub use provider::{ApiEmbeddingProvider, EmbeddingProvider};
pub use similarity::cosine_similarity;
