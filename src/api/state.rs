//! Application state for the leave query API.
//!
//! A session is built once from one employee's ERP snapshot and shared
//! read-only across handlers, matching the one-employee-per-session
//! consumer contract.

use std::sync::Arc;

use crate::config::SearchConfig;
use crate::eligibility::EligibilityEngine;
use crate::erp::RawSnapshot;
use crate::error::EngineResult;
use crate::models::{DocumentSection, Employee};
use crate::normalize::build_context;
use crate::search::EmbeddingProvider;

/// Per-session data derived from one ERP snapshot.
pub struct SessionState {
    /// The employee the session was built for.
    pub employee: Employee,
    /// Eligibility rules over the employee's catalog and balances.
    pub engine: EligibilityEngine,
}

impl SessionState {
    /// Builds a session from a raw ERP snapshot.
    pub fn from_snapshot(snapshot: &RawSnapshot) -> EngineResult<Self> {
        let context = build_context(snapshot)?;
        let engine = EligibilityEngine::from_context(&context);
        Ok(Self {
            employee: context.employee,
            engine,
        })
    }
}

/// Shared application state.
///
/// Contains the session tables, the policy corpus and the embedding
/// provider used for fallback search.
#[derive(Clone)]
pub struct AppState {
    session: Arc<SessionState>,
    corpus: Arc<Vec<DocumentSection>>,
    provider: Arc<dyn EmbeddingProvider>,
    search: SearchConfig,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        session: SessionState,
        corpus: Vec<DocumentSection>,
        provider: Arc<dyn EmbeddingProvider>,
        search: SearchConfig,
    ) -> Self {
        Self {
            session: Arc::new(session),
            corpus: Arc::new(corpus),
            provider,
            search,
        }
    }

    /// The session tables.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// The policy document corpus.
    pub fn corpus(&self) -> &[DocumentSection] {
        &self.corpus
    }

    /// The embedding provider for fallback search.
    pub fn provider(&self) -> &dyn EmbeddingProvider {
        self.provider.as_ref()
    }

    /// Search parameters.
    pub fn search(&self) -> &SearchConfig {
        &self.search
    }
}
