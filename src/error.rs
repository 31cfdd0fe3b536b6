//! Error types for the leave query engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while normalizing ERP data,
//! resolving leave codes, and searching the policy knowledge base.

use thiserror::Error;

/// The main error type for the leave query engine.
///
/// Configuration failures (missing credentials, unreadable or malformed
/// files) and numeric coercion failures escape to callers. Everything
/// else is either absorbed at a component boundary (transport failures
/// degrade to empty structures) or carried inside a structured query
/// result (unresolvable leave queries).
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::LeaveTypeNotFound {
///     query: "study leave".to_string(),
/// };
/// assert_eq!(error.to_string(), "Leave type 'study leave' not found");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A leave query matched neither a catalog code nor any description.
    ///
    /// Carries the verbatim query text so callers can echo it back to the
    /// user. Never fatal: eligibility queries fold this into their
    /// structured result instead of returning it.
    #[error("Leave type '{query}' not found")]
    LeaveTypeNotFound {
        /// The original, unmodified query text.
        query: String,
    },

    /// A required external credential is absent.
    ///
    /// Configuration failures abort the operation entirely; they are never
    /// retried or degraded.
    #[error("Required credential missing: set {variable}")]
    MissingCredential {
        /// The environment variable (or config field) that must be set.
        variable: String,
    },

    /// A numeric ERP field could not be coerced to the expected type.
    ///
    /// Propagated as a hard error: silently defaulting a balance or an
    /// entitlement flag would corrupt eligibility answers.
    #[error("Cannot coerce field '{field}' from value '{value}'")]
    NumericCoercion {
        /// The raw field name that failed to coerce.
        field: String,
        /// The offending raw value, rendered as text.
        value: String,
    },

    /// A configuration or knowledge file was not found at the given path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A configuration or knowledge file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The embedding provider call failed (transport, HTTP status, decode).
    ///
    /// Absorbed at the semantic-search boundary: the search degrades to an
    /// empty result set rather than crashing the query layer.
    #[error("Embedding request failed: {message}")]
    EmbeddingFailed {
        /// A description of the failure.
        message: String,
    },

    /// An ERP API call failed (transport, HTTP status, decode).
    ///
    /// Absorbed at the fetch boundary: the affected record set degrades to
    /// an empty list.
    #[error("ERP request failed: {message}")]
    Transport {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
