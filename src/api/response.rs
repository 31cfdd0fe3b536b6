//! Response types and error mapping for the leave query API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::eligibility::{AirTicketLeave, BalanceSummaryRow};
use crate::error::EngineError;
use crate::models::ScoredSection;
use crate::router::QueryTopic;

/// Structured payload attached to some answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AskData {
    /// Balance summary rows, for balance questions.
    Balances(Vec<BalanceSummaryRow>),
    /// Air-ticket-granting leaves, for air ticket questions.
    AirTickets(Vec<AirTicketLeave>),
}

/// Response body for the `/ask` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    /// Correlation id assigned to the request.
    pub correlation_id: Uuid,
    /// The topic the question was routed to.
    pub topic: QueryTopic,
    /// The displayable answer text.
    pub answer: String,
    /// Structured rows backing the answer, when the topic has them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AskData>,
    /// Scored policy sections, when the question fell back to search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<ScoredSection>>,
    /// Set when no section reached the score threshold and the top
    /// matches were returned anyway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded: Option<bool>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an employee mismatch error response.
    pub fn employee_not_found(employee_id: i64) -> Self {
        Self::with_details(
            "EMPLOYEE_NOT_FOUND",
            format!("Employee {} not found in the session context", employee_id),
            "The employee_id must match the employee the session was built for",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::LeaveTypeNotFound { query } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "LEAVE_TYPE_NOT_FOUND",
                    format!("Leave type not found: {}", query),
                    format!("The query '{}' matched no leave code or description", query),
                ),
            },
            EngineError::MissingCredential { variable } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Missing credential",
                    format!("Set the {} environment variable", variable),
                ),
            },
            EngineError::NumericCoercion { field, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_FEED",
                    format!("Cannot coerce field '{}' from value '{}'", field, value),
                    "The ERP feed carried a non-numeric value in a numeric field",
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParse { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::EmbeddingFailed { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("EMBEDDING_ERROR", "Embedding request failed", message),
            },
            EngineError::Transport { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("ERP_ERROR", "ERP request failed", message),
            },
        }
    }
}
