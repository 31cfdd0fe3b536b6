//! Request types for the leave query API.

use serde::{Deserialize, Serialize};

/// Request body for the `/ask` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    /// The employee the question is asked for. Must match the session
    /// employee.
    pub employee_id: i64,
    /// The free-form HR or leave question.
    pub question: String,
}
