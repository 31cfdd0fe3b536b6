//! Self-service application rule.

use super::EligibilityEngine;

/// The outcome of a self-service check.
#[derive(Debug, Clone)]
pub struct SelfServiceAnswer {
    /// `Some(true)` when the leave can be applied through
    /// self-service, `None` when the query did not resolve.
    pub self_service: Option<bool>,
    /// Human-readable answer.
    pub message: String,
}

impl EligibilityEngine {
    /// Checks whether a leave type can be applied through self-service.
    pub fn is_self_service(&self, query: &str) -> SelfServiceAnswer {
        let Some(code) = self.resolve(query) else {
            return SelfServiceAnswer {
                self_service: None,
                message: format!("Leave type '{}' not found.", query),
            };
        };

        let self_service = self
            .catalog()
            .get(code)
            .map(|leave_type| leave_type.self_service)
            .unwrap_or(false);
        let description = self.description_for(code);
        let message = if self_service {
            format!("{} can be applied by self-service.", description)
        } else {
            format!("{} requires manager processing.", description)
        };

        SelfServiceAnswer {
            self_service: Some(self_service),
            message,
        }
    }
}
