//! Attachment requirement rule.

use super::{EligibilityEngine, LeaveRef};

/// The outcome of an attachment requirement check.
#[derive(Debug, Clone)]
pub struct AttachmentAnswer {
    /// `Some(true)` when an attachment is required, `None` when the
    /// query did not resolve.
    pub required: Option<bool>,
    /// Human-readable answer.
    pub message: String,
}

impl EligibilityEngine {
    /// Checks whether applications for a leave type need an attachment.
    ///
    /// Balance-only codes have no catalog entry and therefore no
    /// attachment requirement.
    pub fn needs_attachment(&self, query: &str) -> AttachmentAnswer {
        let Some(code) = self.resolve(query) else {
            return AttachmentAnswer {
                required: None,
                message: format!("Leave type '{}' not found.", query),
            };
        };

        let required = self.attachment_required_for(code);
        let description = self.description_for(code);
        let message = if required {
            format!("{} requires an attachment.", description)
        } else {
            format!("{} does NOT require an attachment.", description)
        };

        AttachmentAnswer {
            required: Some(required),
            message,
        }
    }

    /// All leave types that require an attachment, in policy order.
    pub fn leaves_requiring_attachment(&self) -> Vec<LeaveRef> {
        self.catalog()
            .iter()
            .filter(|leave_type| leave_type.attachment_required)
            .map(|leave_type| LeaveRef {
                code: leave_type.code.clone(),
                description: leave_type.description.clone(),
            })
            .collect()
    }
}
