//! Application eligibility rule.
//!
//! Whether an employee can apply for a leave type right now. The only
//! thing that makes a leave applicable is a strictly positive
//! remaining balance.

use super::EligibilityEngine;

/// The outcome of an application eligibility check.
#[derive(Debug, Clone)]
pub struct ApplyAnswer {
    /// Whether the employee can apply now.
    pub can_apply: bool,
    /// Human-readable answer.
    pub message: String,
}

impl EligibilityEngine {
    /// Checks whether the employee can apply for a leave type.
    ///
    /// The query may be a code or (part of) a description. An
    /// unresolvable query and a missing or exhausted balance both
    /// answer negatively, with distinct messages.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::eligibility::EligibilityEngine;
    /// use leave_engine::models::{BalanceTable, LeaveBalance, LeaveCatalog, LeaveType};
    /// use rust_decimal::Decimal;
    ///
    /// let catalog = LeaveCatalog::from_types(vec![LeaveType {
    ///     code: "AL".to_string(),
    ///     description: "Annual Leave".to_string(),
    ///     attachment_required: false,
    ///     self_service: true,
    ///     eligible_on_workdays: true,
    ///     anniversary_date: None,
    ///     definition_id: Some(901),
    ///     linkage_id: None,
    /// }]);
    /// let mut balances = BalanceTable::new();
    /// balances.insert(
    ///     "AL".to_string(),
    ///     LeaveBalance {
    ///         definition_id: 901,
    ///         balance: Decimal::new(10, 0),
    ///         eligible: Decimal::new(30, 0),
    ///         paid: Decimal::ZERO,
    ///         unpaid: Decimal::ZERO,
    ///         days_allowed: 30,
    ///         air_ticket: false,
    ///         max_days: 30,
    ///         allow_half_day: false,
    ///         anniversary_date: None,
    ///         air_ticket_percent: Decimal::ZERO,
    ///     },
    /// );
    ///
    /// let engine = EligibilityEngine::new(catalog, balances);
    /// let answer = engine.can_apply_for("annual leave");
    /// assert!(answer.can_apply);
    /// assert_eq!(
    ///     answer.message,
    ///     "You can apply for Annual Leave. Your balance: 10 days."
    /// );
    /// ```
    pub fn can_apply_for(&self, query: &str) -> ApplyAnswer {
        let Some(code) = self.resolve(query) else {
            return ApplyAnswer {
                can_apply: false,
                message: format!("Leave type '{}' not found.", query),
            };
        };

        let description = self.description_for(code);
        match self.balance_for(code) {
            Some(info) if info.is_usable() => ApplyAnswer {
                can_apply: true,
                message: format!(
                    "You can apply for {}. Your balance: {} days.",
                    description,
                    info.balance.normalize()
                ),
            },
            _ => ApplyAnswer {
                can_apply: false,
                message: format!("You do not have sufficient balance for {}.", description),
            },
        }
    }
}
