//! Balance summary rule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EligibilityEngine;

/// One row of the leave balance summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSummaryRow {
    /// Leave code.
    pub code: String,
    /// Leave description (the code itself for balance-only rows).
    pub description: String,
    /// Remaining balance in days.
    pub balance: Decimal,
    /// Days eligible to date.
    pub eligible: Decimal,
    /// Whether an air ticket is granted with this leave.
    pub air_ticket: bool,
    /// Whether applications need an attachment.
    pub attachment_required: bool,
}

impl EligibilityEngine {
    /// Summarizes every leave balance, in balance order.
    pub fn balance_summary(&self) -> Vec<BalanceSummaryRow> {
        self.balances()
            .iter()
            .map(|(code, info)| BalanceSummaryRow {
                code: code.to_string(),
                description: self.description_for(code),
                balance: info.balance,
                eligible: info.eligible,
                air_ticket: info.air_ticket,
                attachment_required: self.attachment_required_for(code),
            })
            .collect()
    }
}
