//! Air ticket entitlement rule.
//!
//! Air ticket grants ride on the balance record, not the catalog: a
//! balance row carries the grant flag and the entitlement percentage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EligibilityEngine;

/// The outcome of an air ticket entitlement check.
#[derive(Debug, Clone)]
pub struct AirTicketAnswer {
    /// Whether an air ticket is granted with the leave.
    pub granted: bool,
    /// Human-readable answer.
    pub message: String,
}

/// A leave that grants an air ticket, with its entitlement percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirTicketLeave {
    /// Leave code.
    pub code: String,
    /// Leave description.
    pub description: String,
    /// Entitlement percentage.
    pub percent: Decimal,
}

impl EligibilityEngine {
    /// Checks whether an air ticket is granted with a leave type.
    pub fn air_ticket_with(&self, query: &str) -> AirTicketAnswer {
        let Some(code) = self.resolve(query) else {
            return AirTicketAnswer {
                granted: false,
                message: format!("Leave type '{}' not found.", query),
            };
        };

        let description = self.description_for(code);
        match self.balance_for(code) {
            Some(info) if info.air_ticket => AirTicketAnswer {
                granted: true,
                message: format!(
                    "Air ticket is granted with {} ({}%).",
                    description,
                    info.air_ticket_percent.normalize()
                ),
            },
            _ => AirTicketAnswer {
                granted: false,
                message: format!("Air ticket is NOT granted with {}.", description),
            },
        }
    }

    /// All leaves that grant an air ticket, in balance order.
    pub fn air_ticket_leaves(&self) -> Vec<AirTicketLeave> {
        self.balances()
            .iter()
            .filter(|(_, info)| info.air_ticket)
            .map(|(code, info)| AirTicketLeave {
                code: code.to_string(),
                description: self.description_for(code),
                percent: info.air_ticket_percent,
            })
            .collect()
    }

    /// Entitlement percentage for a leave, zero when not granted.
    pub fn air_ticket_percent(&self, query: &str) -> Decimal {
        self.resolve(query)
            .and_then(|code| self.balance_for(code))
            .filter(|info| info.air_ticket)
            .map(|info| info.air_ticket_percent)
            .unwrap_or(Decimal::ZERO)
    }
}
