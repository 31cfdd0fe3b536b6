//! Leave eligibility rules.
//!
//! [`EligibilityEngine`] wraps the normalized leave catalog and
//! balance table together with query resolution. Each rule lives in
//! its own module and answers one kind of question with a small
//! result struct carrying both the verdict and a ready-to-display
//! message.

mod air_ticket;
mod alternative;
mod apply;
mod attachment;
mod next_eligible;
mod self_service;
mod summary;

pub use air_ticket::{AirTicketAnswer, AirTicketLeave};
pub use alternative::AlternativeSuggestion;
pub use apply::ApplyAnswer;
pub use attachment::AttachmentAnswer;
pub use next_eligible::{NextEligibility, NextEligibleAnswer};
pub use self_service::SelfServiceAnswer;
pub use summary::BalanceSummaryRow;

use serde::{Deserialize, Serialize};

use crate::models::{BalanceTable, LeaveBalance, LeaveCatalog};
use crate::normalize::EmployeeContext;
use crate::resolve::CodeResolver;

/// A leave type reference used in listing answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRef {
    /// Leave code.
    pub code: String,
    /// Leave description.
    pub description: String,
}

/// Answers leave eligibility questions for one employee.
pub struct EligibilityEngine {
    catalog: LeaveCatalog,
    balances: BalanceTable,
    resolver: CodeResolver,
}

impl EligibilityEngine {
    /// Creates an engine over a leave catalog and balance table.
    pub fn new(catalog: LeaveCatalog, balances: BalanceTable) -> Self {
        let resolver = CodeResolver::new(&catalog, &balances);
        Self {
            catalog,
            balances,
            resolver,
        }
    }

    /// Creates an engine from a normalized employee context.
    pub fn from_context(context: &EmployeeContext) -> Self {
        Self::new(context.leave_types.clone(), context.balances.clone())
    }

    /// Resolves a free-form leave query to a canonical code.
    pub fn resolve(&self, query: &str) -> Option<&str> {
        self.resolver.resolve(query)
    }

    /// Leave types that can be applied on working days, in policy order.
    pub fn leave_types_on_workday(&self) -> Vec<LeaveRef> {
        self.catalog
            .iter()
            .filter(|leave_type| leave_type.eligible_on_workdays)
            .map(|leave_type| LeaveRef {
                code: leave_type.code.clone(),
                description: leave_type.description.clone(),
            })
            .collect()
    }

    /// Display description for a code.
    ///
    /// Balance-only codes have no catalog entry; they are described by
    /// the code itself so every message stays printable.
    pub(crate) fn description_for(&self, code: &str) -> String {
        self.catalog
            .get(code)
            .map(|leave_type| leave_type.description.clone())
            .unwrap_or_else(|| code.to_string())
    }

    pub(crate) fn balance_for(&self, code: &str) -> Option<&LeaveBalance> {
        self.balances.get(code)
    }

    pub(crate) fn attachment_required_for(&self, code: &str) -> bool {
        self.catalog
            .get(code)
            .map(|leave_type| leave_type.attachment_required)
            .unwrap_or(false)
    }

    /// The leave catalog the engine was built over.
    pub fn catalog(&self) -> &LeaveCatalog {
        &self.catalog
    }

    /// The balance table the engine was built over.
    pub fn balances(&self) -> &BalanceTable {
        &self.balances
    }
}
