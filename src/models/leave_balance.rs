//! Leave balance model and the ordered balance table.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balance figures for one leave definition.
///
/// Day counts that the ERP reports fractionally (carry-overs, half-day
/// accruals) are kept as [`Decimal`] so display output matches the
/// upstream records exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// Leave policy detail identifier the balance belongs to.
    pub definition_id: i64,
    /// Remaining balance in days.
    pub balance: Decimal,
    /// Days eligible to date.
    pub eligible: Decimal,
    /// Paid days consumed.
    pub paid: Decimal,
    /// Unpaid days consumed.
    pub unpaid: Decimal,
    /// Days allowed per cycle.
    pub days_allowed: i64,
    /// Whether an air ticket is granted with this leave.
    pub air_ticket: bool,
    /// Maximum days per application.
    pub max_days: i64,
    /// Whether half-day applications are allowed.
    pub allow_half_day: bool,
    /// Anniversary date as ERP display text, when the balance sets one.
    pub anniversary_date: Option<String>,
    /// Air ticket entitlement percentage.
    pub air_ticket_percent: Decimal,
}

impl LeaveBalance {
    /// Whether the employee can actually apply against this balance.
    ///
    /// Only a strictly positive remaining balance counts; eligible or
    /// allowed days do not make a zero balance usable.
    pub fn is_usable(&self) -> bool {
        self.balance > Decimal::ZERO
    }
}

/// Ordered collection of leave balances keyed by leave code.
///
/// Keys are the codes the balance payload was keyed by (stringified
/// definition identifiers for policies that report them that way).
/// Iteration preserves payload order; a duplicate key keeps its first
/// position but takes the later record's values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceTable {
    entries: Vec<(String, LeaveBalance)>,
    index: HashMap<String, usize>,
}

impl BalanceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a balance under `code`, replacing any existing entry.
    pub fn insert(&mut self, code: String, balance: LeaveBalance) {
        match self.index.get(&code) {
            Some(&position) => self.entries[position] = (code, balance),
            None => {
                self.index.insert(code.clone(), self.entries.len());
                self.entries.push((code, balance));
            }
        }
    }

    /// Looks up a balance by exact code.
    pub fn get(&self, code: &str) -> Option<&LeaveBalance> {
        self.index
            .get(code)
            .map(|&position| &self.entries[position].1)
    }

    /// Iterates `(code, balance)` pairs in payload order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LeaveBalance)> {
        self.entries
            .iter()
            .map(|(code, balance)| (code.as_str(), balance))
    }

    /// Iterates balance codes in payload order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }

    /// Number of balances in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no balances.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
