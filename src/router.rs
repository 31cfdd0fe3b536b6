//! Keyword routing of employee questions.
//!
//! Structured topics are answered from the normalized tables; anything
//! unrecognized falls through to semantic policy search.

use serde::{Deserialize, Serialize};

/// The topic a question is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryTopic {
    /// Leave balance listing.
    LeaveBalances,
    /// Leaves that grant an air ticket.
    AirTicketLeaves,
    /// Reporting manager lookup.
    Manager,
    /// Probation status.
    Probation,
    /// Company accommodation eligibility.
    Accommodation,
    /// Shift lookup.
    Shift,
    /// Residence permit number lookup.
    ResidencyPermit,
    /// Department lookup.
    Department,
    /// Joining date lookup.
    JoiningDate,
    /// No structured topic matched; search the policy document.
    PolicyFallback,
}

/// Routes a question to the topic that should answer it.
///
/// Matching is case-insensitive substring search, first match wins, so
/// a question mentioning both balances and air tickets is answered as a
/// balance question.
pub fn route_question(question: &str) -> QueryTopic {
    let lower = question.to_lowercase();

    if lower.contains("leave balance") {
        QueryTopic::LeaveBalances
    } else if lower.contains("air ticket") {
        QueryTopic::AirTicketLeaves
    } else if lower.contains("manager") || lower.contains("reporting") {
        QueryTopic::Manager
    } else if lower.contains("probation") {
        QueryTopic::Probation
    } else if lower.contains("accommodation") {
        QueryTopic::Accommodation
    } else if lower.contains("shift") {
        QueryTopic::Shift
    } else if lower.contains("rp number") || lower.contains("resident permit") {
        QueryTopic::ResidencyPermit
    } else if lower.contains("department") {
        QueryTopic::Department
    } else if lower.contains("joining date") || lower.contains("doj") {
        QueryTopic::JoiningDate
    } else {
        QueryTopic::PolicyFallback
    }
}
