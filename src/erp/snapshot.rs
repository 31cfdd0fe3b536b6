//! Raw ERP data snapshot.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The raw payloads fetched from the ERP for one employee.
///
/// Values are kept untyped; normalization happens in a separate step
/// so a malformed field in one payload cannot poison the fetch. Every
/// field defaults, which is also how degraded fetches look: a call
/// that failed leaves its section empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSnapshot {
    /// Employee master rows (the ERP wraps the record in an array).
    #[serde(default)]
    pub employee: Vec<Value>,
    /// Leave policy rows.
    #[serde(default)]
    pub leave_types: Vec<Value>,
    /// Balance rows keyed by stringified leave definition identifier,
    /// in the order the definitions were fetched.
    #[serde(default)]
    pub leave_balances: Map<String, Value>,
}

impl RawSnapshot {
    /// Whether every section of the snapshot came back empty.
    ///
    /// This is the signature of an unreachable ERP; callers use it to
    /// tell a failed fetch apart from an employee with no data.
    pub fn is_empty(&self) -> bool {
        self.employee.is_empty() && self.leave_types.is_empty() && self.leave_balances.is_empty()
    }
}
