//! Assembly of the full employee context from a raw snapshot.

use crate::erp::RawSnapshot;
use crate::error::EngineResult;
use crate::models::{BalanceTable, Employee, LeaveCatalog};

use super::employee::normalize_employee;
use super::leave::{normalize_balances, normalize_leave_types};

/// The normalized employee context every query path works from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeContext {
    /// Normalized employee master record.
    pub employee: Employee,
    /// Leave types in policy order.
    pub leave_types: LeaveCatalog,
    /// Leave balances in payload order.
    pub balances: BalanceTable,
}

/// Normalizes a raw snapshot into the typed employee context.
///
/// Employee and leave type payloads normalize leniently; only the
/// balance payload can fail, on malformed numeric data.
pub fn build_context(snapshot: &RawSnapshot) -> EngineResult<EmployeeContext> {
    Ok(EmployeeContext {
        employee: normalize_employee(&snapshot.employee),
        leave_types: normalize_leave_types(&snapshot.leave_types),
        balances: normalize_balances(&snapshot.leave_balances, &snapshot.leave_types)?,
    })
}
