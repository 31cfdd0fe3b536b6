//! Normalization of raw ERP payloads into typed models.
//!
//! The ERP reports numbers as strings, flags as `"1"`, and omits
//! fields freely. This module owns all of that coercion so the rest of
//! the engine only ever sees [`crate::models`] types.

mod context;
mod employee;
mod leave;
mod value;

pub use context::{build_context, EmployeeContext};
pub use employee::normalize_employee;
pub use leave::{normalize_balances, normalize_leave_types};
pub use value::{as_id, as_text, decimal_field, display_key, flag, integer_field, toggle_field};
