//! Core data models for the leave engine.
//!
//! This module contains all the domain models used throughout the engine.

mod document;
mod employee;
mod leave_balance;
mod leave_type;

pub use document::{DocumentSection, ScoredSection};
pub use employee::{
    AccommodationStatus, Employee, ProbationStatus, ProfileSummary, parse_erp_date,
    ERP_DATE_FORMAT, NOT_SPECIFIED,
};
pub use leave_balance::{BalanceTable, LeaveBalance};
pub use leave_type::{LeaveCatalog, LeaveType};
