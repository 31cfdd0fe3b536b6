//! Leave query engine for HR ERP data.
//!
//! This crate normalizes raw ERP leave payloads into canonical employee,
//! leave type and balance tables, resolves free-form leave queries, and
//! answers eligibility questions, with semantic search over the leave
//! policy document as the fallback for everything else.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod eligibility;
pub mod erp;
pub mod error;
pub mod models;
pub mod normalize;
pub mod resolve;
pub mod router;
pub mod search;
