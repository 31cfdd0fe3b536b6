//! Leave type model and the ordered leave catalog.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A leave type from the employee's leave policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveType {
    /// Short leave code (e.g. "AL", "SL").
    pub code: String,
    /// Human-readable description (e.g. "Annual Leave").
    pub description: String,
    /// Whether applications need a supporting attachment.
    pub attachment_required: bool,
    /// Whether the type can be applied through self-service.
    pub self_service: bool,
    /// Whether eligibility is counted on working days only.
    pub eligible_on_workdays: bool,
    /// Anniversary date as ERP display text, when the policy sets one.
    pub anniversary_date: Option<String>,
    /// Leave policy detail identifier.
    pub definition_id: Option<i64>,
    /// Attachment type identifier.
    pub linkage_id: Option<i64>,
}

/// Ordered collection of leave types keyed by code.
///
/// Iteration preserves the order the ERP listed the types in, which is
/// what resolution and alternative suggestions rely on. A duplicate
/// code keeps its first position but takes the later record's values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaveCatalog {
    types: Vec<LeaveType>,
    index: HashMap<String, usize>,
}

impl LeaveCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from leave types in ERP order.
    pub fn from_types(types: Vec<LeaveType>) -> Self {
        let mut catalog = Self::new();
        for leave_type in types {
            catalog.insert(leave_type);
        }
        catalog
    }

    /// Inserts a leave type, replacing any existing entry with the same code.
    pub fn insert(&mut self, leave_type: LeaveType) {
        match self.index.get(&leave_type.code) {
            Some(&position) => self.types[position] = leave_type,
            None => {
                self.index
                    .insert(leave_type.code.clone(), self.types.len());
                self.types.push(leave_type);
            }
        }
    }

    /// Looks up a leave type by exact code.
    pub fn get(&self, code: &str) -> Option<&LeaveType> {
        self.index.get(code).map(|&position| &self.types[position])
    }

    /// Iterates leave types in ERP order.
    pub fn iter(&self) -> impl Iterator<Item = &LeaveType> {
        self.types.iter()
    }

    /// Iterates leave codes in ERP order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|leave_type| leave_type.code.as_str())
    }

    /// Number of leave types in the catalog.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the catalog holds no leave types.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
