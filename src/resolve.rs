//! Leave query resolution.
//!
//! Users name leave types however they like ("AL", "annual leave",
//! "sick"). Resolution tries an exact code match first, then scans
//! descriptions for a substring match in policy order, so the first
//! listed type wins on ambiguous queries.

use std::collections::HashSet;

use crate::models::{BalanceTable, LeaveCatalog};

/// Resolves free-form leave queries to canonical leave codes.
///
/// Exact matching covers catalog codes and balance keys, so balances
/// with no catalog entry (keyed by a bare definition identifier)
/// remain addressable by that identifier. Description matching only
/// covers the catalog, which is where descriptions live.
///
/// # Example
///
/// ```
/// use leave_engine::models::{BalanceTable, LeaveCatalog, LeaveType};
/// use leave_engine::resolve::CodeResolver;
///
/// let catalog = LeaveCatalog::from_types(vec![LeaveType {
///     code: "AL".to_string(),
///     description: "Annual Leave".to_string(),
///     attachment_required: false,
///     self_service: true,
///     eligible_on_workdays: false,
///     anniversary_date: None,
///     definition_id: Some(901),
///     linkage_id: None,
/// }]);
/// let resolver = CodeResolver::new(&catalog, &BalanceTable::new());
///
/// assert_eq!(resolver.resolve("al"), Some("AL"));
/// assert_eq!(resolver.resolve("annual"), Some("AL"));
/// assert_eq!(resolver.resolve("parental"), None);
/// ```
#[derive(Debug, Clone)]
pub struct CodeResolver {
    exact: HashSet<String>,
    ordered: Vec<(String, String)>,
}

impl CodeResolver {
    /// Builds a resolver over the catalog codes and balance keys.
    pub fn new(catalog: &LeaveCatalog, balances: &BalanceTable) -> Self {
        let mut exact: HashSet<String> = catalog.codes().map(str::to_string).collect();
        exact.extend(balances.codes().map(str::to_string));

        let ordered = catalog
            .iter()
            .map(|leave_type| (leave_type.code.clone(), leave_type.description.to_lowercase()))
            .collect();

        Self { exact, ordered }
    }

    /// Resolves a query to a leave code.
    ///
    /// The query is trimmed; exact matching is done against the
    /// uppercased query, description matching against the lowercased
    /// one. Returns `None` when nothing matches.
    pub fn resolve(&self, query: &str) -> Option<&str> {
        let code = query.trim().to_uppercase();
        if let Some(found) = self.exact.get(code.as_str()) {
            return Some(found.as_str());
        }

        let needle = query.trim().to_lowercase();
        self.ordered
            .iter()
            .find(|(_, description)| description.contains(&needle))
            .map(|(code, _)| code.as_str())
    }
}
