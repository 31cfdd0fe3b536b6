//! Alternative leave suggestion rule.
//!
//! When a requested leave has no usable balance, suggest the first
//! other leave (in balance order) the employee could apply for
//! instead.

use crate::models::LeaveBalance;

use super::EligibilityEngine;

/// The outcome of an alternative leave lookup.
#[derive(Debug, Clone)]
pub struct AlternativeSuggestion {
    /// Description of the suggested alternative, when one exists.
    pub suggestion: Option<String>,
    /// Human-readable answer. Empty when no suggestion applies
    /// because the requested leave is usable or unknown.
    pub message: String,
}

impl EligibilityEngine {
    /// Suggests another leave when the requested one is exhausted.
    pub fn suggest_alternative_leave(&self, query: &str) -> AlternativeSuggestion {
        let Some(code) = self.resolve(query) else {
            return AlternativeSuggestion {
                suggestion: None,
                message: String::new(),
            };
        };

        let usable = self
            .balance_for(code)
            .map(LeaveBalance::is_usable)
            .unwrap_or(false);
        if usable {
            return AlternativeSuggestion {
                suggestion: None,
                message: String::new(),
            };
        }

        for (candidate, info) in self.balances().iter() {
            if info.is_usable() && candidate != code {
                let alternative = self.description_for(candidate);
                return AlternativeSuggestion {
                    message: format!(
                        "You have no balance in {}. Consider applying for {} instead.",
                        self.description_for(code),
                        alternative
                    ),
                    suggestion: Some(alternative),
                };
            }
        }

        AlternativeSuggestion {
            suggestion: None,
            message: "You do not have sufficient balance in any leave type.".to_string(),
        }
    }
}
