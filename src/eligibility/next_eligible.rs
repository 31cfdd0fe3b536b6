//! Next eligible date rule.
//!
//! When an employee can next apply for a leave type. A usable balance
//! means now; an exhausted balance defers to the recorded anniversary
//! date when that date is still ahead.

use chrono::NaiveDate;

use crate::models::parse_erp_date;

use super::EligibilityEngine;

/// When the employee can next apply for a leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextEligibility {
    /// Applicable immediately.
    Now,
    /// Applicable after the contained ERP display date.
    OnDate(String),
    /// Not applicable on any known date.
    NotEligible,
}

impl NextEligibility {
    /// Display label: `"Now"`, the date text, or an empty string.
    pub fn label(&self) -> &str {
        match self {
            NextEligibility::Now => "Now",
            NextEligibility::OnDate(date) => date.as_str(),
            NextEligibility::NotEligible => "",
        }
    }
}

/// The outcome of a next-eligible-date query.
#[derive(Debug, Clone)]
pub struct NextEligibleAnswer {
    /// When the employee can next apply.
    pub when: NextEligibility,
    /// Human-readable answer.
    pub message: String,
}

impl EligibilityEngine {
    /// Determines when the employee can next apply for a leave type.
    ///
    /// `today` anchors the anniversary comparison; an anniversary on
    /// `today` itself no longer counts as ahead.
    pub fn next_eligible_date(&self, query: &str, today: NaiveDate) -> NextEligibleAnswer {
        let Some(code) = self.resolve(query) else {
            return NextEligibleAnswer {
                when: NextEligibility::NotEligible,
                message: format!("Leave type '{}' not found.", query),
            };
        };

        let Some(info) = self.balance_for(code) else {
            return NextEligibleAnswer {
                when: NextEligibility::NotEligible,
                message: format!("No balance info for {}.", code),
            };
        };

        let description = self.description_for(code);
        if info.is_usable() {
            return NextEligibleAnswer {
                when: NextEligibility::Now,
                message: format!("You can apply for {} immediately.", description),
            };
        }

        if let Some(anniversary) = info.anniversary_date.as_deref() {
            if let Some(date) = parse_erp_date(anniversary) {
                if date > today {
                    return NextEligibleAnswer {
                        when: NextEligibility::OnDate(anniversary.to_string()),
                        message: format!("You can apply for {} after {}.", description, anniversary),
                    };
                }
            }
        }

        NextEligibleAnswer {
            when: NextEligibility::NotEligible,
            message: format!("You are not eligible for {} at the moment.", description),
        }
    }
}
