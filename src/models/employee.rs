//! Employee model and profile queries.
//!
//! The [`Employee`] struct is the normalized view of the ERP employee
//! master record. Upstream payloads carry dates as display strings and
//! omit fields freely, so most fields are optional and dates stay as
//! raw text until a query needs them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by the upstream ERP for display dates, e.g. `15-Aug-2025`.
pub const ERP_DATE_FORMAT: &str = "%d-%b-%Y";

/// Fallback shown for profile fields the ERP did not supply.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Parses an ERP display date (`%d-%b-%Y`).
///
/// Returns `None` for empty or malformed input rather than an error;
/// callers decide whether a missing date is a problem.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use leave_engine::models::parse_erp_date;
///
/// assert_eq!(
///     parse_erp_date("15-Aug-2025"),
///     NaiveDate::from_ymd_opt(2025, 8, 15)
/// );
/// assert_eq!(parse_erp_date("2025-08-15"), None);
/// ```
pub fn parse_erp_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), ERP_DATE_FORMAT).ok()
}

/// A normalized employee master record.
///
/// Field values are carried exactly as the ERP sent them; the accessor
/// methods apply the presentation fallbacks, so consumers should prefer
/// those over reading the fields directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// ERP numeric identifier, when the payload carried one.
    pub id: Option<i64>,
    /// Display name as sent by the ERP (may be empty).
    pub name: String,
    /// Job title or profession description.
    pub job_title: Option<String>,
    /// Department description.
    pub department: Option<String>,
    /// Sponsor description.
    pub sponsor: Option<String>,
    /// Joining date as ERP display text.
    pub joining_date: Option<String>,
    /// Contract type description.
    pub contract_type: Option<String>,
    /// Family status description.
    pub family_status: Option<String>,
    /// Mobile number.
    pub mobile: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Leave policy name the employee is enrolled in.
    pub leave_policy: Option<String>,
    /// Shift name.
    pub shift: Option<String>,
    /// Residence permit number.
    pub rp_number: Option<String>,
    /// Reporting manager description.
    pub manager: Option<String>,
    /// Probation end date as ERP display text.
    pub probation_end: Option<String>,
    /// Whether the eligibility list carried a company accommodation entry.
    pub accommodation_eligible: bool,
}

/// Outcome of a probation query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbationStatus {
    /// `Some(true)` while on probation, `Some(false)` once it ended,
    /// `None` when the record cannot answer the question.
    pub on_probation: Option<bool>,
    /// Human-readable answer.
    pub message: String,
}

/// Outcome of a company accommodation query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccommodationStatus {
    /// Whether the employee is eligible for company accommodation.
    pub eligible: bool,
    /// Human-readable answer.
    pub message: String,
}

/// Profile summary with presentation fallbacks applied.
///
/// Every field is ready to display; absent ERP values appear as
/// `"Not specified"` and the name falls back to an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    /// Display name (may be empty when the ERP sent none).
    pub name: String,
    /// Job title.
    pub job_title: String,
    /// Department.
    pub department: String,
    /// Sponsor.
    pub sponsor: String,
    /// Joining date as ERP display text.
    pub joining_date: String,
    /// Completed years of service, when the joining date parses.
    pub years_of_service: Option<i64>,
    /// Contract type.
    pub contract_type: String,
    /// Family status.
    pub family_status: String,
    /// Mobile number.
    pub mobile: String,
    /// Email address.
    pub email: String,
    /// Leave policy name.
    pub leave_policy: String,
    /// Shift name.
    pub shift: String,
    /// Residence permit number.
    pub rp_number: String,
    /// Reporting manager.
    pub manager: String,
}

fn or_not_specified(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => NOT_SPECIFIED.to_string(),
    }
}

impl Employee {
    /// Display name with surrounding whitespace removed.
    ///
    /// Unlike the other accessors this does not fall back to
    /// `"Not specified"`; an unnamed record yields an empty string.
    pub fn full_name(&self) -> &str {
        self.name.trim()
    }

    /// Job title, or `"Not specified"`.
    pub fn job_title(&self) -> String {
        or_not_specified(&self.job_title)
    }

    /// Department, or `"Not specified"`.
    pub fn department(&self) -> String {
        or_not_specified(&self.department)
    }

    /// Sponsor, or `"Not specified"`.
    pub fn sponsor(&self) -> String {
        or_not_specified(&self.sponsor)
    }

    /// Joining date display text, or `"Not specified"`.
    pub fn joining_date(&self) -> String {
        or_not_specified(&self.joining_date)
    }

    /// Contract type, or `"Not specified"`.
    pub fn contract_type(&self) -> String {
        or_not_specified(&self.contract_type)
    }

    /// Family status, or `"Not specified"`.
    pub fn family_status(&self) -> String {
        or_not_specified(&self.family_status)
    }

    /// Mobile number, or `"Not specified"`.
    pub fn mobile(&self) -> String {
        or_not_specified(&self.mobile)
    }

    /// Email address, or `"Not specified"`.
    pub fn email(&self) -> String {
        or_not_specified(&self.email)
    }

    /// Leave policy name, or `"Not specified"`.
    pub fn leave_policy(&self) -> String {
        or_not_specified(&self.leave_policy)
    }

    /// Shift name, or `"Not specified"`.
    pub fn shift(&self) -> String {
        or_not_specified(&self.shift)
    }

    /// Residence permit number, or `"Not specified"`.
    pub fn rp_number(&self) -> String {
        or_not_specified(&self.rp_number)
    }

    /// Reporting manager, or `"Not specified"`.
    pub fn manager(&self) -> String {
        or_not_specified(&self.manager)
    }

    /// Completed years of service as of `today`.
    ///
    /// Returns `None` when the joining date is absent or does not parse.
    pub fn years_of_service(&self, today: NaiveDate) -> Option<i64> {
        let joined = parse_erp_date(self.joining_date.as_deref()?)?;
        Some((today - joined).num_days().div_euclid(365))
    }

    /// Answers whether the employee is on probation as of `today`.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use leave_engine::models::Employee;
    ///
    /// let employee = Employee {
    ///     probation_end: Some("01-Dec-2025".to_string()),
    ///     ..Employee::default()
    /// };
    /// let today = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
    /// let status = employee.probation_status(today);
    /// assert_eq!(status.on_probation, Some(true));
    /// assert_eq!(status.message, "You are on probation until 01-Dec-2025.");
    /// ```
    pub fn probation_status(&self, today: NaiveDate) -> ProbationStatus {
        let raw = match self.probation_end.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => {
                return ProbationStatus {
                    on_probation: None,
                    message: "Probation information not available.".to_string(),
                };
            }
        };

        let Some(end) = parse_erp_date(raw) else {
            return ProbationStatus {
                on_probation: None,
                message: "Probation date format invalid.".to_string(),
            };
        };

        if today < end {
            ProbationStatus {
                on_probation: Some(true),
                message: format!("You are on probation until {raw}."),
            }
        } else {
            ProbationStatus {
                on_probation: Some(false),
                message: format!("You are not on probation. Probation ended on {raw}."),
            }
        }
    }

    /// Answers whether the employee is eligible for company accommodation.
    pub fn accommodation_status(&self) -> AccommodationStatus {
        if self.accommodation_eligible {
            AccommodationStatus {
                eligible: true,
                message: "You are eligible for company accommodation.".to_string(),
            }
        } else {
            AccommodationStatus {
                eligible: false,
                message: "You are not eligible for company accommodation.".to_string(),
            }
        }
    }

    /// Builds the displayable profile summary as of `today`.
    pub fn summary(&self, today: NaiveDate) -> ProfileSummary {
        ProfileSummary {
            name: self.full_name().to_string(),
            job_title: self.job_title(),
            department: self.department(),
            sponsor: self.sponsor(),
            joining_date: self.joining_date(),
            years_of_service: self.years_of_service(today),
            contract_type: self.contract_type(),
            family_status: self.family_status(),
            mobile: self.mobile(),
            email: self.email(),
            leave_policy: self.leave_policy(),
            shift: self.shift(),
            rp_number: self.rp_number(),
            manager: self.manager(),
        }
    }
}
