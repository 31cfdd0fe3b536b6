//! Normalization of the raw employee master payload.

use serde_json::{Map, Value};

use crate::models::Employee;
use crate::normalize::value::{as_id, as_text};

/// Whether an eligibility entry grants company accommodation.
fn grants_accommodation(entry: &Map<String, Value>) -> bool {
    as_text(entry.get("Eligibility_Desc_V"))
        .map(|text| text.trim().to_lowercase() == "accommodation")
        .unwrap_or(false)
}

/// Builds the normalized [`Employee`] from the raw detail rows.
///
/// The ERP wraps the master record in a single-element array; an empty
/// or malformed payload normalizes to an empty record rather than an
/// error, so profile queries degrade to `"Not specified"` answers.
pub fn normalize_employee(rows: &[Value]) -> Employee {
    let Some(record) = rows.first().and_then(Value::as_object) else {
        return Employee::default();
    };

    let name = as_text(record.get("Emp_EFullName_V"))
        .filter(|text| !text.is_empty())
        .or_else(|| as_text(record.get("Emp_EDisplayName_V")))
        .unwrap_or_default();

    let accommodation_eligible = record
        .get("Eligibility")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_object)
                .any(grants_accommodation)
        })
        .unwrap_or(false);

    Employee {
        id: as_id(record.get("Emp_ID_N")),
        name,
        job_title: as_text(record.get("Emp_RpProfessionDesc_V")),
        department: as_text(record.get("Dpm_Desc_V")),
        sponsor: as_text(record.get("Emp_SponsorDesc_V")),
        joining_date: as_text(record.get("Emp_DOJ_D")),
        contract_type: as_text(record.get("Ctm_Description_V")),
        family_status: as_text(record.get("Emp_FamilyStatus_V")),
        mobile: as_text(record.get("Emp_Mobile_V")),
        email: as_text(record.get("Emp_EmailID_V")),
        leave_policy: as_text(record.get("Lph_Desc_V")),
        shift: as_text(record.get("Sfh_ShiftName_V")),
        rp_number: as_text(record.get("Emp_RPNumber_V")),
        manager: as_text(record.get("Emp_EmployeeReportsDesc_V")),
        probation_end: as_text(record.get("Emp_ProbationEndDate_D")),
        accommodation_eligible,
    }
}
