//! Normalization of raw leave type and leave balance payloads.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::{EngineError, EngineResult};
use crate::models::{BalanceTable, LeaveBalance, LeaveCatalog, LeaveType};
use crate::normalize::value::{
    as_id, as_text, decimal_field, display_key, flag, integer_field, toggle_field,
};

/// Builds the leave catalog from the raw policy rows.
///
/// Rows that are not objects are skipped. Missing codes or
/// descriptions normalize to empty strings, which keeps the catalog
/// total but makes such entries unmatchable by resolution.
pub fn normalize_leave_types(rows: &[Value]) -> LeaveCatalog {
    let mut catalog = LeaveCatalog::new();
    for row in rows {
        let Some(record) = row.as_object() else {
            continue;
        };
        catalog.insert(LeaveType {
            code: as_text(record.get("Lvm_Code_V")).unwrap_or_default(),
            description: as_text(record.get("Lvm_Description_V")).unwrap_or_default(),
            attachment_required: flag(record.get("Lvm_AttachRequired_N")),
            self_service: flag(record.get("Lvm_ShwSelfService_N")),
            eligible_on_workdays: flag(record.get("Lpd_EligibilityOnWrkdays_N")),
            anniversary_date: as_text(record.get("Emp_AnnivDate_D")),
            definition_id: as_id(record.get("Lpd_ID_N")),
            linkage_id: as_id(record.get("Atm_ID_N")),
        });
    }
    catalog
}

/// Builds the balance table from the raw balance map.
///
/// The balance payload is keyed by stringified definition identifiers;
/// each key is linked back to its leave code through the raw policy
/// rows. Keys with no matching policy row keep the stringified
/// identifier as their code. Entries whose value is not a non-empty
/// array are skipped; malformed numeric fields are an error.
pub fn normalize_balances(
    raw_balances: &Map<String, Value>,
    raw_types: &[Value],
) -> EngineResult<BalanceTable> {
    let mut link: HashMap<String, String> = HashMap::new();
    for row in raw_types {
        let Some(record) = row.as_object() else {
            continue;
        };
        if let (Some(key), Some(code)) = (
            display_key(record.get("Lpd_ID_N")),
            as_text(record.get("Lvm_Code_V")),
        ) {
            link.insert(key, code);
        }
    }

    let mut table = BalanceTable::new();
    for (key, value) in raw_balances {
        let Some(rows) = value.as_array() else {
            continue;
        };
        let Some(record) = rows.first().and_then(Value::as_object) else {
            continue;
        };

        let definition_id: i64 =
            key.trim()
                .parse()
                .map_err(|_| EngineError::NumericCoercion {
                    field: "Lpd_ID_N".to_string(),
                    value: key.clone(),
                })?;
        let code = link.get(key).cloned().unwrap_or_else(|| key.clone());

        table.insert(
            code,
            LeaveBalance {
                definition_id,
                balance: decimal_field(record, "Balance")?,
                eligible: decimal_field(record, "Eligible")?,
                paid: decimal_field(record, "Paid")?,
                unpaid: decimal_field(record, "UnPaid")?,
                days_allowed: integer_field(record, "DAYS")?,
                air_ticket: toggle_field(record, "Airticket")?,
                max_days: integer_field(record, "Maxdays")?,
                allow_half_day: toggle_field(record, "Lpd_AllowHalfDay_N")?,
                anniversary_date: as_text(record.get("Emp_AnnivDate_D")),
                air_ticket_percent: decimal_field(record, "AirTicketPercent")?,
            },
        );
    }
    Ok(table)
}
