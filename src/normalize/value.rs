//! Field coercion helpers for raw ERP payload values.
//!
//! The ERP is loose with types: numeric fields arrive as numbers or
//! strings, flags arrive as `1`/`"1"`/`"0"`, and identifiers arrive as
//! either. Display fields coerce leniently (absent stays absent) while
//! numeric balance fields fail fast, since silently zeroing a
//! malformed balance would corrupt every downstream answer.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::error::{EngineError, EngineResult};

/// Coerces a display field to text.
///
/// Strings pass through, numbers and booleans are stringified, and
/// absent or null values stay absent.
pub fn as_text(value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// Coerces an identifier field to an integer, leniently.
///
/// Accepts integers, fractional numbers (truncated), and integer
/// strings; anything else becomes `None`.
pub fn as_id(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float as i64)),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Stringifies an identifier the way the balance payload keys it.
///
/// The balance map is keyed by stringified definition identifiers, so
/// linking compares this form rather than the parsed number.
pub fn display_key(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Reads an ERP flag field.
///
/// A flag is set only when its stringified value is exactly `"1"`;
/// `"1.0"`, `true`, absent and null all read as unset.
pub fn flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::String(text)) => text == "1",
        Some(Value::Number(number)) => number.to_string() == "1",
        _ => false,
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .ok()
        .or_else(|| Decimal::from_scientific(text).ok())
}

/// Reads a decimal balance field, failing fast on malformed values.
///
/// An absent field reads as zero. Numbers, numeric strings and
/// booleans coerce; null and anything else is a [`EngineError::NumericCoercion`].
pub fn decimal_field(record: &Map<String, Value>, field: &str) -> EngineResult<Decimal> {
    let Some(value) = record.get(field) else {
        return Ok(Decimal::ZERO);
    };

    let parsed = match value {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(text) => parse_decimal(text.trim()),
        Value::Bool(state) => Some(if *state { Decimal::ONE } else { Decimal::ZERO }),
        _ => None,
    };

    parsed.ok_or_else(|| EngineError::NumericCoercion {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Reads an integer day-count field, failing fast on malformed values.
///
/// An absent field reads as zero. Fractional numbers truncate;
/// fractional strings do not coerce.
pub fn integer_field(record: &Map<String, Value>, field: &str) -> EngineResult<i64> {
    let Some(value) = record.get(field) else {
        return Ok(0);
    };

    let parsed = match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float as i64)),
        Value::String(text) => text.trim().parse().ok(),
        Value::Bool(state) => Some(i64::from(*state)),
        _ => None,
    };

    parsed.ok_or_else(|| EngineError::NumericCoercion {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Reads a numeric toggle field (non-zero means set).
///
/// Unlike [`flag`], this one coerces through the integer rules first,
/// so `"2"` reads as set and `"0.5"` is a coercion error.
pub fn toggle_field(record: &Map<String, Value>, field: &str) -> EngineResult<bool> {
    Ok(integer_field(record, field)? != 0)
}
