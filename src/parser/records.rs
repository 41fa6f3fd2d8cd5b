//! Boundary parser for exported database rows.
//!
//! Rows arrive as loosely-typed JSON: ids may be numbers or strings, amounts
//! may be numbers or numeric strings, joined relations may be objects,
//! arrays or bare strings. Everything is normalized here so the transforms
//! only ever see typed records.

use super::schema::{Category, Expense, LocationRecord, Report, Trip};
use crate::trips::{parse_date_range, DateRange};
use crate::utils::config::{
    ValidationPolicy, CATEGORY_FIELDS, EXPENSE_LIST_FIELDS, LOCATION_LIST_FIELDS,
    TRIP_LIST_FIELDS,
};
use crate::utils::error::{DateRangeError, ParseError};
use log::{debug, warn};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;

/// Columns of a location row that map to typed fields, or that the
/// flattened output writes itself
const LOCATION_KNOWN_FIELDS: &[&str] = &["id", "name", "original_name", "parent_id", "level"];

/// Parse location rows from raw JSON
///
/// **Public** - main entry point for location data
///
/// # Arguments
/// * `raw` - A JSON array of rows, or an object wrapping one
/// * `policy` - Whether malformed rows are skipped or rejected
///
/// # Errors
/// * `ParseError::InvalidFormat` - Input is not an array or known wrapper
/// * `ParseError::MissingField` - A row lacks `id` or `name` (strict only)
pub fn parse_locations(
    raw: &Value,
    policy: &ValidationPolicy,
) -> Result<Vec<LocationRecord>, ParseError> {
    let rows = extract_rows(raw, LOCATION_LIST_FIELDS)?.unwrap_or_default();
    let mut locations = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        match parse_location(index, row) {
            Ok(location) => locations.push(location),
            Err(e) if policy.reject_malformed_records => return Err(e),
            Err(e) => warn!("Skipping location row {}: {}", index, e),
        }
    }

    debug!("Parsed {} of {} location rows", locations.len(), rows.len());
    Ok(locations)
}

/// Parse a single location row
///
/// **Private** - internal helper for parse_locations
fn parse_location(index: usize, row: &Value) -> Result<LocationRecord, ParseError> {
    let obj = row
        .as_object()
        .ok_or_else(|| ParseError::InvalidFormat(format!("location row {} is not an object", index)))?;

    let id = obj
        .get("id")
        .and_then(parse_id)
        .ok_or(ParseError::MissingField { field: "id", index })?;

    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .ok_or(ParseError::MissingField { field: "name", index })?
        .to_string();

    let parent_id = obj.get("parent_id").and_then(parse_id);

    let extra: Map<String, Value> = obj
        .iter()
        .filter(|(key, _)| !LOCATION_KNOWN_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(LocationRecord {
        id,
        name,
        parent_id,
        extra,
    })
}

/// Parse an expense report from raw JSON
///
/// **Public** - main entry point for report data
///
/// Accepts `{ "trips": [...] }`, a bare array of trips, or a single trip
/// object carrying its own expense list. A missing or null trip list is an
/// empty report, not an error. A trip list of the wrong type is malformed:
/// rejected when strict, an empty report otherwise.
///
/// # Errors
/// * `ParseError::InvalidFormat` - Input is neither an object nor an array,
///   or its trip list is not an array (strict only)
/// * `ParseError::InvalidAmount` - Unparseable amount (strict only)
/// * `ParseError::InvalidDates` - Unreadable trip dates (strict only)
/// * `ParseError::MissingField` - Trip without a name (strict only)
pub fn parse_report(raw: &Value, policy: &ValidationPolicy) -> Result<Report, ParseError> {
    let trip_rows: Vec<&Value> = match raw {
        Value::Array(rows) => rows.iter().collect(),
        Value::Object(obj) => match find_field(obj, TRIP_LIST_FIELDS) {
            Some(Value::Array(rows)) => rows.iter().collect(),
            Some(Value::Null) => Vec::new(),
            Some(other) => {
                let e = ParseError::InvalidFormat(format!(
                    "trip list must be an array, found {}",
                    json_type_name(other)
                ));
                if policy.reject_malformed_records {
                    return Err(e);
                }
                warn!("Treating report as empty: {}", e);
                Vec::new()
            }
            None if find_field(obj, EXPENSE_LIST_FIELDS).is_some() => {
                debug!("Report is a single trip object");
                vec![raw]
            }
            None => {
                debug!("Report has no trip list, treating as empty");
                Vec::new()
            }
        },
        _ => {
            return Err(ParseError::InvalidFormat(
                "Input must be a JSON object or array".to_string(),
            ))
        }
    };

    let mut trips = Vec::with_capacity(trip_rows.len());
    for (index, row) in trip_rows.into_iter().enumerate() {
        let Some(obj) = row.as_object() else {
            let e = ParseError::InvalidFormat(format!("trip row {} is not an object", index));
            if policy.reject_malformed_records {
                return Err(e);
            }
            warn!("Skipping trip row {}: {}", index, e);
            continue;
        };
        trips.push(parse_trip(index, obj, policy)?);
    }

    debug!(
        "Parsed report: {} trips, {} expenses",
        trips.len(),
        trips.iter().map(|t| t.expenses.len()).sum::<usize>()
    );

    Ok(Report { trips })
}

/// Parse one trip and its expenses
///
/// **Private** - internal helper for parse_report
fn parse_trip(
    index: usize,
    obj: &Map<String, Value>,
    policy: &ValidationPolicy,
) -> Result<Trip, ParseError> {
    let name = match obj.get("name").and_then(Value::as_str) {
        Some(name) => name.to_string(),
        None if policy.reject_malformed_records => {
            return Err(ParseError::MissingField { field: "name", index })
        }
        None => {
            warn!("Trip row {} has no name", index);
            String::new()
        }
    };

    let dates = match parse_trip_dates(obj) {
        Ok(dates) => dates,
        Err(source) if policy.reject_malformed_records => {
            return Err(ParseError::InvalidDates { trip: name, source })
        }
        Err(e) => {
            warn!("Ignoring dates of trip '{}': {}", name, e);
            None
        }
    };

    let expense_rows = find_field(obj, EXPENSE_LIST_FIELDS)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut expenses = Vec::with_capacity(expense_rows.len());
    for (expense_index, row) in expense_rows.iter().enumerate() {
        match row.as_object() {
            Some(expense_obj) => expenses.push(parse_expense(expense_obj, policy)?),
            None if policy.reject_malformed_records => {
                return Err(ParseError::InvalidFormat(format!(
                    "expense {} of trip '{}' is not an object",
                    expense_index, name
                )))
            }
            None => warn!(
                "Skipping expense {} of trip '{}': not an object",
                expense_index, name
            ),
        }
    }

    Ok(Trip {
        id: obj.get("id").and_then(parse_id),
        name,
        dates,
        expenses,
    })
}

/// Read a trip's dates from either an interval literal or a start/end pair
///
/// **Private** - internal helper for parse_trip
fn parse_trip_dates(obj: &Map<String, Value>) -> Result<Option<DateRange>, DateRangeError> {
    if let Some(literal) = obj.get("dates").and_then(Value::as_str) {
        return parse_date_range(literal).map(Some);
    }

    let start = obj.get("start_date").and_then(Value::as_str);
    let end = obj.get("end_date").and_then(Value::as_str);
    match (start, end) {
        (Some(start), Some(end)) => {
            parse_date_range(&format!("[{},{}]", start, end)).map(Some)
        }
        (None, None) => Ok(None),
        (None, Some(_)) => Err(DateRangeError::Unbounded("lower")),
        (Some(_), None) => Err(DateRangeError::Unbounded("upper")),
    }
}

/// Parse one expense row
///
/// **Private** - internal helper for parse_trip
fn parse_expense(obj: &Map<String, Value>, policy: &ValidationPolicy) -> Result<Expense, ParseError> {
    let amount = coerce_amount(obj.get("amount"), policy)?;

    Ok(Expense {
        id: obj.get("id").and_then(parse_id),
        description: obj
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string),
        amount,
        is_reimbursable: obj.get("is_reimbursable").is_some_and(parse_flag),
        receipt_url: obj
            .get("receipt_url")
            .and_then(Value::as_str)
            .map(str::to_string),
        category: find_field(obj, CATEGORY_FIELDS).and_then(parse_category),
    })
}

/// Apply the amount policy to a raw amount field
///
/// **Public** - shared by every row type carrying money
///
/// Under the lenient policy anything unparseable (including a missing
/// field) becomes exactly zero.
pub fn coerce_amount(
    value: Option<&Value>,
    policy: &ValidationPolicy,
) -> Result<Decimal, ParseError> {
    match parse_amount(value.unwrap_or(&Value::Null)) {
        Ok(amount) => Ok(amount),
        Err(e) if policy.reject_invalid_amounts => Err(e),
        Err(e) => {
            debug!("Treating amount as 0: {}", e);
            Ok(Decimal::ZERO)
        }
    }
}

/// Parse an amount from a JSON number or numeric string
///
/// A decimal comma is accepted only as the sole separator followed by one
/// or two digits (`"12,50"` is 12.50). Anything else carrying a comma, such
/// as the thousands-grouped `"1,000"`, is rejected.
pub fn parse_amount(value: &Value) -> Result<Decimal, ParseError> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.contains(',') {
                let normalized = normalize_decimal_comma(trimmed)
                    .ok_or_else(|| ParseError::InvalidAmount(format!("'{}'", s)))?;
                parse_decimal(&normalized)
            } else {
                parse_decimal(trimmed)
            }
        }
        other => Err(ParseError::InvalidAmount(format!(
            "expected number or string, found {}",
            json_type_name(other)
        ))),
    }
}

/// Parse plain or scientific decimal text
///
/// **Private** - internal helper for parse_amount
fn parse_decimal(text: &str) -> Result<Decimal, ParseError> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| ParseError::InvalidAmount(format!("'{}'", text)))
}

/// Rewrite `"12,5"` / `"12,50"` with a decimal point
///
/// **Private** - internal helper for parse_amount; `None` for any other
/// use of a comma
fn normalize_decimal_comma(text: &str) -> Option<String> {
    if text.contains('.') {
        return None;
    }
    let (whole, fraction) = text.split_once(',')?;
    let valid_fraction = (1..=2).contains(&fraction.len())
        && fraction.chars().all(|c| c.is_ascii_digit());
    if !valid_fraction {
        return None;
    }
    Some(format!("{}.{}", whole, fraction))
}

/// Read a category from an object, a one-element join array, or a bare name
///
/// **Private** - internal helper for parse_expense
fn parse_category(value: &Value) -> Option<Category> {
    match value {
        Value::String(name) => Some(Category { name: name.clone() }),
        Value::Object(obj) => obj.get("name").and_then(Value::as_str).map(|name| Category {
            name: name.to_string(),
        }),
        Value::Array(items) => items.first().and_then(parse_category),
        _ => None,
    }
}

/// Interpret a boolean-ish column
///
/// **Private** - internal utility
fn parse_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "yes"),
        _ => false,
    }
}

/// Read an identifier from a string or number column
///
/// **Private** - internal utility; empty strings count as absent
fn parse_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// JSON type name for error messages
///
/// **Private** - internal utility
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// First present field among `fields`
///
/// **Private** - internal utility
fn find_field<'a>(obj: &'a Map<String, Value>, fields: &[&str]) -> Option<&'a Value> {
    fields.iter().find_map(|field| obj.get(*field))
}

/// Locate the row array in a bare array or a wrapping object
///
/// Returns `Ok(None)` when the wrapper field is present but null.
///
/// **Private** - internal extraction logic
fn extract_rows<'a>(raw: &'a Value, fields: &[&str]) -> Result<Option<&'a [Value]>, ParseError> {
    match raw {
        Value::Array(rows) => Ok(Some(rows)),
        Value::Object(obj) => match find_field(obj, fields) {
            Some(Value::Array(rows)) => Ok(Some(rows)),
            Some(Value::Null) => Ok(None),
            _ => Err(ParseError::InvalidFormat(format!(
                "expected an array or an object with one of: {}",
                fields.join(", ")
            ))),
        },
        _ => Err(ParseError::InvalidFormat(
            "Input must be a JSON object or array".to_string(),
        )),
    }
}
