use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::domain::attribute::AttributeType;

use super::errors::NormalizeError;

// ============================================================================
// Filter Value Coercion
// ============================================================================
//
// Raw filter values arrive as strings from query parameters or GraphQL
// variables. The attribute's declared type tag decides what they become
// before being bound into a query predicate.
//
// Coercion follows cast semantics: boolean, integer and percent inputs never
// fail, they degrade (unparseable numerics become 0). Dates are the
// exception and fail hard. Both behaviors are part of the observable API.
//
// ============================================================================

/// A dynamically-typed value bound into the query parameter table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    DateTime(NaiveDateTime),
}

impl FilterValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FilterValue::Null)
    }
}

impl std::fmt::Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterValue::Null => f.write_str("NULL"),
            FilterValue::Bool(value) => write!(f, "{value}"),
            FilterValue::Integer(value) => write!(f, "{value}"),
            FilterValue::Float(value) => write!(f, "{value}"),
            FilterValue::Text(value) => write!(f, "'{value}'"),
            FilterValue::DateTime(value) => write!(f, "'{}'", value.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// Coerce a raw string value according to the attribute's type tag.
///
/// `None` passes through as [`FilterValue::Null`], which the `partial`
/// operator treats as "add no predicate". Unknown tags pass the raw string
/// through unchanged.
pub fn normalize_value(
    raw: Option<&str>,
    kind: &AttributeType,
) -> Result<FilterValue, NormalizeError> {
    let Some(raw) = raw else {
        return Ok(FilterValue::Null);
    };

    let value = match kind {
        AttributeType::Checkbox => FilterValue::Bool(string_to_bool(raw)),
        AttributeType::Date | AttributeType::Datetime => {
            FilterValue::DateTime(parse_date_time(raw)?)
        }
        AttributeType::Integer => FilterValue::Integer(string_to_int(raw)),
        AttributeType::Percent => FilterValue::Float(string_to_float(raw)),
        // Select values reference attribute choices by identifier; coercing
        // them like scalars would silently match nothing. Refuse instead.
        AttributeType::Select => return Err(NormalizeError::SelectNotSupported),
        AttributeType::Other(_) => FilterValue::Text(raw.to_string()),
    };

    Ok(value)
}

/// Boolean cast: empty and the usual falsy tokens are false, anything else
/// is true.
fn string_to_bool(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}

/// Integer cast: optional sign plus the longest leading digit run, `0` when
/// there is none. Overflowing digit runs saturate.
fn string_to_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return 0;
    }

    match s[..end].parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            if s.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            }
        }
    }
}

/// Float cast: longest leading prefix matching `[+-]?digits[.digits][e[+-]digits]`,
/// `0.0` when there is none.
fn string_to_float(raw: &str) -> f64 {
    let s = raw.trim_start();
    let end = float_prefix_len(s);
    if end == 0 {
        return 0.0;
    }
    s[..end].parse().unwrap_or(0.0)
}

fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();

    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }

    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        let mut frac_digits = 0;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
            frac_digits += 1;
        }
        if digits > 0 || frac_digits > 0 {
            end = frac;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return 0;
    }

    // An exponent only belongs to the number when digits follow it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let exp_digits_start = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > exp_digits_start {
            end = exp;
        }
    }

    end
}

/// Parse a date or datetime string into a naive timestamp.
///
/// Bare dates are taken as midnight. Parse failures are not recovered.
fn parse_date_time(raw: &str) -> Result<NaiveDateTime, NormalizeError> {
    let trimmed = raw.trim();

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.naive_utc());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = parsed.and_hms_opt(0, 0, 0) {
            return Ok(midnight);
        }
    }

    Err(NormalizeError::InvalidDate(raw.to_string()))
}

// ============================================================================
// Unit Tests
// ============================================================================
