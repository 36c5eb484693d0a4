//! Normalizes raw feed values into display strings.
//!
//! The feed is inconsistent about shapes: the same field can arrive as a
//! bare scalar or as a `{value, unit}` / `{min, max}` record depending on
//! the day. Every rule here tolerates both, and unknown keys still render
//! something, so a single odd field can never take down the whole card.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use crate::fields::FieldKind;

/// Render one field for display. Total and pure: any key paired with any
/// value produces a string.
///
/// `None` models a field that was looked up but absent, mirroring the
/// upstream distinction between an explicit null and an undefined value.
pub fn format_field(key: &str, value: Option<&Value>) -> String {
    let value = match value {
        None => return "undefined".to_owned(),
        Some(Value::Null) => return "null".to_owned(),
        Some(v) => v,
    };

    match FieldKind::of(key) {
        FieldKind::Date => format_date(value),
        FieldKind::Temperature => format_temperature(value),
        FieldKind::ForecastTemperature => format_temperature(value),
        FieldKind::HumidityRange => format_humidity_range(value),
        FieldKind::SingleSidedRh => format_single_sided_rh(value),
        FieldKind::Other => format_default(value),
    }
}

/// Dates arrive as 8-digit `YYYYMMDD` strings; anything else parseable as a
/// date renders locale-style, and unparseable strings pass through raw.
fn format_date(value: &Value) -> String {
    let Value::String(s) = value else {
        return scalar_to_string(value);
    };
    if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
        return format!("{}-{}-{}", &s[0..4], &s[4..6], &s[6..8]);
    }
    match parse_loose_date(s) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => s.clone(),
    }
}

fn parse_loose_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    None
}

/// `{value, unit}` → `20°C`; `{value}` → `20`; bare scalars verbatim.
fn format_temperature(value: &Value) -> String {
    let Value::Object(record) = value else {
        return scalar_to_string(value);
    };
    match record.get("value") {
        Some(v) => match present_unit(record) {
            Some(unit) => format!("{}°{}", scalar_to_string(v), unit),
            None => scalar_to_string(v),
        },
        None => scalar_to_string(value),
    }
}

fn present_unit(record: &Map<String, Value>) -> Option<String> {
    match record.get("unit") {
        Some(Value::Null) | None => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(u) => Some(scalar_to_string(u)),
    }
}

/// `{min, max}` → `60% - 80%`. The fallback deliberately appends no `%`,
/// unlike the one-sided RH fields.
fn format_humidity_range(value: &Value) -> String {
    if let Value::Object(record) = value {
        if let (Some(min), Some(max)) = (record.get("min"), record.get("max")) {
            return format!("{}% - {}%", scalar_to_string(min), scalar_to_string(max));
        }
    }
    scalar_to_string(value)
}

/// One-sided relative humidity always carries its `%`, record or scalar.
fn format_single_sided_rh(value: &Value) -> String {
    match value {
        Value::Object(record) => match record.get("value") {
            Some(v) => format!("{}%", scalar_to_string(v)),
            None => scalar_to_string(value),
        },
        Value::String(_) | Value::Number(_) => format!("{}%", scalar_to_string(value)),
        _ => scalar_to_string(value),
    }
}

/// Unknown keys: structured values keep their canonical serialized form
/// (field order preserved), scalars stringify directly.
fn format_default(value: &Value) -> String {
    match value {
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        _ => scalar_to_string(value),
    }
}

/// Strings render unquoted; everything else uses its JSON form.
fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        _ => value.to_string(),
    }
}
