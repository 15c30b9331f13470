//! Deterministic sample values for primitive schema fields.
//!
//! Every provider is a pure lookup: the same type, format, and field name
//! always map to the same canned value. The only time-varying sample is the
//! `date-time` format, which stamps the current clock.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{Datelike, Local, Timelike};
use serde_json::{json, Value};

/// Generic integer example used when no override applies.
pub const DEFAULT_INTEGER: i64 = 10;
/// Generic decimal example used when no override applies.
pub const DEFAULT_NUMBER: f64 = 10.1;
/// Example used for any field name ending in `Id`.
pub const IDENTIFIER_SAMPLE: i64 = 101;
/// Value for calendar-component fields; small enough to sit inside any
/// week/day/month range check.
pub const CALENDAR_SAMPLE: i64 = 2;

/// Field names resolved to hand-picked human-readable strings.
const CANONICAL_STRINGS: &[(&str, &str)] = &[
    ("comment", "Sample comment"),
    ("userName", "Molly Abraham"),
    ("color", "red"),
    ("websiteUrl", "https://example.com"),
];

/// Field names holding calendar components.
const CALENDAR_FIELDS: &[&str] = &["week", "dayOfMonth", "dayOfWeek", "month"];

/// Sample string for a named (or anonymous) field.
pub fn sample_string(name: Option<&str>) -> String {
    match name {
        Some(name) => CANONICAL_STRINGS
            .iter()
            .find(|(canonical, _)| *canonical == name)
            .map(|(_, sample)| (*sample).to_string())
            .unwrap_or_else(|| format!("sample{}", capitalize(name))),
        None => "Sample string".to_string(),
    }
}

/// Sample for a recognized primitive `format`, if any.
pub fn format_sample(format: &str) -> Option<Value> {
    match format {
        "byte" => Some(json!(STANDARD.encode("Sample String"))),
        "int32" => Some(json!(1032)),
        "int64" => Some(json!(1064)),
        "date-time" => Some(json!(timestamp())),
        "float" | "double" => Some(json!(DEFAULT_NUMBER)),
        "binary" => Some(json!("Sample String")),
        _ => None,
    }
}

/// Whether `name` denotes a calendar component.
pub fn is_calendar_field(name: &str) -> bool {
    CALENDAR_FIELDS.contains(&name)
}

/// Whether `name` denotes an identifier.
pub fn is_identifier_field(name: &str) -> bool {
    name.ends_with("Id")
}

/// First enum literal, or a name-derived string when the literal is a
/// length-constraint placeholder leaked by schema tooling rather than a
/// real value.
pub fn enum_sample(enumeration: &[Value], name: Option<&str>) -> Option<Value> {
    let first = enumeration.first()?;
    let placeholder = first
        .as_str()
        .map_or(false, |literal| literal.contains("Length"));
    if placeholder {
        return Some(json!(sample_string(name)));
    }
    Some(first.clone())
}

/// Current local time as `YYYY-M-DTh:m:sZ`. Zero-based month, unpadded
/// fields; do not normalize to RFC 3339.
fn timestamp() -> String {
    let now = Local::now();
    format!(
        "{}-{}-{}T{}:{}:{}Z",
        now.year(),
        now.month0(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    )
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
