//! Casting raw scalars to declared types
//!
//! [`cast`] is total: every (value, tag) pair yields a [`Value`]. Unparseable
//! input falls back to the zero value of the tag instead of failing, and null
//! input goes straight to that zero value.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value as Json;

use crate::Value;

/// Declared type of a record value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Text,
    Int,
    Float,
    Number,
    Bool,
    Timestamp,
    Date,
    DateTime,
    Array,
    Json,
    Null,
    /// Any other tag; coerces to text.
    Unknown,
}

impl TypeTag {
    /// Parse a tag name. Case-insensitive; unknown names map to [`TypeTag::Unknown`].
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "text" | "string" => Self::Text,
            "int" | "integer" => Self::Int,
            "float" | "double" => Self::Float,
            "number" => Self::Number,
            "bool" | "boolean" => Self::Bool,
            "timestamp" => Self::Timestamp,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "array" => Self::Array,
            "json" => Self::Json,
            "null" => Self::Null,
            _ => Self::Unknown,
        }
    }

    /// Whether `tag` names one of the declared types.
    pub fn is_known(tag: &str) -> bool {
        Self::parse(tag) != Self::Unknown
    }

    /// The value a null input casts to.
    pub fn zero_value(self) -> Value {
        match self {
            Self::Int | Self::Number | Self::Timestamp => Value::Integer(0),
            Self::Float => Value::Float(0.0),
            Self::Bool => Value::Boolean(false),
            Self::Array | Self::Json => Value::Array(Vec::new()),
            Self::Date | Self::DateTime | Self::Null => Value::Null,
            Self::Text | Self::Unknown => Value::String(String::new()),
        }
    }
}

/// Cast `raw` to the type named by `tag`.
pub fn cast(raw: &Json, tag: &str) -> Value {
    cast_as(raw, TypeTag::parse(tag))
}

/// Cast `raw` to `tag`.
pub fn cast_as(raw: &Json, tag: TypeTag) -> Value {
    if raw.is_null() {
        return tag.zero_value();
    }

    match tag {
        TypeTag::Int => Value::Integer(to_number(raw).map(Numeric::truncate).unwrap_or(0)),
        TypeTag::Float => Value::Float(to_number(raw).map(Numeric::as_f64).unwrap_or(0.0)),
        TypeTag::Number => match to_number(raw) {
            Some(Numeric::Int(i)) => Value::Integer(i),
            Some(Numeric::Float(f)) => Value::Float(f),
            None => Value::Integer(0),
        },
        TypeTag::Bool => Value::Boolean(to_bool(raw)),
        TypeTag::Timestamp => Value::Integer(to_datetime(raw).map(|dt| dt.timestamp()).unwrap_or(0)),
        TypeTag::Date => format_datetime(raw, "%Y-%m-%d"),
        TypeTag::DateTime => format_datetime(raw, "%Y-%m-%d %H:%M:%S"),
        TypeTag::Array | TypeTag::Json => Value::Array(to_array(raw)),
        TypeTag::Null => Value::Null,
        TypeTag::Text | TypeTag::Unknown => Value::String(to_text(raw)),
    }
}

/// Permissive truthiness used for `bool` casts and `enabled` flags.
pub fn is_truthy(raw: &Json) -> bool {
    to_bool(raw)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    fn truncate(self) -> i64 {
        match self {
            Self::Int(i) => i,
            Self::Float(f) => f as i64,
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }
}

fn parse_numeric(text: &str) -> Option<Numeric> {
    let text = text.trim();
    if let Ok(i) = text.parse::<i64>() {
        return Some(Numeric::Int(i));
    }
    text.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(Numeric::Float)
}

fn to_number(raw: &Json) -> Option<Numeric> {
    match raw {
        Json::Bool(b) => Some(Numeric::Int(i64::from(*b))),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Some(Numeric::Int(i)),
            None => n.as_f64().map(Numeric::Float),
        },
        Json::String(s) => parse_numeric(s),
        _ => None,
    }
}

fn to_bool(raw: &Json) -> bool {
    match raw {
        Json::Bool(b) => *b,
        Json::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Json::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes" | "on"
        ),
        _ => false,
    }
}

fn to_text(raw: &Json) -> String {
    match raw {
        Json::String(s) => s.clone(),
        Json::Null => String::new(),
        Json::Bool(b) => b.to_string(),
        Json::Number(n) => n.to_string(),
        Json::Array(_) | Json::Object(_) => raw.to_string(),
    }
}

fn to_array(raw: &Json) -> Vec<Json> {
    match raw {
        Json::Array(items) => items.clone(),
        Json::String(s) => match serde_json::from_str::<Json>(s) {
            Ok(Json::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y", "%m/%d/%Y"];

/// Parse an epoch number or a date string. Naive times are taken as UTC.
fn to_datetime(raw: &Json) -> Option<DateTime<Utc>> {
    match raw {
        Json::Number(_) => to_number(raw).and_then(|n| DateTime::from_timestamp(n.truncate(), 0)),
        Json::String(s) => {
            let s = s.trim();
            if let Ok(secs) = s.parse::<i64>() {
                return DateTime::from_timestamp(secs, 0);
            }
            parse_date_string(s)
        }
        _ => None,
    }
}

fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    for format in NAIVE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|naive| Utc.from_utc_datetime(&naive));
        }
    }
    None
}

fn format_datetime(raw: &Json, format: &str) -> Value {
    match to_datetime(raw) {
        Some(dt) => Value::String(dt.format(format).to_string()),
        None => Value::Null,
    }
}
