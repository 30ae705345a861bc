//! Extraction of request parameters from the raw payload map.
//!
//! The payload is the flat map a paginated-table widget posts: `search`,
//! `sort`, `order`, `offset`, `limit`, and a JSON-encoded `filter` object.
//! Everything is optional; missing fields are simply absent. Only the
//! `filter` field can fail extraction, and only by being undecodable.

use crate::error::ConfigError;
use crate::query::Value;
use miniserde::json::{Number, Object, Value as JsonValue};

/// A scalar filter value decoded from the `filter` JSON object.
///
/// The wire contract allows only scalars as member values; arrays and
/// nested objects are rejected at decode time.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FilterValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl FilterValue {
    fn from_json(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::Null => Some(Self::Null),
            JsonValue::Bool(b) => Some(Self::Bool(*b)),
            JsonValue::Number(Number::I64(i)) => Some(Self::Int(*i)),
            JsonValue::Number(Number::U64(u)) => i64::try_from(*u).ok().map(Self::Int),
            JsonValue::Number(Number::F64(f)) => Some(Self::Float(*f)),
            JsonValue::String(s) => Some(Self::Str(s.clone())),
            JsonValue::Array(_) | JsonValue::Object(_) => None,
        }
    }

    /// The raw value as a bind, with no wildcard wrapping.
    pub(crate) fn to_bind(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(i) => Value::Int(*i),
            Self::Float(f) => Value::Float(*f),
            Self::Str(s) => Value::String(s.clone()),
        }
    }
}

/// Parameters pulled out of one request payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct TableRequest {
    pub(crate) search: Option<String>,
    pub(crate) sort: Option<String>,
    pub(crate) order: Option<String>,
    pub(crate) offset: Option<u32>,
    pub(crate) limit: Option<u32>,
    pub(crate) filter: Vec<(String, FilterValue)>,
}

impl TableRequest {
    /// Extract parameters from the raw payload map.
    pub(crate) fn from_data(data: &Object) -> Result<Self, ConfigError> {
        Ok(Self {
            search: read_search(data),
            sort: read_string(data, "sort"),
            order: read_string(data, "order"),
            offset: read_index(data, "offset"),
            limit: read_index(data, "limit"),
            filter: read_filter(data)?,
        })
    }
}

/// Search text; blank after trimming counts as absent. The original
/// (untrimmed) text is what gets wrapped in wildcards later.
fn read_search(data: &Object) -> Option<String> {
    match data.get("search") {
        Some(JsonValue::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn read_string(data: &Object, key: &str) -> Option<String> {
    match data.get(key) {
        Some(JsonValue::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Non-negative integer field. Form posts arrive stringly, so numeric
/// strings are accepted alongside JSON numbers.
fn read_index(data: &Object, key: &str) -> Option<u32> {
    match data.get(key) {
        Some(JsonValue::Number(Number::U64(u))) => u32::try_from(*u).ok(),
        Some(JsonValue::Number(Number::I64(i))) => u32::try_from(*i).ok(),
        Some(JsonValue::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Decode the JSON-encoded `filter` field into an ordered column->scalar map.
///
/// Absent, null, or blank filters mean "no filters". Anything that is not a
/// JSON object of scalars is a [`ConfigError::FilterNotDecodable`].
fn read_filter(data: &Object) -> Result<Vec<(String, FilterValue)>, ConfigError> {
    let raw = match data.get("filter") {
        None | Some(JsonValue::Null) => return Ok(Vec::new()),
        Some(JsonValue::String(s)) => s,
        Some(_) => return Err(ConfigError::FilterNotDecodable),
    };
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let parsed: JsonValue =
        miniserde::json::from_str(raw).map_err(|_| ConfigError::FilterNotDecodable)?;
    let JsonValue::Object(map) = parsed else {
        return Err(ConfigError::FilterNotDecodable);
    };

    let mut filter = Vec::with_capacity(map.len());
    for (key, value) in &map {
        let value = FilterValue::from_json(value).ok_or(ConfigError::FilterNotDecodable)?;
        filter.push((key.clone(), value));
    }
    Ok(filter)
}
