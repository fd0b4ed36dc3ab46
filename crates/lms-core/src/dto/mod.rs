//! Remote API Payloads
//!
//! The course/student API answers with loosely-typed JSON envelopes.
//! Payloads are decoded into DTOs with explicit required/optional fields and
//! then converted into domain types; entries that fail to decode are dropped
//! with a warning instead of leaking into the UI state.

mod course;
mod student;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::DomainResult;

pub use course::{CourseDto, ModuleDto, ContentItemDto, decode_courses, decode_course_options};
pub use student::{StudentDto, EnrolledCourseDto, decode_students};

/// Response envelope shared by the list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub users: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiEnvelope {
    pub fn parse(body: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Decode every array element that fits `T`, dropping the rest
fn decode_each<T: DeserializeOwned>(list: Option<Value>, what: &str) -> Vec<T> {
    let items = match list {
        Some(Value::Array(items)) => items,
        Some(other) => {
            warn!("[API] expected a {} array, got {}", what, kind(&other));
            return Vec::new();
        }
        None => return Vec::new(),
    };
    let total = items.len();
    let decoded: Vec<T> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(dto) => Some(dto),
            Err(e) => {
                warn!("[API] dropping malformed {}: {}", what, e);
                None
            }
        })
        .collect();
    if decoded.len() != total {
        warn!("[API] kept {} of {} {} entries", decoded.len(), total, what);
    }
    decoded
}

/// JavaScript-style truthiness for flags sent as bool, number or string
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthy() {
        assert!(truthy(&json!(true)));
        assert!(truthy(&json!(1)));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!("")));
        assert!(!truthy(&Value::Null));
    }

    #[test]
    fn test_envelope_defaults() {
        let env = ApiEnvelope::parse("{}").unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert!(ApiEnvelope::parse("not json").is_err());
    }
}
