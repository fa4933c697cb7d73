//! Helpers for picking fields out of service query results

use serde_json::Value;
use suiteinspect_core::{Result, SuiteInspectError};

/// Interpret a query result as an array of records
pub fn as_array(value: &Value, request: &str) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items.clone()),
        other => Err(SuiteInspectError::Query(format!(
            "{request}: expected an array, got {other}"
        ))),
    }
}

/// String field of a record, empty if absent or not a string
pub fn str_field<'a>(record: &'a Value, key: &str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Boolean field of a record, defaulting when absent
pub fn bool_field(record: &Value, key: &str, default: bool) -> bool {
    record.get(key).and_then(Value::as_bool).unwrap_or(default)
}
