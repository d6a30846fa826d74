use serde_json::{Map, Number};

use crate::{
    interpreter::value::{core::Value, object::Object},
    util::num::f64_to_safe_i64,
};

/// Converts to a `serde_json` value.
///
/// Integral numbers within the safe integer range become JSON integers,
/// other finite numbers become JSON floats, and non-finite numbers become
/// `null`.
///
/// # Example
/// ```
/// use isolit::parse_expression;
/// use serde_json::json;
///
/// let value = parse_expression("{a: [1, 2.5, 1e400], b: 'x'}").unwrap();
/// assert_eq!(serde_json::Value::from(&value), json!({"a": [1, 2.5, null], "b": "x"}));
/// ```
impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => match f64_to_safe_i64(*n) {
                Some(i) => Self::Number(Number::from(i)),
                None => Number::from_f64(*n).map_or(Self::Null, Self::Number),
            },
            Value::String(s) => Self::String(s.clone()),
            Value::Array(items) => Self::Array(items.iter().map(Self::from).collect()),
            Value::Object(object) => {
                let map: Map<String, Self> =
                    object.iter()
                          .map(|(key, value)| (key.clone(), Self::from(value)))
                          .collect();
                Self::Object(map)
            },
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

/// Converts from a `serde_json` value.
///
/// All numbers become doubles. Object keys are re-inserted, so they take the
/// same order they would have in an object literal.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter()
                                .map(|(key, value)| (key, Self::from(value)))
                                .collect::<Object>())
            },
        }
    }
}
