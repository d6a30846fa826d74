/// Ordered object map.
///
/// Defines the `Object` type used for `Value::Object`. Keys that are array
/// indices sort first in ascending order, all other keys keep insertion
/// order, and a repeated key overwrites in place.
pub mod object;
/// JSON interop.
///
/// Converts between `Value` and `serde_json::Value` in both directions.
pub mod json;

pub mod core;
