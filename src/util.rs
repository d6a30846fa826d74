/// Numeric conversion and formatting helpers.
///
/// This module provides safe conversion from `f64` to exact integers, the
/// digit accumulation used for hexadecimal, octal and binary literals, and
/// ECMAScript-compatible number formatting used when numbers become property
/// keys or are rendered as JSON.
pub mod num;
/// String literal escape decoding.
///
/// Decodes the body of a quoted string literal, resolving backslash escapes
/// under strict mode rules and, optionally, under the narrower JSON rules.
pub mod escape;
