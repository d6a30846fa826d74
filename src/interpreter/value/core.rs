use std::fmt;

use crate::{interpreter::value::object::Object, util::num::format_number};

/// Represents a value produced by evaluating a literal expression.
///
/// The tree mirrors the literal text: objects map to [`Object`], arrays to
/// vectors, and scalars to their natural Rust types. Numbers are always
/// doubles, as in the literal grammar.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// `null`, and array holes.
    #[default]
    Null,
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A number (double precision floating-point).
    Number(f64),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Self>),
    /// A string-keyed mapping.
    Object(Object),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns the name of the value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Whether the value is `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the number, if this is a number.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean, if this is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the map, if this is an object.
    #[must_use]
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Looks up `key` if this is an object.
    ///
    /// # Example
    /// ```
    /// use isolit::{Value, parse_expression};
    ///
    /// let value = parse_expression("{a: 1}").unwrap();
    /// assert_eq!(value.get("a"), Some(&Value::from(1)));
    /// assert_eq!(value.get("b"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_object().and_then(|object| object.get(key))
    }

    /// Converts the value to the string used when it appears as a computed
    /// property key.
    ///
    /// Strings are used as they are, numbers are formatted canonically,
    /// arrays join their elements with `,` (with `null` as the empty string),
    /// and objects become `[object Object]`.
    ///
    /// # Example
    /// ```
    /// use isolit::Value;
    ///
    /// assert_eq!(Value::from(1.5).to_property_key(), "1.5");
    /// assert_eq!(Value::Null.to_property_key(), "null");
    /// assert_eq!(Value::from(vec![Value::from(1), Value::Null, Value::from("a")]).to_property_key(),
    ///            "1,,a");
    /// ```
    #[must_use]
    pub fn to_property_key(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => format_number(*n),
            Self::String(s) => s.clone(),
            Self::Array(items) => items.iter()
                                       .map(|item| {
                                           if item.is_null() {
                                               String::new()
                                           } else {
                                               item.to_property_key()
                                           }
                                       })
                                       .collect::<Vec<_>>()
                                       .join(","),
            Self::Object(_) => "[object Object]".to_string(),
        }
    }
}

/// Renders the value as compact JSON text.
///
/// Numbers use canonical number formatting, and non-finite numbers render as
/// `null`, matching `JSON.stringify`.
///
/// # Example
/// ```
/// use isolit::parse_expression;
///
/// let value = parse_expression("{b: [1, 2.50, 'x'], a: null, 1: 1e21}").unwrap();
/// assert_eq!(value.to_string(), r#"{"1":1e+21,"b":[1,2.5,"x"],"a":null}"#);
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) if n.is_finite() => write!(f, "{}", format_number(*n)),
            Self::Number(_) => write!(f, "null"),
            Self::String(s) => write_json_string(f, s),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            },
            Self::Object(object) => {
                write!(f, "{{")?;
                for (i, (key, value)) in object.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write_json_string(f, key)?;
                    write!(f, ":{value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}

fn write_json_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
    f.write_str(&quoted)
}
