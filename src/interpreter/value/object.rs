use indexmap::{IndexMap, map::Iter};

use crate::interpreter::value::core::Value;

/// A string-keyed map with object-literal key order.
///
/// Iteration yields array-index keys (`"0"`, `"1"`, ... up to `"4294967294"`)
/// first in ascending numeric order, then all other keys in insertion order.
/// Inserting an existing key replaces its value without moving it.
///
/// # Example
/// ```
/// use isolit::interpreter::value::{core::Value, object::Object};
///
/// let mut object = Object::new();
/// object.insert("b".to_string(), Value::from(1));
/// object.insert("2".to_string(), Value::from(2));
/// object.insert("a".to_string(), Value::from(3));
/// object.insert("0".to_string(), Value::from(4));
/// object.insert("b".to_string(), Value::from(5));
///
/// let keys: Vec<&str> = object.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["0", "2", "b", "a"]);
/// assert_eq!(object.get("b"), Some(&Value::from(5)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    entries: IndexMap<String, Value>,
}

impl Object {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a property, returning the previous value if the key existed.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        if let Some(slot) = self.entries.get_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }

        if let Some(index) = array_index(&key) {
            let position = self.entries
                               .keys()
                               .take_while(|k| array_index(k).is_some_and(|i| i < index))
                               .count();
            self.entries.shift_insert(position, key, value);
        } else {
            self.entries.insert(key, value);
        }
        None
    }

    /// Looks up a property by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Whether the object has a property named `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the object has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the keys in property order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Iterates over `(key, value)` pairs in property order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type IntoIter = Iter<'a, String, Value>;
    type Item = (&'a String, &'a Value);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut object = Self::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

/// Returns the numeric value of `key` if it is a canonical array index.
///
/// Canonical means no sign, no leading zeros (except `"0"` itself), and a
/// value below `2^32 - 1`.
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|&i| i != u32::MAX)
}
