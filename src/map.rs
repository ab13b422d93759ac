//! The ordered key/value container behind TOML tables.
//!
//! TOML files are edited by humans, so entry order matters: a serialized
//! document should list keys in the order the tree exposes them. [`Table`]
//! wraps [`IndexMap`] to get insertion-ordered iteration with map lookups.
//!
//! ## Examples
//!
//! ```rust
//! use toml_fmt::{Table, Value};
//!
//! let mut table = Table::new();
//! table.insert("name".to_string(), Value::string("Alice"));
//! table.insert("age".to_string(), Value::integer(30));
//!
//! let keys: Vec<_> = table.keys().cloned().collect();
//! assert_eq!(keys, vec!["name", "age"]);
//! ```

use crate::Value;
use indexmap::IndexMap;

/// An insertion-ordered map of string keys to TOML values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table(IndexMap<String, Value>);

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Table(IndexMap::new())
    }

    /// Creates an empty table with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Table(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key/value pair, returning the previous value for the key
    /// if there was one. An existing key keeps its position.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value for `key`, if present.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Removes `key` and returns its value, preserving the order of the
    /// remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns `true` if the table has an entry for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Iterates over entries in insertion order, with mutable values.
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.0.iter_mut()
    }
}

impl IntoIterator for Table {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Table {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Table(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, Value)> for Table {
    fn extend<T: IntoIterator<Item = (String, Value)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_follows_insertion_order() {
        let mut table = Table::new();
        table.insert("z".to_string(), Value::integer(1));
        table.insert("a".to_string(), Value::integer(2));
        table.insert("m".to_string(), Value::integer(3));

        let keys: Vec<_> = table.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn reinsert_keeps_position() {
        let mut table = Table::new();
        table.insert("a".to_string(), Value::integer(1));
        table.insert("b".to_string(), Value::integer(2));
        let old = table.insert("a".to_string(), Value::integer(3));

        assert_eq!(old, Some(Value::integer(1)));
        let keys: Vec<_> = table.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn remove_preserves_order_of_rest() {
        let mut table: Table = [
            ("a".to_string(), Value::integer(1)),
            ("b".to_string(), Value::integer(2)),
            ("c".to_string(), Value::integer(3)),
        ]
        .into_iter()
        .collect();

        assert!(table.remove("b").is_some());
        let keys: Vec<_> = table.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }
}
