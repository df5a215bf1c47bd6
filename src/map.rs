//! Ordered key-value pairs for mapping values.
//!
//! [`Map`] keeps entries in the order they were inserted, which is the order
//! the source container iterated them. Keys are arbitrary [`Value`]s and may
//! repeat, so multimap-like sources render every entry.
//!
//! ## Examples
//!
//! ```rust
//! use serde_pyrepr::{Map, Value};
//!
//! let mut map = Map::new();
//! map.insert(Value::from("name"), Value::from("Alice"));
//! map.insert(Value::from("age"), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get(&Value::from("name")).and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::Value;

/// An insertion-ordered list of `(key, value)` pairs.
///
/// # Examples
///
/// ```rust
/// use serde_pyrepr::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert(Value::from(1), Value::from("one"));
/// map.insert(Value::from(1), Value::from("uno"));
///
/// // Duplicate keys are kept, lookups return the first
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get(&Value::from(1)).and_then(|v| v.as_str()), Some("one"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Map(Vec<(Value, Value)>);

impl Map {
    /// Creates an empty `Map`.
    #[must_use]
    pub fn new() -> Self {
        Map(Vec::new())
    }

    /// Creates an empty `Map` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Map(Vec::with_capacity(capacity))
    }

    /// Appends an entry. Existing entries with an equal key are kept.
    pub fn insert(&mut self, key: Value, value: Value) {
        self.0.push((key, value));
    }

    /// Returns the value of the first entry whose key equals `key`.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns every value stored under `key`, in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pyrepr::{Map, Value};
    ///
    /// let map: Map = vec![
    ///     (Value::from("k"), Value::from(1)),
    ///     (Value::from("x"), Value::from(2)),
    ///     (Value::from("k"), Value::from(3)),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let all: Vec<_> = map.get_all(&Value::from("k")).filter_map(Value::as_i64).collect();
    /// assert_eq!(all, vec![1, 3]);
    /// ```
    pub fn get_all<'a, 'k>(&'a self, key: &'k Value) -> impl Iterator<Item = &'a Value> + 'k
    where
        'a: 'k,
    {
        self.0
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.0.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.iter().map(|(_, v)| v)
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, (Value, Value)> {
        self.0.iter()
    }
}

impl IntoIterator for Map {
    type Item = (Value, Value);
    type IntoIter = std::vec::IntoIter<(Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = &'a (Value, Value);
    type IntoIter = std::slice::Iter<'a, (Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(Value, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
        Map(Vec::from_iter(iter))
    }
}

impl Extend<(Value, Value)> for Map {
    fn extend<T: IntoIterator<Item = (Value, Value)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut map = Map::new();
        for key in ["zeta", "alpha", "mid"] {
            map.insert(Value::from(key), Value::from(key.len() as i64));
        }
        let keys: Vec<_> = map.keys().filter_map(Value::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_extend_and_lookup() {
        let mut map = Map::with_capacity(2);
        map.extend(vec![(Value::from(1), Value::from("a"))]);
        assert_eq!(map.get(&Value::from(1)), Some(&Value::from("a")));
        assert_eq!(map.get(&Value::from(2)), None);
        assert!(!map.is_empty());
    }

    #[test]
    fn test_get_all_with_temporary_key() {
        let map: Map = vec![
            (Value::from(1), Value::from("a")),
            (Value::from(2), Value::from("b")),
            (Value::from(1), Value::from("c")),
        ]
        .into_iter()
        .collect();

        let all: Vec<&str> = map.get_all(&Value::from(1)).filter_map(Value::as_str).collect();
        assert_eq!(all, vec!["a", "c"]);
    }
}
