// SPDX-License-Identifier: MIT OR Apache-2.0

//! Substitution values and the table that holds them.
//!
//! A [`SubstitutionTable`] maps placeholder names to [`Replacement`]s. Replacements
//! keep their scalar type until substitution time, when they are rendered with their
//! default textual form.

use std::collections::hash_map::{HashMap, Iter};
use std::fmt;

/// A value that can stand in for a `${name}` placeholder.
///
/// # Examples
///
/// ```
/// use hexvalues::domain::replacement::Replacement;
///
/// assert_eq!(Replacement::from("10.0.0.5").to_string(), "10.0.0.5");
/// assert_eq!(Replacement::from(8080).to_string(), "8080");
/// assert_eq!(Replacement::from(3.0).to_string(), "3");
/// assert_eq!(Replacement::from(true).to_string(), "true");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Replacement {
    /// Used as-is.
    String(String),
    /// Rendered in decimal.
    Int(i64),
    /// Rendered in its shortest round-trip form, always in plain decimal:
    /// `1e21` renders as `1000000000000000000000` and `1e-6` as `0.000001`,
    /// never in exponent notation.
    Float(f64),
    /// Rendered as `true` or `false`.
    Bool(bool),
}

impl fmt::Display for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replacement::String(s) => f.write_str(s),
            Replacement::Int(i) => write!(f, "{}", i),
            Replacement::Float(x) => write!(f, "{}", x),
            Replacement::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<String> for Replacement {
    fn from(s: String) -> Self {
        Replacement::String(s)
    }
}

impl From<&str> for Replacement {
    fn from(s: &str) -> Self {
        Replacement::String(s.to_string())
    }
}

impl From<i64> for Replacement {
    fn from(i: i64) -> Self {
        Replacement::Int(i)
    }
}

impl From<i32> for Replacement {
    fn from(i: i32) -> Self {
        Replacement::Int(i64::from(i))
    }
}

impl From<u32> for Replacement {
    fn from(i: u32) -> Self {
        Replacement::Int(i64::from(i))
    }
}

impl From<f64> for Replacement {
    fn from(x: f64) -> Self {
        Replacement::Float(x)
    }
}

impl From<bool> for Replacement {
    fn from(b: bool) -> Self {
        Replacement::Bool(b)
    }
}

/// A flat mapping from placeholder name to replacement value.
///
/// The table is supplied by the caller for each substitution pass and is only
/// borrowed by the engine.
///
/// # Examples
///
/// ```
/// use hexvalues::domain::replacement::SubstitutionTable;
///
/// let table = SubstitutionTable::new()
///     .with("hostName", "mlrun.example.com")
///     .with("replicas", 3);
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.get("replicas").unwrap().to_string(), "3");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubstitutionTable {
    entries: HashMap<String, Replacement>,
}

impl SubstitutionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry and returns the table, for chained construction.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Replacement>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts an entry, returning the value previously stored under `name`.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Replacement>,
    ) -> Option<Replacement> {
        self.entries.insert(name.into(), value.into())
    }

    /// Looks up the replacement for a placeholder name. Matching is exact.
    pub fn get(&self, name: &str) -> Option<&Replacement> {
        self.entries.get(name)
    }

    /// Returns `true` if the table has an entry for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Copies every entry of `other` into this table, overwriting on conflict.
    pub fn merge(&mut self, other: SubstitutionTable) {
        self.entries.extend(other.entries);
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in arbitrary order.
    pub fn iter(&self) -> Iter<'_, String, Replacement> {
        self.entries.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for SubstitutionTable
where
    K: Into<String>,
    V: Into<Replacement>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SubstitutionTable {
    type Item = (&'a String, &'a Replacement);
    type IntoIter = Iter<'a, String, Replacement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacement_display() {
        assert_eq!(Replacement::from("as-is").to_string(), "as-is");
        assert_eq!(Replacement::from(-12i64).to_string(), "-12");
        assert_eq!(Replacement::from(0.25).to_string(), "0.25");
        assert_eq!(Replacement::from(false).to_string(), "false");
    }

    #[test]
    fn test_float_display_never_uses_exponent() {
        assert_eq!(
            Replacement::from(1e21).to_string(),
            "1000000000000000000000"
        );
        assert_eq!(Replacement::from(1e-6).to_string(), "0.000001");
    }

    #[test]
    fn test_table_insert_and_get() {
        let mut table = SubstitutionTable::new();
        assert!(table.is_empty());

        assert_eq!(table.insert("dbHost", "10.0.0.5"), None);
        assert_eq!(
            table.insert("dbHost", "10.0.0.6"),
            Some(Replacement::from("10.0.0.5"))
        );
        assert_eq!(table.get("dbHost"), Some(&Replacement::from("10.0.0.6")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_table_lookup_is_case_sensitive() {
        let table = SubstitutionTable::new().with("dbHost", "x");
        assert!(table.contains("dbHost"));
        assert!(!table.contains("dbhost"));
        assert!(!table.contains("db"));
    }

    #[test]
    fn test_table_merge_overwrites() {
        let mut base = SubstitutionTable::new().with("a", "1").with("b", "2");
        let overrides = SubstitutionTable::new().with("b", "two").with("c", true);

        base.merge(overrides);

        assert_eq!(base.len(), 3);
        assert_eq!(base.get("a").unwrap().to_string(), "1");
        assert_eq!(base.get("b").unwrap().to_string(), "two");
        assert_eq!(base.get("c").unwrap().to_string(), "true");
    }

    #[test]
    fn test_table_from_iterator() {
        let table: SubstitutionTable = vec![("x", 1), ("y", 2)].into_iter().collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("y"), Some(&Replacement::Int(2)));

        let names: Vec<&String> = (&table).into_iter().map(|(k, _)| k).collect();
        assert_eq!(names.len(), 2);
    }
}
