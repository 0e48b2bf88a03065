// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured document tree and key normalization.
//!
//! A decoder hands back a [`RawNode`], whose mappings may be keyed by any node:
//! YAML happily accepts `1: one`, `true: yes` or `~: nothing`. [`normalize`]
//! turns that into a [`Document`], a tree whose mappings are keyed by strings only.

use serde_yaml::{Mapping, Number, Value};
use std::collections::BTreeMap;

/// The direct output of a structured-document decoder.
pub type RawNode = Value;

/// A decoded values document with string-only mapping keys.
///
/// Scalars that are not strings, `i64` integers, floats or booleans (null, tagged
/// values, integers above `i64::MAX`) are kept as [`Document::Other`].
///
/// # Examples
///
/// ```
/// use hexvalues::domain::document::{normalize, Document};
///
/// let raw = serde_yaml::from_str("replicas: 3\n1: dropped").unwrap();
/// let doc = normalize(raw);
///
/// assert_eq!(doc.get("replicas"), Some(&Document::Int(3)));
/// assert_eq!(doc.as_mapping().map(|m| m.len()), Some(1));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Document {
    /// A string-keyed mapping.
    Mapping(BTreeMap<String, Document>),
    /// An ordered sequence.
    Sequence(Vec<Document>),
    /// A string scalar.
    String(String),
    /// An integer scalar.
    Int(i64),
    /// A floating-point scalar.
    Float(f64),
    /// A boolean scalar.
    Bool(bool),
    /// Any other scalar, kept exactly as decoded.
    Other(RawNode),
}

impl Document {
    /// Returns the entries if this node is a mapping.
    pub fn as_mapping(&self) -> Option<&BTreeMap<String, Document>> {
        match self {
            Document::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the string if this node is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s),
            _ => None,
        }
    }

    /// Looks up `key` if this node is a mapping.
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Returns `true` if this node is a mapping.
    pub fn is_mapping(&self) -> bool {
        matches!(self, Document::Mapping(_))
    }
}

/// Normalizes a decoded tree so that every mapping is keyed by strings.
///
/// Entries whose key is not a string are dropped; this never fails. Sequences keep
/// their order and length, scalars keep their value.
pub fn normalize(raw: RawNode) -> Document {
    match raw {
        Value::Mapping(map) => Document::Mapping(
            map.into_iter()
                .filter_map(|(key, value)| match key {
                    Value::String(key) => Some((key, normalize(value))),
                    other => {
                        tracing::trace!("Dropping mapping entry with non-string key {:?}", other);
                        None
                    }
                })
                .collect(),
        ),
        Value::Sequence(seq) => Document::Sequence(seq.into_iter().map(normalize).collect()),
        Value::String(s) => Document::String(s),
        Value::Bool(b) => Document::Bool(b),
        Value::Number(n) => normalize_number(n),
        other => Document::Other(other),
    }
}

fn normalize_number(n: Number) -> Document {
    if let Some(i) = n.as_i64() {
        Document::Int(i)
    } else if let Some(f) = n.as_f64().filter(|_| n.is_f64()) {
        Document::Float(f)
    } else {
        Document::Other(Value::Number(n))
    }
}

impl From<Document> for RawNode {
    fn from(doc: Document) -> Self {
        match doc {
            Document::Mapping(map) => Value::Mapping(
                map.into_iter()
                    .map(|(key, value)| (Value::String(key), RawNode::from(value)))
                    .collect::<Mapping>(),
            ),
            Document::Sequence(seq) => {
                Value::Sequence(seq.into_iter().map(RawNode::from).collect())
            }
            Document::String(s) => Value::String(s),
            Document::Int(i) => Value::Number(i.into()),
            Document::Float(f) => Value::Number(f.into()),
            Document::Bool(b) => Value::Bool(b),
            Document::Other(raw) => raw,
        }
    }
}
