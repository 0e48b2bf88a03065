// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic value tree handed to the downstream consumer.
//!
//! [`GenericValue`] is the shape a deployment layer passes on as, for example, the
//! `values` of a Helm release: nested string-keyed mappings, sequences, and typed
//! scalars. Anything that is not one of those scalars travels through untouched as
//! [`GenericValue::Opaque`].

use crate::domain::document::{Document, RawNode};
use serde::Serialize;
use std::collections::BTreeMap;

/// A generic nested value.
///
/// Serializes untagged, so a `GenericValue` renders as plain JSON or YAML.
///
/// # Examples
///
/// ```
/// use hexvalues::domain::document::Document;
/// use hexvalues::domain::generic_value::{to_generic_value, GenericValue};
///
/// let value = to_generic_value(Document::Sequence(vec![
///     Document::Int(1),
///     Document::String("two".to_string()),
/// ]));
///
/// assert_eq!(value.as_sequence().map(|s| s.len()), Some(2));
/// assert_eq!(value.lookup("1").and_then(GenericValue::as_str), Some("two"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GenericValue {
    /// A string-keyed mapping.
    Mapping(BTreeMap<String, GenericValue>),
    /// An ordered sequence.
    Sequence(Vec<GenericValue>),
    /// A string.
    String(String),
    /// An integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// Any other decoded value, passed through unchanged.
    Opaque(RawNode),
}

/// Converts a document into a generic value. Never fails.
pub fn to_generic_value(doc: Document) -> GenericValue {
    match doc {
        Document::Mapping(map) => GenericValue::Mapping(
            map.into_iter()
                .map(|(key, value)| (key, to_generic_value(value)))
                .collect(),
        ),
        Document::Sequence(seq) => {
            GenericValue::Sequence(seq.into_iter().map(to_generic_value).collect())
        }
        Document::String(s) => GenericValue::String(s),
        Document::Int(i) => GenericValue::Int(i),
        Document::Float(f) => GenericValue::Float(f),
        Document::Bool(b) => GenericValue::Bool(b),
        Document::Other(raw) => GenericValue::Opaque(raw),
    }
}

impl From<Document> for GenericValue {
    fn from(doc: Document) -> Self {
        to_generic_value(doc)
    }
}

impl GenericValue {
    /// Returns the entries if this is a mapping.
    pub fn as_mapping(&self) -> Option<&BTreeMap<String, GenericValue>> {
        match self {
            GenericValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the items if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[GenericValue]> {
        match self {
            GenericValue::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// Returns the string if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            GenericValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GenericValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the number if this is a float or an integer.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GenericValue::Float(f) => Some(*f),
            GenericValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            GenericValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Looks up `key` if this is a mapping.
    pub fn get(&self, key: &str) -> Option<&GenericValue> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Follows a dot-separated path such as `ingress.hosts.0.host`.
    ///
    /// Segments select mapping keys; numeric segments also index into sequences.
    /// An empty path returns `self`.
    pub fn lookup(&self, path: &str) -> Option<&GenericValue> {
        if path.is_empty() {
            return Some(self);
        }

        path.split('.').try_fold(self, |node, segment| match node {
            GenericValue::Mapping(map) => map.get(segment),
            GenericValue::Sequence(seq) => segment.parse::<usize>().ok().and_then(|i| seq.get(i)),
            _ => None,
        })
    }

    /// Renders the value as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
