// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document parser adapter.
//!
//! This module provides the parser that decodes YAML values documents with
//! `serde_yaml`. Since JSON is a subset of YAML, JSON documents decode as well.

use crate::domain::{BoxError, RawNode};
use crate::ports::DocumentParser;

/// YAML parser implementation.
///
/// Merge keys (`<<: *anchor`) are resolved into the enclosing mapping. Otherwise
/// the decoded tree is returned as-is: mapping keys keep whatever type YAML gave
/// them, and normalization happens in the loader.
///
/// # Examples
///
/// ```rust
/// use hexvalues::adapters::YamlParser;
/// use hexvalues::ports::DocumentParser;
///
/// let parser = YamlParser::new();
/// let node = parser.parse("database:\n  host: localhost\n  port: 5432").unwrap();
/// assert_eq!(node["database"]["host"].as_str(), Some("localhost"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }
}

impl DocumentParser for YamlParser {
    fn name(&self) -> &str {
        "yaml"
    }

    fn parse(&self, content: &str) -> Result<RawNode, BoxError> {
        let mut node: RawNode = serde_yaml::from_str(content)?;
        node.apply_merge()?;
        Ok(node)
    }
}
