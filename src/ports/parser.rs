// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document parser trait definition.
//!
//! This module defines the `DocumentParser` trait, the port through which the loader
//! decodes raw document text into a [`RawNode`] tree.

use crate::domain::{BoxError, RawNode};

/// A trait for decoding structured documents.
///
/// Implementations turn the text of a document into the decoder's generic tree.
/// Mapping keys in the returned tree may be of any kind; the loader normalizes them
/// afterwards, so parsers should not drop or rewrite entries themselves.
///
/// # Examples
///
/// ```rust
/// use hexvalues::domain::{BoxError, RawNode};
/// use hexvalues::ports::DocumentParser;
///
/// struct SingleKeyParser;
///
/// impl DocumentParser for SingleKeyParser {
///     fn name(&self) -> &str {
///         "single-key"
///     }
///
///     fn parse(&self, content: &str) -> Result<RawNode, BoxError> {
///         let mut map = serde_yaml::Mapping::new();
///         map.insert("content".into(), content.into());
///         Ok(RawNode::Mapping(map))
///     }
/// }
///
/// let node = SingleKeyParser.parse("hello").unwrap();
/// assert_eq!(node["content"], RawNode::from("hello"));
/// ```
pub trait DocumentParser: Send + Sync {
    /// Returns a short name used in log messages.
    fn name(&self) -> &str;

    /// Decodes `content` into a raw tree.
    ///
    /// # Returns
    ///
    /// * `Ok(RawNode)` - The decoded tree
    /// * `Err(BoxError)` - The content is not a well-formed document
    fn parse(&self, content: &str) -> Result<RawNode, BoxError>;
}
