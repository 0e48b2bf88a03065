// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document store trait definition.
//!
//! This module defines the `DocumentStore` trait, the port through which the loader
//! checks that a document exists and reads its text.

use std::io;
use std::path::Path;

/// A trait for locating and reading documents.
///
/// The loader calls [`exists`](DocumentStore::exists) first so that a missing
/// document is reported as such, and only then [`read`](DocumentStore::read).
/// A single attempt is made; stores should not retry.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one loader can serve concurrent callers.
///
/// # Examples
///
/// ```rust
/// use hexvalues::ports::DocumentStore;
/// use std::io;
/// use std::path::Path;
///
/// struct FixedStore;
///
/// impl DocumentStore for FixedStore {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn exists(&self, path: &Path) -> bool {
///         path == Path::new("values.yaml")
///     }
///
///     fn read(&self, _path: &Path) -> io::Result<String> {
///         Ok("replicas: 1".to_string())
///     }
/// }
///
/// let store = FixedStore;
/// assert!(store.exists(Path::new("values.yaml")));
/// assert!(!store.exists(Path::new("other.yaml")));
/// ```
pub trait DocumentStore: Send + Sync {
    /// Returns a short name used in log messages.
    fn name(&self) -> &str;

    /// Returns `true` unless the document at `path` is definitely absent.
    ///
    /// Stores that cannot tell (for example when permission is denied) should
    /// return `true` and let [`read`](DocumentStore::read) report the cause.
    fn exists(&self, path: &Path) -> bool;

    /// Reads the full text of the document at `path`.
    fn read(&self, path: &Path) -> io::Result<String>;
}
