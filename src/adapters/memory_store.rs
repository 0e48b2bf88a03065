// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory document store adapter.

use crate::ports::DocumentStore;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Document store backed by a map of path to document text.
///
/// Useful for embedding values documents in a binary and for tests.
///
/// # Examples
///
/// ```rust
/// use hexvalues::adapters::InMemoryStore;
/// use hexvalues::ports::DocumentStore;
/// use std::path::Path;
///
/// let store = InMemoryStore::new().with_document("values.yaml", "replicas: 2");
/// assert_eq!(store.read(Path::new("values.yaml")).unwrap(), "replicas: 2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    documents: HashMap<PathBuf, String>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document and returns the store.
    pub fn with_document(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Adds or replaces a document.
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.documents.insert(path.into(), content.into());
    }

    /// Removes a document, returning its text if it was present.
    pub fn remove(&mut self, path: &Path) -> Option<String> {
        self.documents.remove(path)
    }
}

impl DocumentStore for InMemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn exists(&self, path: &Path) -> bool {
        self.documents.contains_key(path)
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        self.documents.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no document at {}", path.display()),
            )
        })
    }
}
