// SPDX-License-Identifier: MIT OR Apache-2.0

//! Values loader implementation.
//!
//! This module provides [`ValuesLoader`], which runs the full pipeline for one
//! values document: existence check, read, decode, key normalization, placeholder
//! substitution and conversion into a [`GenericValue`].

use crate::adapters::{FileSystemStore, YamlParser};
use crate::domain::{
    normalize, substitute, to_generic_value, unresolved_placeholders, Document, GenericValue,
    Result, SubstitutionTable, ValuesError,
};
use crate::ports::{DocumentParser, DocumentStore};
use std::path::Path;

/// Loads values documents and resolves their placeholders.
///
/// A loader holds no state between calls: every [`load`](ValuesLoader::load) reads
/// and decodes the document afresh, so one loader may be shared between threads.
/// Failures are returned at the first failing step; nothing is retried.
///
/// # Examples
///
/// ```rust
/// use hexvalues::adapters::InMemoryStore;
/// use hexvalues::domain::SubstitutionTable;
/// use hexvalues::service::ValuesLoader;
///
/// # fn main() -> hexvalues::domain::Result<()> {
/// let store = InMemoryStore::new()
///     .with_document("values.yaml", "ingress:\n  host: ${hostName}\n");
/// let loader = ValuesLoader::builder()
///     .with_store(Box::new(store))
///     .build();
///
/// let table = SubstitutionTable::new().with("hostName", "mlrun.example.com");
/// let values = loader.load("values.yaml", &table)?;
///
/// assert_eq!(
///     values.lookup("ingress.host").and_then(|v| v.as_str()),
///     Some("mlrun.example.com")
/// );
/// # Ok(())
/// # }
/// ```
pub struct ValuesLoader {
    /// Where documents are looked up and read
    store: Box<dyn DocumentStore>,
    /// How document text is decoded
    parser: Box<dyn DocumentParser>,
    /// Whether to log the raw document and the substituted values
    debug_dump: bool,
}

impl ValuesLoader {
    /// Creates a loader that reads YAML documents from the local filesystem.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a new loader builder.
    pub fn builder() -> ValuesLoaderBuilder {
        ValuesLoaderBuilder::new()
    }

    /// Loads the document at `path`, substitutes placeholders from `table` and
    /// returns the resulting generic value.
    ///
    /// # Errors
    ///
    /// * [`ValuesError::NotFound`] - No document exists at `path`
    /// * [`ValuesError::ParseError`] - The document could not be read or decoded
    /// * [`ValuesError::EmptyDocument`] - The document's root is not a mapping
    pub fn load(&self, path: impl AsRef<Path>, table: &SubstitutionTable) -> Result<GenericValue> {
        let path = path.as_ref();
        let document = self.load_document(path)?;

        let substituted = substitute(document, table);

        let unresolved = unresolved_placeholders(&substituted);
        if !unresolved.is_empty() {
            tracing::debug!(
                "Leaving {} unresolved placeholder(s) in '{}': {:?}",
                unresolved.len(),
                path.display(),
                unresolved
            );
        }

        let values = to_generic_value(substituted);

        if self.debug_dump {
            match values.to_json_pretty() {
                Ok(json) => tracing::debug!("Substituted values for '{}':\n{}", path.display(), json),
                Err(e) => tracing::debug!(
                    "Failed to render substituted values for '{}': {}",
                    path.display(),
                    e
                ),
            }
        }

        Ok(values)
    }

    /// Loads and normalizes the document at `path` without substituting anything.
    ///
    /// Fails exactly like [`load`](ValuesLoader::load).
    pub fn load_document(&self, path: impl AsRef<Path>) -> Result<Document> {
        let path = path.as_ref();

        if !self.store.exists(path) {
            return Err(ValuesError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = self
            .store
            .read(path)
            .map_err(|e| ValuesError::read_failed(path, e))?;

        tracing::debug!(
            "Read {} bytes from '{}' (store={}, parser={})",
            content.len(),
            path.display(),
            self.store.name(),
            self.parser.name()
        );
        if self.debug_dump {
            tracing::debug!("Raw content of '{}':\n{}", path.display(), content);
        }

        let raw = self
            .parser
            .parse(&content)
            .map_err(|e| ValuesError::parse_failed(path, e))?;

        let document = normalize(raw);
        if !document.is_mapping() {
            return Err(ValuesError::EmptyDocument {
                path: path.to_path_buf(),
            });
        }

        Ok(document)
    }
}

impl Default for ValuesLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads a YAML values document from the filesystem and substitutes its
/// placeholders.
///
/// This is a shorthand for [`ValuesLoader::new`] followed by
/// [`ValuesLoader::load`].
///
/// # Examples
///
/// ```rust
/// use hexvalues::domain::SubstitutionTable;
/// use hexvalues::service::load_values;
///
/// let err = load_values("/no/such/file.yaml", &SubstitutionTable::new()).unwrap_err();
/// assert!(err.is_not_found());
/// ```
pub fn load_values(path: impl AsRef<Path>, table: &SubstitutionTable) -> Result<GenericValue> {
    ValuesLoader::new().load(path, table)
}

/// Builder for constructing a [`ValuesLoader`].
///
/// Unset parts default to a [`FileSystemStore`] and a [`YamlParser`].
///
/// # Examples
///
/// ```rust
/// use hexvalues::service::ValuesLoaderBuilder;
///
/// let loader = ValuesLoaderBuilder::new()
///     .with_max_file_size(1024 * 1024)
///     .with_debug_dump(true)
///     .build();
/// ```
pub struct ValuesLoaderBuilder {
    store: Option<Box<dyn DocumentStore>>,
    parser: Option<Box<dyn DocumentParser>>,
    debug_dump: bool,
}

impl ValuesLoaderBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            store: None,
            parser: None,
            debug_dump: false,
        }
    }

    /// Sets the document store.
    pub fn with_store(mut self, store: Box<dyn DocumentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Reads from the local filesystem, refusing files larger than `bytes`.
    pub fn with_max_file_size(self, bytes: u64) -> Self {
        self.with_store(Box::new(FileSystemStore::new().with_max_file_size(bytes)))
    }

    /// Sets the document parser.
    pub fn with_parser(mut self, parser: Box<dyn DocumentParser>) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Logs the raw document and the substituted values at `debug` level.
    pub fn with_debug_dump(mut self, enabled: bool) -> Self {
        self.debug_dump = enabled;
        self
    }

    /// Builds the loader.
    pub fn build(self) -> ValuesLoader {
        ValuesLoader {
            store: self
                .store
                .unwrap_or_else(|| Box::new(FileSystemStore::new())),
            parser: self.parser.unwrap_or_else(|| Box::new(YamlParser::new())),
            debug_dump: self.debug_dump,
        }
    }
}

impl Default for ValuesLoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;
    use crate::domain::BoxError;
    use crate::domain::RawNode;
    use std::io;
    use std::sync::Arc;

    fn loader_with(path: &str, content: &str) -> ValuesLoader {
        ValuesLoader::builder()
            .with_store(Box::new(InMemoryStore::new().with_document(path, content)))
            .build()
    }

    struct UnreadableStore;

    impl DocumentStore for UnreadableStore {
        fn name(&self) -> &str {
            "unreadable"
        }

        fn exists(&self, _path: &Path) -> bool {
            true
        }

        fn read(&self, _path: &Path) -> io::Result<String> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"))
        }
    }

    struct UppercaseKeyParser;

    impl DocumentParser for UppercaseKeyParser {
        fn name(&self) -> &str {
            "uppercase"
        }

        fn parse(&self, content: &str) -> std::result::Result<RawNode, BoxError> {
            let mut map = serde_yaml::Mapping::new();
            map.insert(content.to_uppercase().into(), "${v}".into());
            Ok(RawNode::Mapping(map))
        }
    }

    #[test]
    fn test_load_substitutes_placeholders() {
        let loader = loader_with(
            "values.yaml",
            "db:\n  url: postgres://${dbHost}:${port}/app\n  replicas: 2\n",
        );
        let table = SubstitutionTable::new()
            .with("dbHost", "10.0.0.5")
            .with("port", 5432);

        let values = loader.load("values.yaml", &table).unwrap();

        assert_eq!(
            values.lookup("db.url").and_then(GenericValue::as_str),
            Some("postgres://10.0.0.5:5432/app")
        );
        assert_eq!(values.lookup("db.replicas"), Some(&GenericValue::Int(2)));
    }

    #[test]
    fn test_load_missing_document() {
        let loader = loader_with("values.yaml", "a: 1");
        let err = loader
            .load("other.yaml", &SubstitutionTable::new())
            .unwrap_err();

        assert!(matches!(err, ValuesError::NotFound { .. }));
        assert_eq!(err.to_string(), "file other.yaml does not exist");
    }

    #[test]
    fn test_load_read_failure_is_parse_error() {
        let loader = ValuesLoader::builder()
            .with_store(Box::new(UnreadableStore))
            .build();
        let err = loader
            .load("values.yaml", &SubstitutionTable::new())
            .unwrap_err();

        assert!(matches!(err, ValuesError::ParseError { .. }));
        assert_eq!(
            err.to_string(),
            "failed to read values.yaml: permission denied"
        );
    }

    #[test]
    fn test_load_malformed_document() {
        let loader = loader_with("values.yaml", "image:\n  tag: [1.0, 2.0\n");
        let err = loader
            .load("values.yaml", &SubstitutionTable::new())
            .unwrap_err();

        assert!(matches!(err, ValuesError::ParseError { .. }));
        assert!(err.to_string().starts_with("failed to parse values.yaml: "));
    }

    #[test]
    fn test_load_non_mapping_roots() {
        for content in ["- a\n- b\n", "just a string", "42", "null"] {
            let loader = loader_with("values.yaml", content);
            let err = loader
                .load("values.yaml", &SubstitutionTable::new())
                .unwrap_err();
            assert!(
                matches!(err, ValuesError::EmptyDocument { .. }),
                "unexpected error for {:?}: {}",
                content,
                err
            );
        }
    }

    #[test]
    fn test_load_drops_non_string_keys() {
        let loader = loader_with("values.yaml", "1: one\nname: ${name}\n");
        let table = SubstitutionTable::new().with("name", "mlrun");

        let values = loader.load("values.yaml", &table).unwrap();
        let map = values.as_mapping().unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("name").and_then(GenericValue::as_str), Some("mlrun"));
    }

    #[test]
    fn test_load_document_skips_substitution() {
        let loader = loader_with("values.yaml", "host: ${hostName}\n");
        let document = loader.load_document("values.yaml").unwrap();

        assert_eq!(document.get("host").and_then(Document::as_str), Some("${hostName}"));
    }

    #[test]
    fn test_custom_parser() {
        let loader = ValuesLoader::builder()
            .with_store(Box::new(
                InMemoryStore::new().with_document("values.txt", "key"),
            ))
            .with_parser(Box::new(UppercaseKeyParser))
            .with_debug_dump(true)
            .build();
        let table = SubstitutionTable::new().with("v", true);

        let values = loader.load("values.txt", &table).unwrap();
        assert_eq!(values.get("KEY").and_then(GenericValue::as_str), Some("true"));
    }

    #[test]
    fn test_concurrent_loads_are_independent() {
        let loader = Arc::new(loader_with("values.yaml", "name: ${name}\n"));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let loader = Arc::clone(&loader);
                std::thread::spawn(move || {
                    let table = SubstitutionTable::new().with("name", format!("release-{}", i));
                    let values = loader.load("values.yaml", &table).unwrap();
                    values.get("name").and_then(GenericValue::as_str).map(str::to_string)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Some(format!("release-{}", i)));
        }
    }
}
