// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builder that assembles a substitution table from several sources.

use crate::domain::{Replacement, Result, SubstitutionTable};
use crate::ports::SubstitutionSource;

/// Builder for a [`SubstitutionTable`] drawn from multiple sources.
///
/// Sources are merged in ascending priority order, so a source with a higher
/// priority overwrites names provided by a lower one. Values added with
/// [`with_value`](SubstitutionTableBuilder::with_value) are applied last and
/// override every source.
///
/// # Examples
///
/// ```rust
/// use hexvalues::service::SubstitutionTableBuilder;
///
/// # fn main() -> hexvalues::domain::Result<()> {
/// let table = SubstitutionTableBuilder::new()
///     .with_cli_args(vec!["--set", "hostName=mlrun.example.com"])
///     .with_value("registrySecretName", "registry-creds")
///     .build()?;
///
/// assert_eq!(table.len(), 2);
/// # Ok(())
/// # }
/// ```
pub struct SubstitutionTableBuilder {
    sources: Vec<Box<dyn SubstitutionSource>>,
    values: SubstitutionTable,
}

impl SubstitutionTableBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            values: SubstitutionTable::new(),
        }
    }

    /// Adds a substitution source.
    pub fn with_source(mut self, source: Box<dyn SubstitutionSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Adds every environment variable as a source.
    #[cfg(feature = "env")]
    pub fn with_env_vars(self) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_source(Box::new(EnvVarAdapter::new()))
    }

    /// Adds environment variables starting with `prefix` as a source.
    #[cfg(feature = "env")]
    pub fn with_env_prefix(self, prefix: impl Into<String>) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_source(Box::new(EnvVarAdapter::with_prefix(prefix)))
    }

    /// Adds command-line arguments as a source.
    #[cfg(feature = "cli")]
    pub fn with_cli_args<S: AsRef<str>>(self, args: Vec<S>) -> Self {
        use crate::adapters::CommandLineAdapter;
        self.with_source(Box::new(CommandLineAdapter::from_args(args)))
    }

    /// Adds a single value that overrides all sources.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<Replacement>) -> Self {
        self.values.insert(name, value);
        self
    }

    /// Collects every source and merges the results.
    ///
    /// The first source that fails aborts the build with its error.
    pub fn build(mut self) -> Result<SubstitutionTable> {
        // Stable sort keeps insertion order among equal priorities
        self.sources.sort_by_key(|source| source.priority());

        let mut table = SubstitutionTable::new();
        for source in &self.sources {
            let entries = source.entries()?;
            tracing::debug!(
                "Merging {} substitution value(s) from source '{}' (priority {})",
                entries.len(),
                source.name(),
                source.priority()
            );
            table.merge(entries);
        }
        table.merge(self.values);

        Ok(table)
    }
}

impl Default for SubstitutionTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SubstitutionTable {
    /// Creates a builder that assembles a table from sources.
    pub fn builder() -> SubstitutionTableBuilder {
        SubstitutionTableBuilder::new()
    }
}
