// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable substitution source adapter.
//!
//! This module provides an adapter that supplies substitution values from
//! environment variables.

use crate::domain::{Result, SubstitutionTable};
use crate::ports::SubstitutionSource;
use std::collections::HashMap;
use std::env;

/// Maximum length for environment variable keys (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Substitution source adapter for environment variables.
///
/// Variable names become placeholder names unchanged, except that a configured
/// prefix is stripped. With the prefix `VALUES_`, the variable `VALUES_hostName`
/// resolves `${hostName}`. Variables without the prefix are ignored.
///
/// The environment is read each time [`entries`](SubstitutionSource::entries) is
/// called; nothing is cached.
///
/// # Priority
///
/// Environment variables have a priority of 2, which means they are overridden by
/// command-line arguments (priority 3).
///
/// # Examples
///
/// ```rust
/// use hexvalues::adapters::EnvVarAdapter;
/// use hexvalues::ports::SubstitutionSource;
///
/// // Read only variables with a specific prefix
/// let adapter = EnvVarAdapter::with_prefix("VALUES_");
/// assert_eq!(adapter.priority(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct EnvVarAdapter {
    /// Optional prefix to filter environment variables
    prefix: Option<String>,
    /// Fixed values used instead of the process environment
    fixed: Option<HashMap<String, String>>,
}

impl EnvVarAdapter {
    /// Creates a new adapter over every environment variable of the process.
    pub fn new() -> Self {
        Self {
            prefix: None,
            fixed: None,
        }
    }

    /// Creates a new adapter that only reads variables starting with `prefix`.
    ///
    /// The prefix is stripped from the variable name to form the placeholder name.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            fixed: None,
        }
    }

    /// Creates an adapter with pre-populated values for testing.
    ///
    /// **Note**: This method is primarily intended for testing. The values are used
    /// as-is, with no prefix filtering.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            prefix: None,
            fixed: Some(values),
        }
    }

    /// Reads the process environment, applying size limits and the prefix filter.
    fn load(&self) -> SubstitutionTable {
        let mut table = SubstitutionTable::new();

        for (key, value) in env::vars_os().filter_map(|(k, v)| {
            // Skip variables that are not valid unicode
            Some((k.into_string().ok()?, v.into_string().ok()?))
        }) {
            // Validate input sizes to prevent DoS
            if key.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                tracing::debug!(
                    "Skipping oversized environment variable: key_len={}, value_len={} (max key={}, max value={})",
                    key.len(),
                    value.len(),
                    MAX_ENV_KEY_LEN,
                    MAX_ENV_VALUE_LEN
                );
                continue;
            }

            let name = match &self.prefix {
                Some(prefix) => match key.strip_prefix(prefix.as_str()) {
                    Some(stripped) if !stripped.is_empty() => stripped.to_string(),
                    _ => continue,
                },
                None => key,
            };

            table.insert(name, value);
        }

        tracing::debug!(
            "Loaded {} substitution values from environment (prefix={:?})",
            table.len(),
            self.prefix
        );

        table
    }
}

impl Default for EnvVarAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SubstitutionSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn priority(&self) -> u8 {
        2
    }

    fn entries(&self) -> Result<SubstitutionTable> {
        match &self.fixed {
            Some(values) => Ok(values.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()),
            None => Ok(self.load()),
        }
    }
}
