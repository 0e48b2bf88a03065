// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helper utilities shared by the integration tests.

use hexvalues::domain::{Result, SubstitutionTable};
use hexvalues::ports::SubstitutionSource;
use std::io::Write;
use std::sync::Once;
use tempfile::NamedTempFile;

static INIT_LOGGING: Once = Once::new();

/// Installs a test-friendly tracing subscriber once per test binary.
///
/// Output is only shown for failing tests, or with `--nocapture`.
#[allow(dead_code)]
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Writes `content` to a fresh temporary file with a `.yaml` suffix.
#[allow(dead_code)]
pub fn write_values_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("failed to write temp file");
    file
}

/// A substitution source with fixed entries and a chosen priority.
#[allow(dead_code)]
pub struct MockSubstitutionSource {
    name: String,
    priority: u8,
    entries: SubstitutionTable,
}

#[allow(dead_code)]
impl MockSubstitutionSource {
    /// Creates an empty source.
    pub fn new(name: impl Into<String>, priority: u8) -> Self {
        Self {
            name: name.into(),
            priority,
            entries: SubstitutionTable::new(),
        }
    }

    /// Adds an entry to the source.
    pub fn with_value(mut self, name: &str, value: &str) -> Self {
        self.entries.insert(name, value);
        self
    }
}

impl SubstitutionSource for MockSubstitutionSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn entries(&self) -> Result<SubstitutionTable> {
        Ok(self.entries.clone())
    }
}
