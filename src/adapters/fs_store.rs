// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local filesystem document store adapter.

use crate::ports::DocumentStore;
use std::fs;
use std::io;
use std::path::Path;

/// Default maximum size of a document read from disk (10MB).
/// Prevents denial of service via extremely large files.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Document store that reads from the local filesystem.
///
/// Each read is a single attempt. Files larger than the configured cap are
/// refused with an [`io::ErrorKind::InvalidData`] error before being read.
///
/// # Examples
///
/// ```rust
/// use hexvalues::adapters::FileSystemStore;
/// use hexvalues::ports::DocumentStore;
/// use std::path::Path;
///
/// let store = FileSystemStore::new().with_max_file_size(64 * 1024);
/// assert!(!store.exists(Path::new("/no/such/file.yaml")));
/// ```
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    max_file_size: u64,
}

impl FileSystemStore {
    /// Creates a store with the default size cap.
    pub fn new() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// Sets the largest file size, in bytes, that will be read.
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Returns the configured size cap in bytes.
    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }
}

impl Default for FileSystemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for FileSystemStore {
    fn name(&self) -> &str {
        "filesystem"
    }

    fn exists(&self, path: &Path) -> bool {
        // Only a definite "not found" counts as missing; other stat failures are
        // left for `read` to report with their cause.
        !matches!(path.try_exists(), Ok(false))
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        // Check file size before reading
        let metadata = fs::metadata(path)?;
        if metadata.len() > self.max_file_size {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    self.max_file_size
                ),
            ));
        }

        fs::read_to_string(path)
    }
}
