// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the values loader.
//!
//! This module defines the errors that can occur while locating, reading, decoding,
//! or shaping a values document, and while collecting substitution values from
//! their sources. All errors use `thiserror` for proper error handling and conversion.
//!
//! An unresolved `${name}` placeholder is deliberately *not* an error: it is left
//! verbatim in the output so that several substitution passes can be staged.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for values loading operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use hexvalues::domain::errors::ValuesError;
/// use std::path::PathBuf;
///
/// fn load() -> Result<(), ValuesError> {
///     Err(ValuesError::NotFound {
///         path: PathBuf::from("helm/values.yaml"),
///     })
/// }
///
/// assert_eq!(
///     load().unwrap_err().to_string(),
///     "file helm/values.yaml does not exist"
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValuesError {
    /// The addressed document does not exist.
    #[error("file {} does not exist", .path.display())]
    NotFound {
        /// The path that was looked up
        path: PathBuf,
    },

    /// The document could not be read or decoded.
    #[error("{message}")]
    ParseError {
        /// The error message, including the path and the underlying cause
        message: String,
        /// The underlying I/O or decoding error
        #[source]
        source: Option<BoxError>,
    },

    /// The decoded document does not have a mapping at its top level.
    #[error("document {} does not contain a top-level mapping", .path.display())]
    EmptyDocument {
        /// The path of the offending document
        path: PathBuf,
    },

    /// A substitution source failed to produce its values.
    #[error("Substitution source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<BoxError>,
    },
}

/// A boxed error as reported by parsers and substitution sources.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

impl ValuesError {
    /// Creates a read failure for `path`.
    pub fn read_failed(path: &Path, err: impl Into<BoxError>) -> Self {
        let err = err.into();
        ValuesError::ParseError {
            message: format!("failed to read {}: {}", path.display(), err),
            source: Some(err),
        }
    }

    /// Creates a decode failure for `path`.
    pub fn parse_failed(path: &Path, err: impl Into<BoxError>) -> Self {
        let err = err.into();
        ValuesError::ParseError {
            message: format!("failed to parse {}: {}", path.display(), err),
            source: Some(err),
        }
    }

    /// Returns `true` if this is a [`ValuesError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, ValuesError::NotFound { .. })
    }
}

/// A specialized Result type for values loading operations.
pub type Result<T> = std::result::Result<T, ValuesError>;
