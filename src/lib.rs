// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture loader for parameterized values documents.
//!
//! This crate loads a structured values document (for example the `values.yaml`
//! handed to a Helm release), makes its mapping keys uniformly strings, substitutes
//! `${name}` placeholders with caller-supplied values, and returns a generic value
//! tree ready to pass on to a downstream consumer.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: The document model and the pure transformations
//!   (`normalize`, `substitute`, `to_generic_value`) plus errors
//! - **Ports**: Trait definitions for collaborators (`DocumentParser`,
//!   `DocumentStore`, `SubstitutionSource`)
//! - **Adapters**: YAML decoding, filesystem and in-memory stores, environment
//!   and command-line substitution sources
//! - **Service**: The loader that runs the pipeline, and the builder that merges
//!   substitution sources
//!
//! # Placeholders
//!
//! A placeholder is `${name}` anywhere inside a string scalar, where `name` is any
//! run of characters other than `}`. Names are matched exactly. A placeholder with
//! no entry in the table is left as written, so partial substitution passes are
//! possible. Mapping keys are never substituted.
//!
//! # Feature Flags
//!
//! - `env`: Enable the environment variable substitution source (default)
//! - `cli`: Enable the command-line substitution source and the `render-values`
//!   binary (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hexvalues::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let table = SubstitutionTable::new()
//!     .with("hostName", "mlrun.example.com")
//!     .with("registryURL", "gcr.io/my-project");
//!
//! let values = load_values("helm/mlrun/values.yaml", &table)?;
//! println!("{}", values.to_json_pretty().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        Document, GenericValue, Replacement, Result, SubstitutionTable, ValuesError,
    };
    pub use crate::ports::{DocumentParser, DocumentStore, SubstitutionSource};
    pub use crate::service::{
        load_values, SubstitutionTableBuilder, ValuesLoader, ValuesLoaderBuilder,
    };

    // Re-export adapters based on feature flags
    #[cfg(feature = "cli")]
    pub use crate::adapters::CommandLineAdapter;
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarAdapter;
    pub use crate::adapters::{FileSystemStore, InMemoryStore, YamlParser};
}
