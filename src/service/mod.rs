// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the values loader and the substitution table builder.
//!
//! This module wires the domain transformations to the ports: it is the only layer
//! that performs I/O through a store and collects values from sources.

pub mod loader;
pub mod table_builder;

// Re-export commonly used types
pub use loader::{load_values, ValuesLoader, ValuesLoaderBuilder};
pub use table_builder::SubstitutionTableBuilder;
