// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the document model and the pure transformations.
//!
//! Everything here is free of I/O: normalization, placeholder substitution and the
//! conversion into generic values are plain functions over owned trees.

pub mod document;
pub mod errors;
pub mod generic_value;
pub mod replacement;
pub mod substitution;

// Re-export commonly used types
pub use document::{normalize, Document, RawNode};
pub use errors::{BoxError, Result, ValuesError};
pub use generic_value::{to_generic_value, GenericValue};
pub use replacement::{Replacement, SubstitutionTable};
pub use substitution::{substitute, unresolved_placeholders};
