// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) for the collaborators of the
//! loader: the document decoder, the document store, and the sources of
//! substitution values. These traits are implemented by adapters in the adapters layer.

pub mod parser;
pub mod source;
pub mod store;

// Re-export commonly used types
pub use parser::DocumentParser;
pub use source::SubstitutionSource;
pub use store::DocumentStore;
