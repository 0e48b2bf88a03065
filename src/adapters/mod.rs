// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing implementations of the ports.
//!
//! This module contains the concrete document parser, the document stores, and the
//! substitution sources. Sources that touch the process environment are gated
//! behind feature flags.

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "env")]
pub mod env_var;
pub mod fs_store;
pub mod memory_store;
pub mod yaml;

// Re-export adapters based on feature flags
#[cfg(feature = "cli")]
pub use cli::CommandLineAdapter;
#[cfg(feature = "env")]
pub use env_var::EnvVarAdapter;
pub use fs_store::FileSystemStore;
pub use memory_store::InMemoryStore;
pub use yaml::YamlParser;
