// SPDX-License-Identifier: MIT OR Apache-2.0

//! Substitution source trait definition.
//!
//! This module defines the `SubstitutionSource` trait. A source contributes named
//! values to a [`SubstitutionTable`]; several sources are merged by priority.

use crate::domain::{Result, SubstitutionTable};

/// A trait for sources of substitution values.
///
/// # Priority
///
/// When two sources provide the same name, the source with the higher priority
/// wins. The built-in adapters use:
///
/// - **3 (highest)**: Command-line arguments
/// - **2**: Environment variables
///
/// # Examples
///
/// ```rust
/// use hexvalues::domain::{Result, SubstitutionTable};
/// use hexvalues::ports::SubstitutionSource;
///
/// struct ProjectSettings;
///
/// impl SubstitutionSource for ProjectSettings {
///     fn name(&self) -> &str {
///         "project"
///     }
///
///     fn priority(&self) -> u8 {
///         1
///     }
///
///     fn entries(&self) -> Result<SubstitutionTable> {
///         Ok(SubstitutionTable::new().with("hostName", "mlrun.example.com"))
///     }
/// }
///
/// let table = ProjectSettings.entries().unwrap();
/// assert!(table.contains("hostName"));
/// ```
pub trait SubstitutionSource: Send + Sync {
    /// Returns the name of this source, used in logs and errors.
    fn name(&self) -> &str;

    /// Returns the priority of this source. Higher values take precedence.
    fn priority(&self) -> u8;

    /// Produces the entries this source contributes.
    ///
    /// # Returns
    ///
    /// * `Ok(SubstitutionTable)` - The entries, possibly empty
    /// * `Err(ValuesError)` - The source could not produce its entries
    fn entries(&self) -> Result<SubstitutionTable>;
}
