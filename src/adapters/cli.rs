// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line argument substitution source adapter.
//!
//! This module provides an adapter that supplies substitution values from
//! command-line arguments.

use crate::domain::{Result, SubstitutionTable, ValuesError};
use crate::ports::SubstitutionSource;

/// Substitution source adapter for command-line arguments.
///
/// Supported argument formats:
/// - `--set name=value`: Helm-style assignment
/// - `--name=value`: Long form with equals sign
/// - `--name value`: Long form with space-separated value
///
/// Arguments are kept as given and parsed when
/// [`entries`](SubstitutionSource::entries) is called. A `--set` whose operand has
/// no `=` is reported as a [`ValuesError::SourceError`].
///
/// # Priority
///
/// Command-line arguments have the highest priority (3), which means they override
/// environment variables (priority 2).
///
/// # Examples
///
/// ```rust
/// use hexvalues::adapters::CommandLineAdapter;
/// use hexvalues::ports::SubstitutionSource;
///
/// let args = vec!["--set", "hostName=mlrun.example.com", "--replicas=2"];
/// let table = CommandLineAdapter::from_args(args).entries().unwrap();
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandLineAdapter {
    /// Raw arguments
    args: Vec<String>,
}

impl CommandLineAdapter {
    /// Creates a new command-line adapter with no arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new command-line adapter from a vector of arguments.
    pub fn from_args<S: AsRef<str>>(args: Vec<S>) -> Self {
        Self {
            args: args.iter().map(|a| a.as_ref().to_string()).collect(),
        }
    }

    /// Creates an adapter from bare `name=value` assignments, as collected by a
    /// `--set` option of an argument parser.
    pub fn from_assignments<S: AsRef<str>>(assignments: Vec<S>) -> Self {
        let mut args = Vec::with_capacity(assignments.len() * 2);
        for assignment in assignments {
            args.push("--set".to_string());
            args.push(assignment.as_ref().to_string());
        }
        Self { args }
    }

    /// Creates a new command-line adapter from the process's command-line arguments.
    ///
    /// This skips the first argument (the program name).
    pub fn from_env_args() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_args(args)
    }

    fn invalid(&self, message: String) -> ValuesError {
        ValuesError::SourceError {
            source_name: self.name().to_string(),
            message,
            source: None,
        }
    }

    /// Parses the arguments into a table.
    fn parse_args(&self) -> Result<SubstitutionTable> {
        let mut table = SubstitutionTable::new();
        let mut i = 0;
        while i < self.args.len() {
            let arg = self.args[i].as_str();

            // Handle --set name=value and --set=name=value
            if arg == "--set" || arg.starts_with("--set=") {
                let operand = match arg.strip_prefix("--set=") {
                    Some(inline) => inline,
                    None => {
                        i += 1;
                        self.args
                            .get(i)
                            .map(String::as_str)
                            .ok_or_else(|| self.invalid("--set requires name=value".to_string()))?
                    }
                };
                let (name, value) = operand
                    .split_once('=')
                    .filter(|(name, _)| !name.is_empty())
                    .ok_or_else(|| {
                        self.invalid(format!("expected name=value after --set, got '{}'", operand))
                    })?;
                table.insert(name, value);
                i += 1;
            }
            // Handle --name=value format
            else if let Some((name, value)) =
                arg.strip_prefix("--").and_then(|s| s.split_once('='))
            {
                table.insert(name, value);
                i += 1;
            }
            // Handle --name value format
            else if let Some(name) = arg.strip_prefix("--") {
                match self.args.get(i + 1) {
                    // Make sure the next argument is not another flag
                    Some(next) if !next.starts_with('-') => {
                        table.insert(name, next.as_str());
                        i += 2;
                    }
                    _ => i += 1,
                }
            } else {
                i += 1;
            }
        }
        Ok(table)
    }
}

impl SubstitutionSource for CommandLineAdapter {
    fn name(&self) -> &str {
        "cli"
    }

    fn priority(&self) -> u8 {
        3
    }

    fn entries(&self) -> Result<SubstitutionTable> {
        self.parse_args()
    }
}
