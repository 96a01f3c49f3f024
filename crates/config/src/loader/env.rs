//! Environment selection for configuration loading.
//!
//! Responsibilities:
//! - Read the `ENV` environment variable.
//! - Normalize environment names (lowercased) with a `dev` fallback.
//!
//! Does NOT handle:
//! - Composing file names or reading files (see builder.rs).
//!
//! Invariants:
//! - An `Environment` is never empty and is always lowercase.
//! - Only an unset or empty `ENV` selects `dev`; any other value is used
//!   verbatim apart from lowercasing, whitespace included.
//! - `ENV` is the only environment variable consulted.

use std::fmt;

use crate::constants::{DEFAULT_ENVIRONMENT, ENV_VAR};

/// Name of the environment whose config file variant is loaded (`dev`, `prod`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Environment(String);

impl Environment {
    /// Lowercases `name`; an empty name selects the `dev` fallback.
    pub fn new(name: &str) -> Self {
        if name.is_empty() {
            Self::default()
        } else {
            Self(name.to_lowercase())
        }
    }

    /// Selects the environment from the `ENV` variable, falling back to `dev`
    /// when it is unset or empty.
    pub fn from_env() -> Self {
        match std::env::var_os(ENV_VAR) {
            Some(name) => Self::new(&name.to_string_lossy()),
            None => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self(DEFAULT_ENVIRONMENT.to_string())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Environment {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
