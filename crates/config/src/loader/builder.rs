//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Compose the path of an environment-specific config file
//!   (`<dir>/<base>.<env>.json`).
//! - Provide a builder-pattern `ConfigLoader` where the environment is an
//!   explicit input, with `from_env()` as an opt-in shortcut.
//! - Load the resolved file into a `KeyedStore`.
//!
//! Does NOT handle:
//! - Environment variable parsing details (delegated to env.rs).
//! - JSON parsing and dotted lookups (delegated to `KeyedStore`).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over the `ENV` variable.
//! - Load failures are returned to the caller; the loader never exits the process.

use std::path::PathBuf;

use super::env::Environment;
use super::error::ConfigError;
use crate::constants::CONFIG_FILE_EXTENSION;
use crate::store::KeyedStore;

/// Returns `<base_name>.<environment>.json`.
pub fn config_file_name(base_name: &str, environment: &Environment) -> String {
    format!("{base_name}.{environment}.{CONFIG_FILE_EXTENSION}")
}

/// Loads `<dir>/<base_name>.<env>.json`, selecting the environment from `ENV`.
///
/// This is shorthand for
/// `ConfigLoader::new(dir, base_name).from_env().load()`.
pub fn load_config(
    dir: impl Into<PathBuf>,
    base_name: impl Into<String>,
) -> Result<KeyedStore, ConfigError> {
    ConfigLoader::new(dir, base_name).from_env().load()
}

/// Loader that resolves and reads an environment-specific config file.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    dir: PathBuf,
    base_name: String,
    environment: Option<Environment>,
}

impl ConfigLoader {
    /// Create a loader for files named `<base_name>.<env>.json` inside `dir`.
    pub fn new(dir: impl Into<PathBuf>, base_name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base_name: base_name.into(),
            environment: None,
        }
    }

    /// Set the environment explicitly.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Read the environment from `ENV` unless one was already set.
    pub fn from_env(mut self) -> Self {
        if self.environment.is_none() {
            self.environment = Some(Environment::from_env());
        }
        self
    }

    /// Environment that will be loaded; `dev` if none was set.
    pub fn environment(&self) -> Environment {
        self.environment.clone().unwrap_or_default()
    }

    /// Full path of the file `load()` will read.
    pub fn resolved_path(&self) -> PathBuf {
        self.dir
            .join(config_file_name(&self.base_name, &self.environment()))
    }

    /// Read and parse the resolved config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// does not contain a JSON object at the top level. The error names the
    /// resolved path.
    pub fn load(&self) -> Result<KeyedStore, ConfigError> {
        let path = self.resolved_path();
        tracing::debug!(
            path = %path.display(),
            environment = %self.environment(),
            "Loading config file"
        );

        match KeyedStore::from_path(&path) {
            Ok(store) => {
                tracing::debug!(
                    path = %path.display(),
                    keys = store.len(),
                    "Loaded config file"
                );
                Ok(store)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Unable to load config file");
                Err(e)
            }
        }
    }
}
