//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every way loading a config file can fail.
//! - Carry the resolved file path so callers can report which file broke.
//!
//! Does NOT handle:
//! - Lookup misses; those are reported as `None` or zero values (see `store.rs`).
//!
//! Invariants:
//! - Every variant names the path it was loading (`<memory>` for in-memory content).
//! - The underlying I/O or JSON error is kept as the error source.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Config file at {path} must contain a JSON object at the top level, found {found}")]
    NotAnObject { path: PathBuf, found: &'static str },
}

impl ConfigError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::NotAnObject { path, .. } => path,
        }
    }
}
