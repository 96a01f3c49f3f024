//! Configuration loader for environment-selected JSON files.
//!
//! Responsibilities:
//! - Select the active environment (`ENV`, default `dev` when unset or empty).
//! - Resolve `<dir>/<base>.<env>.json` and load it into a `KeyedStore`.
//! - Report load failures as `ConfigError` values naming the resolved path.
//!
//! Does NOT handle:
//! - Dotted key lookups (see `store.rs`).
//! - Merging several files or reloading on change.
//!
//! Invariants / Assumptions:
//! - An explicitly configured environment wins over the `ENV` variable.
//! - Only `ENV` is read from the process environment.

mod builder;
mod env;
mod error;

pub use builder::{ConfigLoader, config_file_name, load_config};
pub use env::Environment;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
