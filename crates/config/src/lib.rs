//! Environment-selected JSON configuration with typed dotted-key lookups.
//!
//! This crate loads `<dir>/<base>.<env>.json`, where the environment comes
//! from an explicit [`Environment`] or the `ENV` variable (default `dev`),
//! and answers point-queries such as `database.port` against the parsed tree.
//!
//! ```rust,no_run
//! use keyed_config::{ConfigLoader, Environment};
//!
//! let store = ConfigLoader::new("config", "app")
//!     .with_environment(Environment::new("prod"))
//!     .load()?;
//!
//! let host = store.get_string("database.host");
//! let port = store.uint("database.port").unwrap_or(5432);
//! # let _ = (host, port);
//! # Ok::<(), keyed_config::ConfigError>(())
//! ```

pub mod constants;
mod loader;
pub mod path;
mod store;
pub mod value;

pub use loader::{ConfigError, ConfigLoader, Environment, config_file_name, load_config};
pub use path::KeyPath;
pub use store::{KeyedStore, truncate_to_i64, truncate_to_u64};
pub use value::Value;

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
