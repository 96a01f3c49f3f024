//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test file name composition and path resolution.
//! - Test loading from disk, including every load error variant.
//! - Test `ENV` handling and precedence of an explicit environment.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Writes `content` to `<dir>/<base>.<env>.json` and returns the path.
pub fn write_config_file(dir: &Path, base: &str, env: &str, content: &str) -> PathBuf {
    let path = dir.join(format!("{base}.{env}.json"));
    std::fs::write(&path, content).unwrap();
    path
}
