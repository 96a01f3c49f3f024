//! Immutable keyed store with dotted-path lookups.
//!
//! Responsibilities:
//! - Own the parsed root mapping of a configuration file.
//! - Resolve dotted keys (`database.host`) through nested mappings.
//! - Provide typed lookups in two forms: `Option`-returning (found/not found)
//!   and zero-value-returning (missing, wrong shape and type mismatch all
//!   collapse to the type's zero value).
//!
//! Does NOT handle:
//! - Selecting which file to load (see `loader/`).
//! - Mutating, merging or reloading configuration.
//!
//! Invariants:
//! - The root mapping is never mutated after construction.
//! - A non-mapping or missing intermediate segment yields "not found", never a panic.
//! - Integer lookups truncate the stored `f64`; they never read a native integer.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::IN_MEMORY_SOURCE;
use crate::loader::ConfigError;
use crate::path::KeyPath;
use crate::value::Value;

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Signed truncation with the x86-64 `CVTTSD2SQ` result for NaN and
/// out-of-range input: the "integer indefinite" value `i64::MIN`.
fn truncate_or_indefinite(value: f64) -> i64 {
    if value.is_nan() || !(-TWO_POW_63..TWO_POW_63).contains(&value) {
        i64::MIN
    } else {
        value as i64
    }
}

/// Truncates toward zero into an `i64`.
///
/// NaN and values outside the `i64` range yield `i64::MIN`, as the
/// reference conversion does on x86-64. Precision above 2^53 is already
/// lost in the `f64`.
pub fn truncate_to_i64(value: f64) -> i64 {
    truncate_or_indefinite(value)
}

/// Truncates toward zero into a `u64`.
///
/// Below 2^63 the value goes through the signed conversion, so negative
/// inputs wrap (`-1.0` becomes `u64::MAX`). From 2^63 up the value is
/// rebased by 2^63 and the top bit set again. NaN and values at or above
/// 2^64 yield `1 << 63`.
pub fn truncate_to_u64(value: f64) -> u64 {
    if value < TWO_POW_63 {
        truncate_or_indefinite(value) as u64
    } else {
        (truncate_or_indefinite(value - TWO_POW_63) as u64) | (1 << 63)
    }
}

/// Parsed configuration answering typed point-queries by dotted key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyedStore {
    root: BTreeMap<String, Value>,
    source: Option<PathBuf>,
}

impl KeyedStore {
    /// Wraps an already-built root mapping.
    pub fn from_map(root: BTreeMap<String, Value>) -> Self {
        Self { root, source: None }
    }

    /// Parses JSON text whose top level must be an object.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, Path::new(IN_MEMORY_SOURCE))
    }

    /// Reads and parses the file at `path`.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD before parsing.
    ///
    /// # Errors
    ///
    /// - `ConfigError::Read` if the file cannot be read.
    /// - `ConfigError::Parse` if the content is not valid JSON.
    /// - `ConfigError::NotAnObject` if the top level is not a JSON object.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        let mut store = Self::parse(&content, path)?;
        store.source = Some(path.to_path_buf());
        Ok(store)
    }

    fn parse(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let json: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ConfigError::Parse {
                path: origin.to_path_buf(),
                source: e,
            })?;

        match Value::from(json) {
            Value::Map(root) => Ok(Self::from_map(root)),
            other => Err(ConfigError::NotAnObject {
                path: origin.to_path_buf(),
                found: other.kind(),
            }),
        }
    }

    /// Path of the file this store was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// File name of the source, e.g. `app.prod.json`.
    pub fn file_name(&self) -> Option<&str> {
        self.source
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Resolves a dotted key to the value stored there.
    ///
    /// Returns `None` when any intermediate segment is missing or is not a
    /// mapping, or when the leaf is absent.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        let path = KeyPath::parse(key);
        let mut current = &self.root;
        for segment in path.parents() {
            current = current.get(*segment)?.as_map()?;
        }
        current.get(path.leaf())
    }

    /// True when `key` resolves to any value, including `null`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        self.lookup(key).and_then(Value::as_str)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.lookup(key).and_then(Value::as_bool)
    }

    pub fn float(&self, key: &str) -> Option<f64> {
        self.lookup(key).and_then(Value::as_f64)
    }

    /// Stored number truncated toward zero (see [`truncate_to_i64`]).
    pub fn int(&self, key: &str) -> Option<i64> {
        self.float(key).map(truncate_to_i64)
    }

    /// Stored number truncated toward zero (see [`truncate_to_u64`]).
    pub fn uint(&self, key: &str) -> Option<u64> {
        self.float(key).map(truncate_to_u64)
    }

    /// Nested mapping stored at `key`.
    pub fn section(&self, key: &str) -> Option<&BTreeMap<String, Value>> {
        self.lookup(key).and_then(Value::as_map)
    }

    /// String at `key`, or `""` when it cannot be resolved.
    pub fn get_string(&self, key: &str) -> String {
        self.string(key).unwrap_or_default().to_string()
    }

    /// Boolean at `key`, or `false` when it cannot be resolved.
    pub fn get_bool(&self, key: &str) -> bool {
        self.bool(key).unwrap_or_default()
    }

    /// Number at `key`, or `0.0` when it cannot be resolved.
    pub fn get_float(&self, key: &str) -> f64 {
        self.float(key).unwrap_or_default()
    }

    /// `get_float(key)` truncated into an `i64`.
    pub fn get_int(&self, key: &str) -> i64 {
        truncate_to_i64(self.get_float(key))
    }

    /// `get_float(key)` truncated into a `u64`.
    pub fn get_uint(&self, key: &str) -> u64 {
        truncate_to_u64(self.get_float(key))
    }
}

impl TryFrom<serde_json::Value> for KeyedStore {
    type Error = ConfigError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        match Value::from(json) {
            Value::Map(root) => Ok(Self::from_map(root)),
            other => Err(ConfigError::NotAnObject {
                path: PathBuf::from(IN_MEMORY_SOURCE),
                found: other.kind(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for KeyedStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        BTreeMap::<String, Value>::deserialize(deserializer).map(Self::from_map)
    }
}

impl Serialize for KeyedStore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.root.serialize(serializer)
    }
}
