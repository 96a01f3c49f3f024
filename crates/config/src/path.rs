//! Dotted key paths.
//!
//! A key such as `database.primary.host` addresses a leaf nested under two
//! intermediate mappings. Splitting never fails: a key without separators is
//! a single top-level segment, and empty segments are kept verbatim so that
//! JSON objects with an empty-string key stay addressable.

use std::fmt;

use crate::constants::KEY_SEPARATOR;

/// A dotted key split into intermediate segments and a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath<'a> {
    raw: &'a str,
    parents: Vec<&'a str>,
    leaf: &'a str,
}

impl<'a> KeyPath<'a> {
    /// Splits `key` on `.` into its segments.
    pub fn parse(key: &'a str) -> Self {
        match key.rsplit_once(KEY_SEPARATOR) {
            Some((prefix, leaf)) => Self {
                raw: key,
                parents: prefix.split(KEY_SEPARATOR).collect(),
                leaf,
            },
            None => Self {
                raw: key,
                parents: Vec::new(),
                leaf: key,
            },
        }
    }

    /// Segments that must each resolve to a nested mapping.
    pub fn parents(&self) -> &[&'a str] {
        &self.parents
    }

    /// Final segment, looked up in the last mapping reached.
    pub fn leaf(&self) -> &'a str {
        self.leaf
    }

    /// Iterates over every segment, parents first.
    pub fn segments(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.parents.iter().copied().chain(std::iter::once(self.leaf))
    }

    /// True when the path addresses a top-level key.
    pub fn is_top_level(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }
}

impl fmt::Display for KeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}
