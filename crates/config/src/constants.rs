//! Centralized constants for configuration file discovery.
//!
//! This module contains the fixed names used when composing the path of an
//! environment-specific config file, to avoid string duplication across
//! the loader and its tests.

// =============================================================================
// Environment Selection
// =============================================================================

/// Environment variable that selects which config file variant to load.
pub const ENV_VAR: &str = "ENV";

/// Environment used when `ENV` is unset, empty, or whitespace-only.
pub const DEFAULT_ENVIRONMENT: &str = "dev";

// =============================================================================
// File Naming
// =============================================================================

/// Extension appended to every composed config file name.
pub const CONFIG_FILE_EXTENSION: &str = "json";

/// Separator between the segments of a dotted key path.
pub const KEY_SEPARATOR: char = '.';

/// Placeholder used in error messages for content that did not come from a file.
pub const IN_MEMORY_SOURCE: &str = "<memory>";
