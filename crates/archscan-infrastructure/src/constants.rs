//! Infrastructure constants
//!
//! Defaults for configuration, logging and storage.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Configuration file searched for when none is given
pub const DEFAULT_CONFIG_FILENAME: &str = "archscan.toml";

/// Directory name under the user config dir
pub const DEFAULT_CONFIG_DIR: &str = "archscan";

/// Prefix of configuration environment variables
pub const CONFIG_ENV_PREFIX: &str = "ARCHSCAN";

/// Separator for nested keys, e.g. `ARCHSCAN_GITHUB__TIMEOUT_SECS`
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "ARCHSCAN_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File stem for rotated log files
pub const DEFAULT_LOG_FILE_STEM: &str = "archscan";

// ============================================================================
// GITHUB CONSTANTS
// ============================================================================

/// Default request timeout in seconds
pub const DEFAULT_GITHUB_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// STORE CONSTANTS
// ============================================================================

/// Directory under the user data dir holding saved analyses
pub const DEFAULT_STORE_SUBDIR: &str = "analyses";

/// User key for analyses requested from the command line
pub const DEFAULT_STORE_USER: &str = "local";
