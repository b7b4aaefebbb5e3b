//! Infrastructure layer constants
//!
//! Domain constants live in `autowire_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "autowire.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "autowire";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "AUTOWIRE";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "AUTOWIRE_LOG";

/// File stem used for rotated log files when none is given
pub const DEFAULT_LOG_FILE_STEM: &str = "autowire";
