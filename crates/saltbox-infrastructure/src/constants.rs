//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Record format constants are defined in `saltbox_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "saltbox.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "saltbox";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SALTBOX";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "SALTBOX_LOG";

/// File stem used for rolling log files when none can be derived
pub const DEFAULT_LOG_FILE_STEM: &str = "saltbox";

// ============================================================================
// ENCRYPTION CONSTANTS
// ============================================================================

/// Read size for stream encryption; a whole number of AES blocks
pub const STREAM_CHUNK_SIZE: usize = 8 * 1024;
