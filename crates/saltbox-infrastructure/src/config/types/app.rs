//! Application configuration root

use super::{EncryptionConfig, HashingConfig, LoggingConfig};
use serde::{Deserialize, Serialize};

/// Root configuration for Saltbox
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Password hashing
    pub hashing: HashingConfig,

    /// Symmetric encryption
    pub encryption: EncryptionConfig,

    /// Logging
    pub logging: LoggingConfig,
}
