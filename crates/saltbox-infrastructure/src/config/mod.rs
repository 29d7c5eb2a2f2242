//! Configuration management
//!
//! Figment-based loading of [`AppConfig`] from defaults, a TOML file and
//! `SALTBOX__` environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, EncryptionConfig, HashingConfig, LoggingConfig};
