//! Configuration types module

pub mod app;
pub mod encryption;
pub mod hashing;
pub mod logging;

// Re-export main types
pub use app::AppConfig;
pub use encryption::EncryptionConfig;
pub use hashing::HashingConfig;
pub use logging::LoggingConfig;
