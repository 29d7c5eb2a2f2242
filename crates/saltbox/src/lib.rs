//! # Saltbox
//!
//! Password hashing with constant-time verification, plus the small set of
//! symmetric-crypto helpers that usually travel with it.
//!
//! ## Features
//!
//! - **Password hashing**: salted or unsalted SHA-512, and a versioned
//!   PBKDF2-HMAC-SHA1 record format
//! - **Verification**: constant-time digest comparison; malformed records
//!   simply do not match
//! - **AES-256-CBC**: byte, string and stream encryption with optional
//!   per-message IVs
//! - **Secrets**: zero-on-drop strings and buffers
//!
//! ## Example
//!
//! ```ignore
//! use saltbox::{AppConfig, init_app};
//!
//! let context = init_app(AppConfig::default())?;
//! let hasher = context.hasher();
//!
//! let stored = hasher.hash_password("start")?;
//! assert!(hasher.verify_hashed_password(&stored, "start")?);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Error type, hashing value objects and port traits
//! - `infrastructure` - Crypto services, configuration, logging and wiring

/// Domain layer - error type, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use saltbox_domain::*;
}

/// Infrastructure layer - crypto services, config, logging and DI
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use saltbox_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export services and wiring
pub use infrastructure::config::{AppConfig, ConfigLoader};
pub use infrastructure::crypto::{AesCipher, PasswordService, RandomGenerator, SecureString};
pub use infrastructure::di::{AppContext, create_password_hasher, init_app};
pub use infrastructure::logging::init_logging;
