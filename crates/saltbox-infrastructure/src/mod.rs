//! # Infrastructure Layer
//!
//! Concrete implementations of the ports declared in `saltbox-domain`, plus
//! the technical concerns around them.
//!
//! ## Module Categories
//!
//! ### Security
//! | Module | Description |
//! |--------|-------------|
//! | [`crypto`] | Password hashing, AES-256-CBC, secure random, secret strings |
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based TOML and environment configuration |
//! | [`di`] | Composition root and service factories |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod crypto;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use error_ext::ErrorContext;
