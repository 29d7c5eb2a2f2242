//! Value objects shared by the hashing and encryption services

/// Hashing configuration value objects
pub mod hashing;

pub use hashing::{HashScheme, HasherConfig, TextEncoding};
