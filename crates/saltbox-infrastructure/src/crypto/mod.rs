//! Cryptographic services module
//!
//! This module provides cryptographic primitives for:
//! - Password hashing with salted SHA-512 or PBKDF2
//! - AES-256-CBC encryption/decryption, in memory and over streams
//! - Secure random generation
//! - Constant-time comparison, key derivation and secure erasure utilities
//! - Zero-on-drop secret strings

mod encryption;
mod password;
mod random;
mod secure_string;
mod utils;

pub use encryption::AesCipher;
pub use password::PasswordService;
pub use random::RandomGenerator;
pub use secure_string::SecureString;
pub use utils::{HashUtils, KeyDerivation, SecureErasure};
