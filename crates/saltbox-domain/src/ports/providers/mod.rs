//! External Provider Ports
//!
//! Contracts for the cryptographic services the rest of the system depends
//! on.
//!
//! | Port | Description |
//! |------|-------------|
//! | PasswordHasher | Password hashing and verification |
//! | CipherProvider | Symmetric encryption/decryption |
//! | RandomSource | Secure random bytes |

/// Cipher provider port
pub mod cipher;
/// Password hasher port
pub mod hasher;
/// Random source port
pub mod random;

pub use cipher::CipherProvider;
pub use hasher::PasswordHasher;
pub use random::RandomSource;
