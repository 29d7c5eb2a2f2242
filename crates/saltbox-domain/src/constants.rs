//! Domain layer constants
//!
//! Sizes and parameters that define the encoded hash formats. Changing any
//! of these breaks verification of hashes that are already stored.

// ============================================================================
// SHA-512 SCHEME CONSTANTS
// ============================================================================

/// Length of a SHA-512 digest in bytes
pub const SHA512_DIGEST_SIZE: usize = 64;

/// Salt length used when none is configured explicitly (128 bits)
pub const DEFAULT_SALT_SIZE: usize = 16;

/// Largest accepted salt length in bytes
pub const MAX_SALT_SIZE: usize = 1024;

// ============================================================================
// PBKDF2 SCHEME CONSTANTS
// ============================================================================

/// Format marker stored in the first byte of a PBKDF2 record
pub const PBKDF2_FORMAT_VERSION: u8 = 0x00;

/// PBKDF2 iteration count
pub const PBKDF2_ITERATIONS: u32 = 1000;

/// PBKDF2 salt length in bytes (128 bits)
pub const PBKDF2_SALT_SIZE: usize = 16;

/// PBKDF2 derived sub-key length in bytes (256 bits)
pub const PBKDF2_SUBKEY_SIZE: usize = 32;

/// Total decoded length of a PBKDF2 record: version + salt + sub-key
pub const PBKDF2_RECORD_SIZE: usize = 1 + PBKDF2_SALT_SIZE + PBKDF2_SUBKEY_SIZE;

// ============================================================================
// AES CONSTANTS
// ============================================================================

/// AES-256 key length in bytes
pub const AES_KEY_SIZE: usize = 32;

/// AES block length in bytes; also the CBC IV length
pub const AES_BLOCK_SIZE: usize = 16;
