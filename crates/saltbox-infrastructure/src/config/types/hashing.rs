//! Password hashing configuration types

use saltbox_domain::constants::DEFAULT_SALT_SIZE;
use saltbox_domain::value_objects::{HashScheme, HasherConfig, TextEncoding};
use serde::{Deserialize, Serialize};

/// Password hashing configuration
///
/// File and environment form of [`HasherConfig`]. Salting is a separate
/// switch because TOML has no way to spell an absent salt size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashingConfig {
    /// Hashing algorithm (`sha512` or `pbkdf2`)
    pub scheme: HashScheme,

    /// Mix a random salt into every hash
    pub salted: bool,

    /// Salt length in bytes when salting is enabled
    pub salt_size: usize,

    /// Password text encoding (`utf8` or `utf16-le`)
    pub text_encoding: TextEncoding,
}

impl HashingConfig {
    /// Convert into the domain configuration consumed by the hasher
    pub fn to_hasher_config(&self) -> HasherConfig {
        HasherConfig {
            scheme: self.scheme,
            salt_size: self.salted.then_some(self.salt_size),
            text_encoding: self.text_encoding,
        }
    }
}

/// Returns default hashing configuration with:
/// - PBKDF2 (the format with a version byte for future migration)
/// - 16-byte salt
/// - UTF-8 password encoding
impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            scheme: HashScheme::Pbkdf2,
            salted: true,
            salt_size: DEFAULT_SALT_SIZE,
            text_encoding: TextEncoding::Utf8,
        }
    }
}
