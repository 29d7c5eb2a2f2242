//! Password hashing value objects

use crate::constants::{
    DEFAULT_SALT_SIZE, MAX_SALT_SIZE, PBKDF2_RECORD_SIZE, PBKDF2_SALT_SIZE, SHA512_DIGEST_SIZE,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Password hashing algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashScheme {
    /// Single-pass SHA-512 over `salt ++ password`
    Sha512,
    /// PBKDF2-HMAC-SHA1 with a versioned record
    #[default]
    Pbkdf2,
}

impl HashScheme {
    /// Stable identifier used in configuration and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha512 => "sha512",
            Self::Pbkdf2 => "pbkdf2",
        }
    }
}

impl fmt::Display for HashScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte encoding applied to a password before it is hashed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    /// UTF-8
    #[default]
    Utf8,
    /// UTF-16, little endian, no byte order mark
    Utf16Le,
}

impl TextEncoding {
    /// Encode `text` into a fresh byte buffer
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        }
    }
}

/// Immutable configuration of a password hasher
///
/// `salt_size` of `None` disables salting for [`HashScheme::Sha512`]. The
/// PBKDF2 record layout always carries a [`PBKDF2_SALT_SIZE`]-byte salt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HasherConfig {
    /// Selected algorithm
    pub scheme: HashScheme,
    /// Salt length in bytes, or `None` for unsalted hashing
    pub salt_size: Option<usize>,
    /// Encoding of password text
    pub text_encoding: TextEncoding,
}

impl HasherConfig {
    /// Salted SHA-512 with the given salt length
    pub fn sha512_salted(salt_size: usize) -> Self {
        Self {
            scheme: HashScheme::Sha512,
            salt_size: Some(salt_size),
            text_encoding: TextEncoding::Utf8,
        }
    }

    /// Unsalted, deterministic SHA-512
    pub fn sha512_unsalted() -> Self {
        Self {
            scheme: HashScheme::Sha512,
            salt_size: None,
            text_encoding: TextEncoding::Utf8,
        }
    }

    /// PBKDF2 with the fixed record layout
    pub fn pbkdf2() -> Self {
        Self {
            scheme: HashScheme::Pbkdf2,
            salt_size: Some(PBKDF2_SALT_SIZE),
            text_encoding: TextEncoding::Utf8,
        }
    }

    /// Replace the password text encoding
    pub fn with_text_encoding(mut self, text_encoding: TextEncoding) -> Self {
        self.text_encoding = text_encoding;
        self
    }

    /// Salt length actually written into records
    pub fn effective_salt_size(&self) -> usize {
        match self.scheme {
            HashScheme::Sha512 => self.salt_size.unwrap_or(0),
            HashScheme::Pbkdf2 => PBKDF2_SALT_SIZE,
        }
    }

    /// Decoded length of a record produced with this configuration
    pub fn record_size(&self) -> usize {
        match self.scheme {
            HashScheme::Sha512 => self.effective_salt_size().saturating_add(SHA512_DIGEST_SIZE),
            HashScheme::Pbkdf2 => PBKDF2_RECORD_SIZE,
        }
    }

    /// Check the configuration for values no record layout can hold
    pub fn validate(&self) -> Result<()> {
        match (self.scheme, self.salt_size) {
            (_, Some(0)) => Err(Error::invalid_argument(
                "The salt length must be greater than zero",
            )),
            (HashScheme::Pbkdf2, Some(size)) if size != PBKDF2_SALT_SIZE => {
                Err(Error::invalid_argument(format!(
                    "PBKDF2 records use a {PBKDF2_SALT_SIZE}-byte salt, got {size}"
                )))
            }
            (_, Some(size)) if size > MAX_SALT_SIZE => Err(Error::invalid_argument(format!(
                "The salt length must be at most {MAX_SALT_SIZE} bytes, got {size}"
            ))),
            _ => Ok(()),
        }
    }
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            scheme: HashScheme::default(),
            salt_size: Some(DEFAULT_SALT_SIZE),
            text_encoding: TextEncoding::default(),
        }
    }
}

impl fmt::Display for HasherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.effective_salt_size() {
            0 => write!(f, "{} (unsalted)", self.scheme),
            size => write!(f, "{} (salt {} bytes)", self.scheme, size),
        }
    }
}
