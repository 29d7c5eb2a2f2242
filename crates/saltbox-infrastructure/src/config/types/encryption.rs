//! Symmetric encryption configuration types

use crate::error_ext::ErrorContext;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use saltbox_domain::constants::AES_KEY_SIZE;
use saltbox_domain::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// AES encryption configuration
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionConfig {
    /// Generate a random IV per message and prepend it to the ciphertext
    pub create_iv: bool,

    /// Base64-encoded 256-bit key
    ///
    /// Configure via `SALTBOX__ENCRYPTION__KEY`. When absent a random key is
    /// generated at startup and ciphertexts do not survive a restart.
    #[serde(default)]
    pub key: Option<String>,
}

impl EncryptionConfig {
    /// Decode the configured key, checking its length
    pub fn key_bytes(&self) -> Result<Option<Vec<u8>>> {
        let Some(encoded) = &self.key else {
            return Ok(None);
        };

        let key = STANDARD
            .decode(encoded.trim())
            .config_context("Encryption key is not valid base64")?;
        if key.len() != AES_KEY_SIZE {
            return Err(Error::configuration(format!(
                "Encryption key must be {} bytes, got {}",
                AES_KEY_SIZE,
                key.len()
            )));
        }
        Ok(Some(key))
    }
}

impl Default for EncryptionConfig {
    fn default() -> Self {
        Self {
            create_iv: true,
            key: None,
        }
    }
}

impl fmt::Debug for EncryptionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptionConfig")
            .field("create_iv", &self.create_iv)
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
