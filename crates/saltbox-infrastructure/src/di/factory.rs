//! Service factories
//!
//! Turn configuration sections into port implementations.

use std::sync::Arc;

use saltbox_domain::error::{Error, Result};
use saltbox_domain::ports::providers::{CipherProvider, PasswordHasher, RandomSource};
use tracing::{debug, warn};

use crate::config::{EncryptionConfig, HashingConfig};
use crate::crypto::{AesCipher, PasswordService};

/// Create the password hasher selected by `config`
///
/// Salts are drawn from `random`, so tests can inject a fixed source.
pub fn create_password_hasher(
    config: &HashingConfig,
    random: Arc<dyn RandomSource>,
) -> Result<Arc<dyn PasswordHasher>> {
    let hasher_config = config.to_hasher_config();
    let service = PasswordService::new(hasher_config, random)
        .map_err(|e| Error::configuration_with_source("Invalid hashing configuration", e))?;

    debug!(config = %hasher_config, "Created password hasher");
    Ok(Arc::new(service))
}

/// Create the AES cipher described by `config`
///
/// Without a configured key a random one is generated, which only lives as
/// long as the process.
pub fn create_cipher(config: &EncryptionConfig) -> Result<Arc<dyn CipherProvider>> {
    let cipher = match config.key_bytes()? {
        Some(key) => AesCipher::new(key)?,
        None => {
            warn!("No encryption key configured, generated an ephemeral key");
            AesCipher::generate()?
        }
    }
    .with_create_iv(config.create_iv);

    debug!(
        provider = cipher.provider_name(),
        create_iv = config.create_iv,
        "Created cipher"
    );
    Ok(Arc::new(cipher))
}
