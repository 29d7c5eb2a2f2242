//! Composition root
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(AppConfig::default())?;
//!
//! let hashed = context.hasher().hash_password("start")?;
//! assert!(context.hasher().verify_hashed_password(&hashed, "start")?);
//! ```

use std::sync::Arc;

use saltbox_domain::error::Result;
use saltbox_domain::ports::providers::{CipherProvider, PasswordHasher, RandomSource};
use tracing::info;

use crate::config::AppConfig;
use crate::crypto::RandomGenerator;
use crate::di::factory::{create_cipher, create_password_hasher};

/// Application context holding the configured services
#[derive(Clone)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    random: Arc<dyn RandomSource>,
    hasher: Arc<dyn PasswordHasher>,
    cipher: Arc<dyn CipherProvider>,
}

impl AppContext {
    /// Get the random source
    pub fn random(&self) -> Arc<dyn RandomSource> {
        Arc::clone(&self.random)
    }

    /// Get the password hasher
    pub fn hasher(&self) -> Arc<dyn PasswordHasher> {
        Arc::clone(&self.hasher)
    }

    /// Get the cipher
    pub fn cipher(&self) -> Arc<dyn CipherProvider> {
        Arc::clone(&self.cipher)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("hasher", &self.hasher.config())
            .field("cipher", &self.cipher.provider_name())
            .finish_non_exhaustive()
    }
}

/// Initialize the application context from configuration
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    info!("Initializing application context");

    let config = Arc::new(config);
    let random: Arc<dyn RandomSource> = Arc::new(RandomGenerator::new());

    let hasher = create_password_hasher(&config.hashing, Arc::clone(&random))?;
    let cipher = create_cipher(&config.encryption)?;

    info!(
        "Resolved services: hasher={}, cipher={}",
        hasher.config(),
        cipher.provider_name()
    );

    Ok(AppContext {
        config,
        random,
        hasher,
        cipher,
    })
}

/// Initialize application for testing
pub fn init_test_app() -> Result<AppContext> {
    init_app(AppConfig::default())
}
