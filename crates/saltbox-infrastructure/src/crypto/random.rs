//! Secure random byte generation

use rand::TryRngCore;
use rand::rngs::OsRng;
use saltbox_domain::error::{Error, Result};
use saltbox_domain::ports::providers::RandomSource;

use crate::error_ext::ErrorContext;

/// Random generator backed by the operating system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl RandomGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self
    }

    /// Generate a cryptographically secure random byte array
    pub fn generate_random(length: usize) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; length];
        Self::fill(&mut buffer)?;
        Ok(buffer)
    }

    /// Generate a random salt
    pub fn generate_salt(length: usize) -> Result<Vec<u8>> {
        if length == 0 {
            return Err(Error::invalid_argument(
                "The salt length must be greater than zero",
            ));
        }
        Self::generate_random(length)
    }

    fn fill(dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .crypto_context("OS random source failed")
    }
}

impl RandomSource for RandomGenerator {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        Self::fill(dest)
    }
}
