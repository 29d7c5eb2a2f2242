//! Random Source Port

use crate::error::Result;

/// Cryptographically secure random byte source
///
/// Hashers draw salts through this port so tests can substitute a
/// deterministic source.
pub trait RandomSource: Send + Sync {
    /// Fill `dest` entirely with random bytes
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()>;

    /// Allocate and fill a buffer of `length` random bytes
    fn random_bytes(&self, length: usize) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; length];
        self.fill_bytes(&mut buffer)?;
        Ok(buffer)
    }
}
