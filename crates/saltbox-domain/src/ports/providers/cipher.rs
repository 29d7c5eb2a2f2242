//! Cipher Provider Port
//!
//! Defines the interface for symmetric encryption. Implementations live in
//! saltbox-infrastructure (`AesCipher`).

use crate::error::Result;

/// Symmetric cipher provider port
///
/// Ciphertext produced by [`encrypt`](CipherProvider::encrypt) is
/// self-contained: any IV the implementation needs is carried inside it.
pub trait CipherProvider: Send + Sync {
    /// Encrypt plaintext bytes
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt bytes produced by [`encrypt`](CipherProvider::encrypt)
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;

    /// Encrypt text and return it base64-encoded
    fn encrypt_string(&self, plaintext: &str) -> Result<String>;

    /// Decrypt base64 text produced by [`encrypt_string`](CipherProvider::encrypt_string)
    fn decrypt_string(&self, ciphertext: &str) -> Result<String>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
