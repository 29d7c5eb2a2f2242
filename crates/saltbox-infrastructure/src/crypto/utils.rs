//! Cryptographic utilities

use sha1::Sha1;
use sha2::{Digest, Sha512};
use zeroize::{Zeroize, Zeroizing};

/// Key derivation utilities
pub struct KeyDerivation;

impl KeyDerivation {
    /// Derive a key from password bytes using PBKDF2-HMAC-SHA1
    ///
    /// SHA-1 is the PRF of the versioned PBKDF2 record format, so existing
    /// records keep verifying.
    pub fn pbkdf2_sha1(
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        key_len: usize,
    ) -> Zeroizing<Vec<u8>> {
        let mut key = Zeroizing::new(vec![0u8; key_len]);
        pbkdf2::pbkdf2_hmac::<Sha1>(password, salt, iterations, &mut key);
        key
    }
}

/// Secure data erasure
pub struct SecureErasure;

impl SecureErasure {
    /// Overwrite data with zeros in a way the optimizer will not elide
    pub fn zeroize(data: &mut [u8]) {
        data.zeroize();
    }
}

/// Cryptographic hash utilities
pub struct HashUtils;

impl HashUtils {
    /// Compute SHA-512 over the concatenation of `parts`
    pub fn sha512(parts: &[&[u8]]) -> Zeroizing<Vec<u8>> {
        let mut hasher = Sha512::new();
        for part in parts {
            hasher.update(part);
        }
        Zeroizing::new(hasher.finalize().to_vec())
    }

    /// Constant-time comparison for cryptographic values
    ///
    /// Every byte position is folded into the result; there is no early
    /// exit on the first difference. Lengths are treated as public.
    pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
        if a.len() != b.len() {
            return false;
        }

        let mut result = 0u8;
        for (x, y) in a.iter().zip(b.iter()) {
            result |= x ^ y;
        }
        std::hint::black_box(result) == 0
    }
}
