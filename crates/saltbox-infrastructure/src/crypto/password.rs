//! Password hashing service
//!
//! One service covers every [`HashScheme`]. Encoded records are base64 of:
//!
//! | Scheme | Layout |
//! |--------|--------|
//! | SHA-512 salted | `salt(N) ++ SHA512(salt ++ password)` |
//! | SHA-512 unsalted | `SHA512(password)` |
//! | PBKDF2 | `0x00 ++ salt(16) ++ PBKDF2-HMAC-SHA1(password, salt, 1000, 32)` |

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use saltbox_domain::constants::{PBKDF2_FORMAT_VERSION, PBKDF2_ITERATIONS, PBKDF2_SUBKEY_SIZE};
use saltbox_domain::error::{Error, Result};
use saltbox_domain::ports::providers::{PasswordHasher, RandomSource};
use saltbox_domain::value_objects::{HashScheme, HasherConfig};
use tracing::debug;
use zeroize::Zeroizing;

use super::random::RandomGenerator;
use super::utils::{HashUtils, KeyDerivation};

/// Password hashing service
///
/// Stateless after construction; safe to share across threads.
#[derive(Clone)]
pub struct PasswordService {
    config: HasherConfig,
    random: Arc<dyn RandomSource>,
}

impl PasswordService {
    /// Create a password service drawing salts from `random`
    pub fn new(config: HasherConfig, random: Arc<dyn RandomSource>) -> Result<Self> {
        config.validate()?;
        debug!(config = %config, "Password service created");
        Ok(Self { config, random })
    }

    /// Create a password service backed by the OS random source
    pub fn with_os_random(config: HasherConfig) -> Result<Self> {
        Self::new(config, Arc::new(RandomGenerator::new()))
    }

    /// Hash a password with a freshly drawn salt
    pub fn hash_password(&self, password: &str) -> Result<String> {
        require_text(password, "Password")?;

        let salt = self.random.random_bytes(self.config.effective_salt_size())?;
        let record = self.build_record(password, &salt);

        debug!(scheme = %self.config.scheme, "Password hashed");
        Ok(STANDARD.encode(record.as_slice()))
    }

    /// Hash a password with a caller-supplied base64 salt
    pub fn hash_password_with_salt(&self, password: &str, salt: &str) -> Result<String> {
        require_text(password, "Password")?;
        require_text(salt, "Salt")?;

        if self.config.effective_salt_size() == 0 {
            return Err(Error::invalid_argument(
                "Salting is disabled for this hasher",
            ));
        }

        let salt = STANDARD.decode(salt)?;
        if salt.len() != self.config.effective_salt_size() {
            return Err(Error::invalid_argument(format!(
                "The salt must be {} bytes, got {}",
                self.config.effective_salt_size(),
                salt.len()
            )));
        }

        let record = self.build_record(password, &salt);
        Ok(STANDARD.encode(record.as_slice()))
    }

    /// Verify a candidate password against a stored hash
    ///
    /// A stored hash that is not base64 is an [`Error::Decode`]; one that
    /// decodes to the wrong layout simply does not match.
    pub fn verify_hashed_password(&self, hashed: &str, candidate: &str) -> Result<bool> {
        require_text(hashed, "Hashed password")?;
        require_text(candidate, "Provided password")?;

        let record = STANDARD.decode(hashed)?;
        let (salt, stored) = match self.split_record(&record) {
            Ok(parts) => parts,
            Err(e) if e.is_format_mismatch() => {
                debug!(scheme = %self.config.scheme, error = %e, "Rejected malformed hash");
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        let computed = self.digest(candidate, salt);
        Ok(HashUtils::constant_time_eq(stored, &computed))
    }

    /// Configuration this service was built with
    pub fn config(&self) -> HasherConfig {
        self.config
    }

    fn encode_password(&self, password: &str) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.config.text_encoding.encode(password))
    }

    /// Digest or sub-key over `password` with `salt`
    fn digest(&self, password: &str, salt: &[u8]) -> Zeroizing<Vec<u8>> {
        let password = self.encode_password(password);
        match self.config.scheme {
            HashScheme::Sha512 => HashUtils::sha512(&[salt, password.as_slice()]),
            HashScheme::Pbkdf2 => KeyDerivation::pbkdf2_sha1(
                &password,
                salt,
                PBKDF2_ITERATIONS,
                PBKDF2_SUBKEY_SIZE,
            ),
        }
    }

    fn build_record(&self, password: &str, salt: &[u8]) -> Zeroizing<Vec<u8>> {
        let digest = self.digest(password, salt);
        let mut record = Zeroizing::new(Vec::with_capacity(self.config.record_size()));
        if self.config.scheme == HashScheme::Pbkdf2 {
            record.push(PBKDF2_FORMAT_VERSION);
        }
        record.extend_from_slice(salt);
        record.extend_from_slice(&digest);
        record
    }

    /// Split a decoded record into `(salt, digest)`
    fn split_record<'a>(&self, record: &'a [u8]) -> Result<(&'a [u8], &'a [u8])> {
        let expected = self.config.record_size();
        if record.len() != expected {
            return Err(Error::format_mismatch(format!(
                "expected {expected} bytes, got {}",
                record.len()
            )));
        }

        let body = match self.config.scheme {
            HashScheme::Sha512 => record,
            HashScheme::Pbkdf2 => match record.split_first() {
                Some((&PBKDF2_FORMAT_VERSION, body)) => body,
                Some((version, _)) => {
                    return Err(Error::format_mismatch(format!(
                        "unsupported format version {version:#04x}"
                    )));
                }
                None => return Err(Error::format_mismatch("empty record")),
            },
        };

        Ok(body.split_at(self.config.effective_salt_size()))
    }
}

// Implement the PasswordHasher port from saltbox-domain
impl PasswordHasher for PasswordService {
    fn hash_password(&self, password: &str) -> Result<String> {
        PasswordService::hash_password(self, password)
    }

    fn hash_password_with_salt(&self, password: &str, salt: &str) -> Result<String> {
        PasswordService::hash_password_with_salt(self, password, salt)
    }

    fn verify_hashed_password(&self, hashed: &str, candidate: &str) -> Result<bool> {
        PasswordService::verify_hashed_password(self, hashed, candidate)
    }

    fn config(&self) -> HasherConfig {
        self.config
    }
}

impl std::fmt::Debug for PasswordService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn require_text(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid_argument(format!(
            "{name} is empty or whitespace"
        )));
    }
    Ok(())
}
