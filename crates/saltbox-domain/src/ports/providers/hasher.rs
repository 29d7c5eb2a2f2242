//! Password Hasher Port
//!
//! Defines the hashing and verification contract handed out by the
//! composition root. The single implementation lives in
//! saltbox-infrastructure (`PasswordService`) and is polymorphic over
//! [`HashScheme`](crate::value_objects::HashScheme).

use crate::error::Result;
use crate::value_objects::HasherConfig;

/// Password hashing port
///
/// # Example
///
/// ```ignore
/// use saltbox_domain::ports::providers::PasswordHasher;
///
/// fn login(hasher: &dyn PasswordHasher, stored: &str, attempt: &str) -> Result<bool> {
///     hasher.verify_hashed_password(stored, attempt)
/// }
/// ```
pub trait PasswordHasher: Send + Sync {
    /// Hash a password with a fresh random salt (when salting is enabled)
    ///
    /// Fails with `InvalidArgument` for an empty or whitespace-only password.
    fn hash_password(&self, password: &str) -> Result<String>;

    /// Hash a password with a caller-supplied base64 salt
    ///
    /// The decoded salt must have exactly the configured length.
    fn hash_password_with_salt(&self, password: &str, salt: &str) -> Result<String>;

    /// Verify a candidate password against a stored hash
    ///
    /// Returns `Ok(false)` for a mismatch and for stored hashes whose decoded
    /// layout does not fit the configured scheme.
    fn verify_hashed_password(&self, hashed: &str, candidate: &str) -> Result<bool>;

    /// Configuration this hasher was built with
    fn config(&self) -> HasherConfig;
}
