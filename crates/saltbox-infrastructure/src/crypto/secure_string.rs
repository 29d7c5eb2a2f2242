//! In-memory secret text

use std::fmt;

use zeroize::Zeroizing;

use super::utils::HashUtils;

/// A string that is zeroed when dropped and redacted in `Debug` output
#[derive(Clone, Default, Eq)]
pub struct SecureString {
    data: Zeroizing<String>,
}

impl SecureString {
    /// Wrap existing text
    pub fn new(data: String) -> Self {
        Self {
            data: Zeroizing::new(data),
        }
    }

    /// Borrow the secret text
    pub fn expose_secret(&self) -> &str {
        &self.data
    }

    /// Borrow the secret as UTF-8 bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_bytes()
    }

    /// Copy the secret out into an ordinary `String`
    ///
    /// The returned copy is not zeroed on drop.
    pub fn into_insecure_string(self) -> String {
        self.data.as_str().to_owned()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<String> for SecureString {
    fn from(data: String) -> Self {
        Self::new(data)
    }
}

impl From<&str> for SecureString {
    fn from(data: &str) -> Self {
        Self::new(data.to_owned())
    }
}

impl PartialEq for SecureString {
    /// Compares without exiting at the first differing byte
    fn eq(&self, other: &Self) -> bool {
        HashUtils::constant_time_eq(self.as_bytes(), other.as_bytes())
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecureString([REDACTED {} bytes])", self.data.len())
    }
}
