//! Typed secret material
//!
//! A [`Secret`] carries raw bytes together with how much entropy they can be
//! trusted to hold. Keys are used as-is by the deriver, passwords are hashed
//! and stretched first.

use crate::{KeyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroizing;

/// Kind of secret material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretType {
    /// Cryptographically strong key material
    Key,
    /// User-supplied password with low entropy
    Password,
}

/// Immutable secret value, wiped from memory on drop
#[derive(Clone)]
pub struct Secret {
    secret_type: SecretType,
    value: Zeroizing<Vec<u8>>,
}

impl Secret {
    /// Create a secret of the given type
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::EmptyPassword`] when a password secret has no bytes.
    pub fn new(secret_type: SecretType, value: impl Into<Vec<u8>>) -> Result<Self> {
        let value = Zeroizing::new(value.into());

        if secret_type == SecretType::Password && value.is_empty() {
            return Err(KeyError::EmptyPassword);
        }

        Ok(Self { secret_type, value })
    }

    /// Wrap high-entropy key material
    #[must_use]
    pub fn key(value: impl Into<Vec<u8>>) -> Self {
        Self {
            secret_type: SecretType::Key,
            value: Zeroizing::new(value.into()),
        }
    }

    /// Wrap a user password
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::EmptyPassword`] if `value` is empty.
    pub fn password(value: impl Into<Vec<u8>>) -> Result<Self> {
        Self::new(SecretType::Password, value)
    }

    /// The kind of secret
    #[must_use]
    pub fn secret_type(&self) -> SecretType {
        self.secret_type
    }

    /// Raw secret bytes
    #[must_use]
    pub fn value(&self) -> &[u8] {
        &self.value
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("secret_type", &self.secret_type)
            .field("value", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_rejected() {
        assert_eq!(Secret::password(Vec::new()).unwrap_err(), KeyError::EmptyPassword);
        assert_eq!(
            Secret::new(SecretType::Password, "").unwrap_err(),
            KeyError::EmptyPassword
        );
    }

    #[test]
    fn empty_key_is_allowed() {
        let secret = Secret::key(Vec::new());
        assert_eq!(secret.secret_type(), SecretType::Key);
        assert!(secret.value().is_empty());
    }

    #[test]
    fn debug_output_hides_value() {
        let secret = Secret::password("hunter2").unwrap();
        let rendered = format!("{secret:?}");
        assert!(rendered.contains("Password"));
        assert!(!rendered.contains("hunter2"));
    }
}
