//! Key Derivation - encryption and authentication keys from a single secret

pub mod config;
pub mod pbkdf2_deriver;

pub use config::{
    KdfConfig, DEFAULT_PBKDF2_ITERATIONS, KEY_SALT_BYTE_LENGTH, MAX_DERIVED_KEY_BYTE_LENGTH,
};
pub use pbkdf2_deriver::Pbkdf2KeyDeriver;

use crate::Result;
use std::fmt;
use zeroize::Zeroizing;

/// Pair of keys produced by one derivation
#[derive(Clone, PartialEq, Eq)]
pub struct DerivedKeys {
    encryption_key: Zeroizing<Vec<u8>>,
    authentication_key: Zeroizing<Vec<u8>>,
}

impl DerivedKeys {
    /// Bundle an encryption key with its authentication key
    #[must_use]
    pub fn new(encryption_key: Vec<u8>, authentication_key: Vec<u8>) -> Self {
        Self {
            encryption_key: Zeroizing::new(encryption_key),
            authentication_key: Zeroizing::new(authentication_key),
        }
    }

    /// Key used to encrypt data
    #[must_use]
    pub fn encryption_key(&self) -> &[u8] {
        &self.encryption_key
    }

    /// Key used to authenticate ciphertext
    #[must_use]
    pub fn authentication_key(&self) -> &[u8] {
        &self.authentication_key
    }
}

impl fmt::Debug for DerivedKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKeys")
            .field("encryption_key", &"<redacted>")
            .field("authentication_key", &"<redacted>")
            .finish()
    }
}

/// Derives encryption and authentication keys from secret material
pub trait KeyDeriver: Send + Sync {
    /// Derive keys from a low-entropy password
    ///
    /// # Errors
    ///
    /// Returns [`crate::KeyError::InvalidSaltLength`] unless the salt is exactly
    /// [`KEY_SALT_BYTE_LENGTH`] bytes, or [`crate::KeyError::InvalidKeyLength`]
    /// for a zero key length.
    fn derive_keys_from_password(
        &self,
        password: &[u8],
        salt: &[u8],
        key_byte_length: usize,
    ) -> Result<DerivedKeys>;

    /// Derive keys from an already high-entropy key
    ///
    /// # Errors
    ///
    /// Same conditions as [`KeyDeriver::derive_keys_from_password`].
    fn derive_keys_from_key(
        &self,
        key: &[u8],
        salt: &[u8],
        key_byte_length: usize,
    ) -> Result<DerivedKeys>;
}
