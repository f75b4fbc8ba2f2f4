//! PBKDF2 key deriver
//!
//! Passwords are hashed with SHA-512 and run through the configured number of
//! PBKDF2-HMAC-SHA512 iterations before the final single-round stretch.
//! High-entropy keys skip straight to the stretch. The stretched output holds
//! twice the requested key length: the first half becomes the authentication
//! key, the second half the encryption key.

use super::config::{KdfConfig, KEY_SALT_BYTE_LENGTH, MAX_DERIVED_KEY_BYTE_LENGTH};
use super::{DerivedKeys, KeyDeriver};
use crate::secret::{Secret, SecretType};
use crate::{KeyError, Result};
use pbkdf2::pbkdf2_hmac;
use sha2::{Digest, Sha512};
use zeroize::Zeroizing;

/// Output size of the iterated password round
const PASSWORD_ROUND_OUTPUT_LENGTH: usize = 64;

/// Key deriver backed by PBKDF2-HMAC-SHA512
#[derive(Debug, Clone, Default)]
pub struct Pbkdf2KeyDeriver {
    config: KdfConfig,
}

impl Pbkdf2KeyDeriver {
    /// Create a deriver with the given configuration
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::InvalidIterations`] for a zero iteration count.
    pub fn new(config: KdfConfig) -> Result<Self> {
        if config.iterations == 0 {
            tracing::warn!("rejecting PBKDF2 configuration with zero iterations");
            return Err(KeyError::InvalidIterations(
                "PBKDF2 iterations must be non-zero".to_string(),
            ));
        }

        Ok(Self { config })
    }

    /// Get the KDF configuration
    #[must_use]
    pub fn config(&self) -> &KdfConfig {
        &self.config
    }

    /// Derive keys from a secret, choosing the path by its type
    ///
    /// # Errors
    ///
    /// Same as [`KeyDeriver::derive_keys_from_password`] and
    /// [`KeyDeriver::derive_keys_from_key`].
    pub fn derive_keys(
        &self,
        secret: &Secret,
        salt: &[u8],
        key_byte_length: usize,
    ) -> Result<DerivedKeys> {
        match secret.secret_type() {
            SecretType::Key => self.derive_keys_from_key(secret.value(), salt, key_byte_length),
            SecretType::Password => {
                self.derive_keys_from_password(secret.value(), salt, key_byte_length)
            }
        }
    }

    fn stretch_and_split(
        input: &[u8],
        salt: &[u8],
        key_byte_length: usize,
    ) -> Result<DerivedKeys> {
        let mut stretched = Zeroizing::new(vec![0u8; key_byte_length * 2]);
        pbkdf2_hmac::<Sha512>(input, salt, 1, &mut stretched);

        let (authentication_key, encryption_key) = stretched.split_at(key_byte_length);
        Ok(DerivedKeys::new(
            encryption_key.to_vec(),
            authentication_key.to_vec(),
        ))
    }
}

impl KeyDeriver for Pbkdf2KeyDeriver {
    fn derive_keys_from_password(
        &self,
        password: &[u8],
        salt: &[u8],
        key_byte_length: usize,
    ) -> Result<DerivedKeys> {
        validate_salt_length(salt)?;
        validate_key_length(key_byte_length)?;

        tracing::trace!(
            iterations = self.config.iterations,
            key_byte_length,
            "deriving keys from password"
        );

        let hashed_password = Zeroizing::new(Sha512::digest(password).to_vec());
        let mut derived_key = Zeroizing::new(vec![0u8; PASSWORD_ROUND_OUTPUT_LENGTH]);
        pbkdf2_hmac::<Sha512>(
            &hashed_password,
            salt,
            self.config.iterations,
            &mut derived_key,
        );

        Self::stretch_and_split(&derived_key, salt, key_byte_length)
    }

    fn derive_keys_from_key(
        &self,
        key: &[u8],
        salt: &[u8],
        key_byte_length: usize,
    ) -> Result<DerivedKeys> {
        validate_salt_length(salt)?;
        validate_key_length(key_byte_length)?;

        tracing::trace!(key_byte_length, "deriving keys from key");

        Self::stretch_and_split(key, salt, key_byte_length)
    }
}

fn validate_salt_length(salt: &[u8]) -> Result<()> {
    if salt.len() != KEY_SALT_BYTE_LENGTH {
        return Err(KeyError::InvalidSaltLength {
            expected: KEY_SALT_BYTE_LENGTH,
            actual: salt.len(),
        });
    }
    Ok(())
}

fn validate_key_length(key_byte_length: usize) -> Result<()> {
    if key_byte_length == 0 {
        return Err(KeyError::invalid_key_length(
            "derived key length must be non-zero",
        ));
    }
    if key_byte_length > MAX_DERIVED_KEY_BYTE_LENGTH {
        return Err(KeyError::invalid_key_length(format!(
            "derived key length {key_byte_length} exceeds {MAX_DERIVED_KEY_BYTE_LENGTH} bytes"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deriver() -> Pbkdf2KeyDeriver {
        Pbkdf2KeyDeriver::new(KdfConfig::fast()).unwrap()
    }

    #[test]
    fn zero_iterations_are_rejected() {
        let err = Pbkdf2KeyDeriver::new(KdfConfig::with_iterations(0)).unwrap_err();
        assert!(matches!(err, KeyError::InvalidIterations(_)));
    }

    #[test]
    fn default_config_uses_25000_iterations() {
        assert_eq!(Pbkdf2KeyDeriver::default().config().iterations, 25_000);
    }

    #[test]
    fn key_path_splits_a_single_stretch() {
        let salt = [7u8; KEY_SALT_BYTE_LENGTH];
        let keys = deriver().derive_keys_from_key(b"key", &salt, 16).unwrap();

        let mut expected = [0u8; 32];
        pbkdf2_hmac::<Sha512>(b"key", &salt, 1, &mut expected);
        assert_eq!(keys.authentication_key(), &expected[..16]);
        assert_eq!(keys.encryption_key(), &expected[16..]);
    }

    #[test]
    fn password_path_differs_from_key_path() {
        let salt = [7u8; KEY_SALT_BYTE_LENGTH];
        let from_password = deriver()
            .derive_keys_from_password(b"input", &salt, 32)
            .unwrap();
        let from_key = deriver().derive_keys_from_key(b"input", &salt, 32).unwrap();
        assert_ne!(from_password, from_key);
    }

    #[test]
    fn zero_key_length_is_rejected() {
        let salt = [0u8; KEY_SALT_BYTE_LENGTH];
        let err = deriver().derive_keys_from_key(b"key", &salt, 0).unwrap_err();
        assert!(matches!(err, KeyError::InvalidKeyLength(_)));
    }

    #[test]
    fn secret_type_selects_derivation_path() {
        let salt = [3u8; KEY_SALT_BYTE_LENGTH];
        let deriver = deriver();

        let password = Secret::password("pw").unwrap();
        assert_eq!(
            deriver.derive_keys(&password, &salt, 32).unwrap(),
            deriver.derive_keys_from_password(b"pw", &salt, 32).unwrap()
        );

        let key = Secret::key(vec![9u8; 32]);
        assert_eq!(
            deriver.derive_keys(&key, &salt, 32).unwrap(),
            deriver.derive_keys_from_key(&[9u8; 32], &salt, 32).unwrap()
        );
    }
}
