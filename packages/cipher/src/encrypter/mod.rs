//! Authenticated encryption with keys derived from a [`Secret`]
//!
//! Every call to [`Encrypter::encrypt`] draws a fresh key salt and nonce,
//! derives an encryption key and an authentication key from the secret, seals
//! the plaintext with the configured AEAD and MACs the whole envelope.
//! [`Encrypter::decrypt`] checks that MAC in constant time before touching
//! the ciphertext.

mod payload;

pub use payload::PAYLOAD_VERSION;

use crate::{Cipher, CipherError, Result};
use aes_gcm::aead::{Aead, KeyInit, Nonce};
use aes_gcm::Aes256Gcm;
use chacha20poly1305::ChaCha20Poly1305;
use credo_key::{DerivedKeys, KdfConfig, Pbkdf2KeyDeriver, Secret, KEY_SALT_BYTE_LENGTH};
use hmac::{Hmac, Mac};
use payload::{mac_input, EncryptedPayload};
use rand::RngCore;
use sha2::Sha512;
use std::fmt;
use subtle::ConstantTimeEq;

type HmacSha512 = Hmac<Sha512>;

/// Encrypts and decrypts byte strings under one secret
#[derive(Clone)]
pub struct Encrypter {
    secret: Secret,
    cipher: Cipher,
    deriver: Pbkdf2KeyDeriver,
}

impl Encrypter {
    /// Create an encrypter with the default key derivation settings
    #[must_use]
    pub fn new(secret: Secret, cipher: Cipher) -> Self {
        Self {
            secret,
            cipher,
            deriver: Pbkdf2KeyDeriver::default(),
        }
    }

    /// Create an encrypter with custom key derivation settings
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::Key`] if the configuration is rejected.
    pub fn with_kdf_config(secret: Secret, cipher: Cipher, config: KdfConfig) -> Result<Self> {
        Ok(Self {
            secret,
            cipher,
            deriver: Pbkdf2KeyDeriver::new(config)?,
        })
    }

    /// The cipher new payloads are sealed with
    #[must_use]
    pub fn cipher(&self) -> Cipher {
        self.cipher
    }

    /// Encrypt `plaintext` into a base64 envelope
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::Key`] if key derivation fails and
    /// [`CipherError::Encryption`] if the AEAD rejects the input.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<String> {
        let mut key_salt = [0u8; KEY_SALT_BYTE_LENGTH];
        let mut nonce = vec![0u8; self.cipher.nonce_size()];
        let mut rng = rand::rng();
        rng.fill_bytes(&mut key_salt);
        rng.fill_bytes(&mut nonce);

        let keys = self.derive(&key_salt)?;
        let ciphertext = match self.cipher {
            Cipher::Aes256Gcm => seal::<Aes256Gcm>(keys.encryption_key(), &nonce, plaintext)?,
            Cipher::ChaCha20Poly1305 => {
                seal::<ChaCha20Poly1305>(keys.encryption_key(), &nonce, plaintext)?
            }
        };

        let tag = mac(
            keys.authentication_key(),
            &mac_input(PAYLOAD_VERSION, self.cipher, &nonce, &key_salt, &ciphertext),
        )?;

        tracing::trace!(cipher = %self.cipher, len = plaintext.len(), "encrypted payload");

        EncryptedPayload {
            version: PAYLOAD_VERSION.to_string(),
            cipher: self.cipher,
            nonce: hex::encode(nonce),
            key_salt: hex::encode(key_salt),
            value: hex::encode(ciphertext),
            hmac: hex::encode(tag),
        }
        .encode()
    }

    /// Decrypt an envelope produced by [`Encrypter::encrypt`]
    ///
    /// The envelope names its own cipher, so payloads sealed by an encrypter
    /// configured with a different [`Cipher`] still open.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidPayload`] for undecodable input,
    /// [`CipherError::MacMismatch`] if the envelope was altered or the secret
    /// differs, and [`CipherError::Decryption`] if the AEAD still rejects it.
    pub fn decrypt(&self, data: &str) -> Result<Vec<u8>> {
        let payload = EncryptedPayload::decode(data)?;
        let nonce = hex::decode(&payload.nonce)?;
        let key_salt = hex::decode(&payload.key_salt)?;
        let ciphertext = hex::decode(&payload.value)?;
        let tag = hex::decode(&payload.hmac)?;

        if nonce.len() != payload.cipher.nonce_size() {
            return Err(CipherError::InvalidPayload(format!(
                "nonce must be {} bytes, got {}",
                payload.cipher.nonce_size(),
                nonce.len()
            )));
        }
        if key_salt.len() != KEY_SALT_BYTE_LENGTH {
            return Err(CipherError::InvalidPayload(format!(
                "key salt must be {KEY_SALT_BYTE_LENGTH} bytes, got {}",
                key_salt.len()
            )));
        }

        let keys = self.derive(&key_salt)?;
        let expected = mac(
            keys.authentication_key(),
            &mac_input(
                &payload.version,
                payload.cipher,
                &nonce,
                &key_salt,
                &ciphertext,
            ),
        )?;

        if !bool::from(expected.ct_eq(&tag)) {
            tracing::debug!(cipher = %payload.cipher, "rejecting payload with invalid MAC");
            return Err(CipherError::MacMismatch);
        }

        match payload.cipher {
            Cipher::Aes256Gcm => open::<Aes256Gcm>(keys.encryption_key(), &nonce, &ciphertext),
            Cipher::ChaCha20Poly1305 => {
                open::<ChaCha20Poly1305>(keys.encryption_key(), &nonce, &ciphertext)
            }
        }
    }

    fn derive(&self, key_salt: &[u8]) -> Result<DerivedKeys> {
        Ok(self
            .deriver
            .derive_keys(&self.secret, key_salt, self.cipher.key_size())?)
    }
}

impl fmt::Debug for Encrypter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encrypter")
            .field("secret_type", &self.secret.secret_type())
            .field("cipher", &self.cipher)
            .field("kdf", self.deriver.config())
            .finish()
    }
}

fn seal<C: Aead + KeyInit>(key: &[u8], nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = C::new_from_slice(key).map_err(|e| CipherError::Encryption(e.to_string()))?;
    cipher
        .encrypt(Nonce::<C>::from_slice(nonce), plaintext)
        .map_err(|e| CipherError::Encryption(e.to_string()))
}

fn open<C: Aead + KeyInit>(key: &[u8], nonce: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let cipher = C::new_from_slice(key).map_err(|e| CipherError::Decryption(e.to_string()))?;
    cipher
        .decrypt(Nonce::<C>::from_slice(nonce), ciphertext)
        .map_err(|e| CipherError::Decryption(e.to_string()))
}

fn mac(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut mac = <HmacSha512 as Mac>::new_from_slice(key)
        .map_err(|e| CipherError::Encryption(format!("HMAC key rejected: {e}")))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}
