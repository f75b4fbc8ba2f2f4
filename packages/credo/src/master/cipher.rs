//! Cipher Master Builder
//!
//! Master builder for encrypters (AES, `ChaCha20`)

use credo_cipher::{Cipher, Encrypter};
use credo_key::Secret;

/// Master builder for cipher operations
#[derive(Debug, Clone, Copy)]
pub struct CipherMasterBuilder;

impl CipherMasterBuilder {
    /// AES-256-GCM encrypter
    #[must_use]
    pub fn aes(self, secret: Secret) -> Encrypter {
        Encrypter::new(secret, Cipher::Aes256Gcm)
    }

    /// ChaCha20-Poly1305 encrypter
    #[must_use]
    pub fn chacha20(self, secret: Secret) -> Encrypter {
        Encrypter::new(secret, Cipher::ChaCha20Poly1305)
    }
}
