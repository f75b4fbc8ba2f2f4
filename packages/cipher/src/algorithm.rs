//! Cipher algorithm definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported AEAD ciphers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cipher {
    /// AES-256-GCM
    ///
    /// - 256-bit key
    /// - 96-bit nonce
    /// - 128-bit authentication tag
    #[default]
    #[serde(rename = "aes-256-gcm")]
    Aes256Gcm,

    /// ChaCha20-Poly1305
    ///
    /// - 256-bit key
    /// - 96-bit nonce
    /// - 128-bit authentication tag
    #[serde(rename = "chacha20-poly1305")]
    ChaCha20Poly1305,
}

impl Cipher {
    /// Identifier written into encrypted payloads
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aes256Gcm => "aes-256-gcm",
            Self::ChaCha20Poly1305 => "chacha20-poly1305",
        }
    }

    /// Key size in bytes
    #[must_use]
    pub const fn key_size(&self) -> usize {
        32
    }

    /// Nonce size in bytes
    #[must_use]
    pub const fn nonce_size(&self) -> usize {
        12
    }
}

impl fmt::Display for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
