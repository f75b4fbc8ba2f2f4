//! # Credo Cipher
//!
//! Authenticated symmetric encryption on top of [`credo_key`]: a secret is
//! stretched into separate encryption and authentication keys per message,
//! the plaintext is sealed with AES-256-GCM or ChaCha20-Poly1305, and the
//! envelope is MACed with HMAC-SHA512.
//!
//! ## Quick Start
//!
//! ```rust
//! use credo_cipher::{Cipher, Encrypter};
//! use credo_key::{KdfConfig, Secret};
//!
//! # fn main() -> credo_cipher::Result<()> {
//! let secret = Secret::password("correct horse battery staple")?;
//! let encrypter =
//!     Encrypter::with_kdf_config(secret, Cipher::ChaCha20Poly1305, KdfConfig::fast())?;
//!
//! let encrypted = encrypter.encrypt(b"attack at dawn")?;
//! assert_eq!(encrypter.decrypt(&encrypted)?, b"attack at dawn");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod encrypter;
pub mod error;

pub use algorithm::Cipher;
pub use encrypter::{Encrypter, PAYLOAD_VERSION};
pub use error::{CipherError, Result};
