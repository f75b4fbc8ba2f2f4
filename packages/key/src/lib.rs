//! # Credo Key Derivation
//!
//! Typed secrets and the PBKDF2 deriver that turns one secret into an
//! encryption key and an authentication key.
//!
//! ## Quick Start
//!
//! ```rust
//! use credo_key::{KdfConfig, KeyDeriver, Pbkdf2KeyDeriver, KEY_SALT_BYTE_LENGTH};
//!
//! # fn main() -> Result<(), credo_key::KeyError> {
//! let deriver = Pbkdf2KeyDeriver::new(KdfConfig::fast())?;
//! let salt = [0u8; KEY_SALT_BYTE_LENGTH]; // In production, generate this randomly
//!
//! let keys = deriver.derive_keys_from_password(b"correct horse", &salt, 32)?;
//! assert_eq!(keys.encryption_key().len(), 32);
//! assert_eq!(keys.authentication_key().len(), 32);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod derive;
pub mod error;
pub mod secret;

pub use derive::{
    DerivedKeys, KdfConfig, KeyDeriver, Pbkdf2KeyDeriver, DEFAULT_PBKDF2_ITERATIONS,
    KEY_SALT_BYTE_LENGTH, MAX_DERIVED_KEY_BYTE_LENGTH,
};
pub use error::{KeyError, Result};
pub use secret::{Secret, SecretType};
