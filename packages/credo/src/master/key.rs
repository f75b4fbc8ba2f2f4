//! Key Master Builder

use credo_key::{KdfConfig, Pbkdf2KeyDeriver, Result, Secret};

/// Master builder for secrets and key derivation
#[derive(Debug, Clone, Copy)]
pub struct KeyMasterBuilder;

impl KeyMasterBuilder {
    /// Password secret
    ///
    /// # Errors
    ///
    /// See [`Secret::password`].
    pub fn password(self, value: impl Into<Vec<u8>>) -> Result<Secret> {
        Secret::password(value)
    }

    /// Key secret
    #[must_use]
    pub fn secret_key(self, value: impl Into<Vec<u8>>) -> Secret {
        Secret::key(value)
    }

    /// PBKDF2 deriver with the given settings
    ///
    /// # Errors
    ///
    /// See [`Pbkdf2KeyDeriver::new`].
    pub fn deriver(self, config: KdfConfig) -> Result<Pbkdf2KeyDeriver> {
        Pbkdf2KeyDeriver::new(config)
    }
}
