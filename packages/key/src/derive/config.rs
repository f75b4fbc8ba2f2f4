//! Key Derivation Function Configuration

use serde::{Deserialize, Serialize};

/// Required salt size in bytes for every derivation
pub const KEY_SALT_BYTE_LENGTH: usize = 32;

/// Largest key length a single derivation will produce, per key
pub const MAX_DERIVED_KEY_BYTE_LENGTH: usize = 1 << 20;

/// Default number of PBKDF2 iterations applied to passwords
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 25_000;

/// Key derivation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KdfConfig {
    /// Number of PBKDF2 iterations used when stretching a password
    pub iterations: u32,
}

impl KdfConfig {
    /// Create a configuration with a custom iteration count
    #[must_use]
    pub fn with_iterations(iterations: u32) -> Self {
        Self { iterations }
    }

    /// Cheap configuration for tests and benchmarks
    ///
    /// Not suitable for stretching real passwords.
    #[must_use]
    pub fn fast() -> Self {
        Self { iterations: 1_000 }
    }
}

impl Default for KdfConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_PBKDF2_ITERATIONS,
        }
    }
}
