//! Error handling for secrets and key derivation

use thiserror::Error;

/// Key-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Salt does not have the length the deriver requires
    #[error("Invalid salt length: expected {expected} bytes, got {actual}")]
    InvalidSaltLength {
        /// Expected salt size in bytes
        expected: usize,
        /// Actual salt size in bytes
        actual: usize,
    },

    /// Passwords must contain at least one byte
    #[error("Password secrets cannot be empty")]
    EmptyPassword,

    /// Requested derived key length is unusable
    #[error("Invalid key length: {0}")]
    InvalidKeyLength(String),

    /// PBKDF2 iteration count is unusable
    #[error("Invalid iteration count: {0}")]
    InvalidIterations(String),
}

impl KeyError {
    /// Create an invalid key length error
    pub fn invalid_key_length(msg: impl Into<String>) -> Self {
        Self::InvalidKeyLength(msg.into())
    }
}

/// Result type for key operations
pub type Result<T> = std::result::Result<T, KeyError>;
