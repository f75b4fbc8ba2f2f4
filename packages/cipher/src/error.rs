//! Cipher error types

use credo_key::KeyError;
use thiserror::Error;

/// Cipher-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Keys could not be derived from the secret
    #[error("Key derivation error: {0}")]
    Key(#[from] KeyError),

    /// Encryption operation failed
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Decryption operation failed
    #[error("Decryption error: {0}")]
    Decryption(String),

    /// Ciphertext envelope could not be decoded or has unexpected fields
    #[error("Invalid encrypted payload: {0}")]
    InvalidPayload(String),

    /// Envelope MAC does not match; the payload was altered or the secret is wrong
    #[error("MAC verification failed")]
    MacMismatch,
}

impl From<hex::FromHexError> for CipherError {
    fn from(err: hex::FromHexError) -> Self {
        CipherError::InvalidPayload(format!("Hex decode error: {err}"))
    }
}

impl From<base64::DecodeError> for CipherError {
    fn from(err: base64::DecodeError) -> Self {
        CipherError::InvalidPayload(format!("Base64 decode error: {err}"))
    }
}

impl From<serde_json::Error> for CipherError {
    fn from(err: serde_json::Error) -> Self {
        CipherError::InvalidPayload(format!("JSON error: {err}"))
    }
}

/// Result type for cipher operations
pub type Result<T> = std::result::Result<T, CipherError>;
