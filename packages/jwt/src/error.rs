//! JWT error types
//!
//! [`JwtError`] covers misconfiguration and malformed input. Per-token
//! verification verdicts are not errors; see
//! [`crate::verification::JwtErrorType`].

use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Algorithm is not in the registry or not valid for the signer
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Token could not be split, decoded or parsed
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// Cryptographic signing failed; no token may be emitted
    #[error("Signing failed: {0}")]
    SigningFailure(String),

    /// Key material could not be used
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Subject carries no principal to issue a credential for
    #[error("Subject has no primary principal")]
    MissingPrincipal,

    /// Header or payload could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl JwtError {
    /// Create an unsupported algorithm error
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: &str) -> Self {
        JwtError::UnsupportedAlgorithm(alg.to_string())
    }

    /// Create a malformed token error
    #[inline]
    #[must_use]
    pub fn malformed(msg: &str) -> Self {
        JwtError::MalformedToken(msg.to_string())
    }

    /// Create a signing failure error
    #[inline]
    #[must_use]
    pub fn signing_failure(msg: &str) -> Self {
        JwtError::SigningFailure(msg.to_string())
    }

    /// Create an invalid key error
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: &str) -> Self {
        JwtError::InvalidKey(msg.to_string())
    }
}

impl From<serde_json::Error> for JwtError {
    fn from(err: serde_json::Error) -> Self {
        JwtError::Serialization(err.to_string())
    }
}
