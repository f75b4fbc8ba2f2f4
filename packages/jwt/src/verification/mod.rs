//! Verification pipeline
//!
//! A decoded [`SignedJwt`] is accepted only when every configured
//! [`Verifier`] passes. Rejections are values, not errors: the caller gets the
//! first failing [`JwtErrorType`] and decides what to do with it.

mod context;
mod verifiers;

pub use context::VerificationContext;
pub use verifiers::{
    AudienceVerifier, ExpirationVerifier, IssuerVerifier, NotBeforeVerifier, SignatureVerifier,
    SubjectVerifier,
};

use crate::token::SignedJwt;
use std::fmt;

/// Why a token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum JwtErrorType {
    /// `exp` is in the past
    #[error("token has expired")]
    Expired,
    /// `nbf` is in the future
    #[error("token is not active yet")]
    NotActivated,
    /// `iss` is not the expected issuer
    #[error("token issuer is invalid")]
    IssuerInvalid,
    /// `aud` names none of the accepted audiences
    #[error("token audience is invalid")]
    AudienceInvalid,
    /// `sub` is not the expected subject
    #[error("token subject is invalid")]
    SubjectInvalid,
    /// Signature does not verify under the configured signer
    #[error("token signature is invalid")]
    SignatureInvalid,
}

impl JwtErrorType {
    /// Stable code for logs and API responses
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            JwtErrorType::Expired => "EXPIRED",
            JwtErrorType::NotActivated => "NOT_ACTIVATED",
            JwtErrorType::IssuerInvalid => "ISSUER_INVALID",
            JwtErrorType::AudienceInvalid => "AUDIENCE_INVALID",
            JwtErrorType::SubjectInvalid => "SUBJECT_INVALID",
            JwtErrorType::SignatureInvalid => "SIGNATURE_INVALID",
        }
    }
}

/// Outcome of a single check
pub type VerificationResult = Result<(), JwtErrorType>;

/// One check over a signed token
pub trait Verifier: Send + Sync {
    /// Accept the token or report why it fails this check
    fn verify(&self, jwt: &SignedJwt, context: &VerificationContext) -> VerificationResult;
}

/// Runs verifiers in order and stops at the first rejection
///
/// The default order is signature, expiration, not-before, issuer, audience,
/// subject.
pub struct JwtVerifier {
    verifiers: Vec<Box<dyn Verifier>>,
}

impl JwtVerifier {
    /// Verifier with the default checks
    #[must_use]
    pub fn new() -> Self {
        Self::with_verifiers(vec![
            Box::new(SignatureVerifier),
            Box::new(ExpirationVerifier),
            Box::new(NotBeforeVerifier),
            Box::new(IssuerVerifier),
            Box::new(AudienceVerifier),
            Box::new(SubjectVerifier),
        ])
    }

    /// Verifier running exactly `verifiers`, in the given order
    #[must_use]
    pub fn with_verifiers(verifiers: Vec<Box<dyn Verifier>>) -> Self {
        Self { verifiers }
    }

    /// Verify `jwt`, returning the first failing check
    ///
    /// # Errors
    ///
    /// Returns the [`JwtErrorType`] of the first verifier that rejects.
    pub fn verify(&self, jwt: &SignedJwt, context: &VerificationContext) -> VerificationResult {
        for verifier in &self.verifiers {
            if let Err(error) = verifier.verify(jwt, context) {
                tracing::debug!(reason = error.as_str(), "token rejected");
                return Err(error);
            }
        }
        Ok(())
    }

    /// Run every check and collect all failures in order
    #[must_use]
    pub fn verify_all(&self, jwt: &SignedJwt, context: &VerificationContext) -> Vec<JwtErrorType> {
        let errors: Vec<JwtErrorType> = self
            .verifiers
            .iter()
            .filter_map(|verifier| verifier.verify(jwt, context).err())
            .collect();

        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "token rejected by multiple checks");
        }
        errors
    }
}

impl Default for JwtVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for JwtVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtVerifier")
            .field("verifiers", &self.verifiers.len())
            .finish()
    }
}
