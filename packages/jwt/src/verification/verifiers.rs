//! Individual claim and signature checks

use super::{JwtErrorType, VerificationContext, VerificationResult, Verifier};
use crate::token::SignedJwt;

/// Checks the signature with the context's signer
///
/// The header's `alg` must name the signer's algorithm; a token cannot pick
/// its own verification primitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureVerifier;

impl Verifier for SignatureVerifier {
    fn verify(&self, jwt: &SignedJwt, context: &VerificationContext) -> VerificationResult {
        let signer = context.signer();

        if jwt.header().algorithm() != signer.algorithm() {
            return Err(JwtErrorType::SignatureInvalid);
        }

        if !signer.verify(jwt.unsigned_value().as_bytes(), jwt.signature()) {
            return Err(JwtErrorType::SignatureInvalid);
        }

        Ok(())
    }
}

/// Rejects tokens past their `exp`
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpirationVerifier;

impl Verifier for ExpirationVerifier {
    fn verify(&self, jwt: &SignedJwt, context: &VerificationContext) -> VerificationResult {
        let Some(valid_to) = jwt.payload().valid_to() else {
            return Ok(());
        };

        match valid_to.checked_add_signed(context.leeway()) {
            Some(limit) if context.now() > limit => Err(JwtErrorType::Expired),
            _ => Ok(()),
        }
    }
}

/// Rejects tokens before their `nbf`
#[derive(Debug, Clone, Copy, Default)]
pub struct NotBeforeVerifier;

impl Verifier for NotBeforeVerifier {
    fn verify(&self, jwt: &SignedJwt, context: &VerificationContext) -> VerificationResult {
        let Some(valid_from) = jwt.payload().valid_from() else {
            return Ok(());
        };

        match valid_from.checked_sub_signed(context.leeway()) {
            Some(limit) if context.now() < limit => Err(JwtErrorType::NotActivated),
            _ => Ok(()),
        }
    }
}

/// Requires `iss` to equal the expected issuer
#[derive(Debug, Clone, Copy, Default)]
pub struct IssuerVerifier;

impl Verifier for IssuerVerifier {
    fn verify(&self, jwt: &SignedJwt, context: &VerificationContext) -> VerificationResult {
        match context.issuer() {
            Some(expected) if jwt.payload().issuer() != Some(expected) => {
                Err(JwtErrorType::IssuerInvalid)
            }
            _ => Ok(()),
        }
    }
}

/// Requires `aud` to share at least one value with the accepted audiences
#[derive(Debug, Clone, Copy, Default)]
pub struct AudienceVerifier;

impl Verifier for AudienceVerifier {
    fn verify(&self, jwt: &SignedJwt, context: &VerificationContext) -> VerificationResult {
        let accepted = context.audience();
        if accepted.is_empty() {
            return Ok(());
        }

        if jwt
            .payload()
            .audience()
            .iter()
            .any(|aud| accepted.contains(aud))
        {
            Ok(())
        } else {
            Err(JwtErrorType::AudienceInvalid)
        }
    }
}

/// Requires `sub` to equal the expected subject
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectVerifier;

impl Verifier for SubjectVerifier {
    fn verify(&self, jwt: &SignedJwt, context: &VerificationContext) -> VerificationResult {
        match context.subject() {
            Some(expected) if jwt.payload().subject() != Some(expected) => {
                Err(JwtErrorType::SubjectInvalid)
            }
            _ => Ok(()),
        }
    }
}
