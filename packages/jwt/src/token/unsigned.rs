use super::{JwtHeader, JwtPayload, SignedJwt};
use crate::error::{JwtError, JwtResult};
use crate::signers::Signer;

/// Header and payload awaiting a signature
#[derive(Debug, Clone, PartialEq)]
pub struct UnsignedJwt {
    header: JwtHeader,
    payload: JwtPayload,
}

impl UnsignedJwt {
    /// Compose a header and payload
    #[must_use]
    pub fn new(header: JwtHeader, payload: JwtPayload) -> Self {
        Self { header, payload }
    }

    /// The header
    #[must_use]
    pub fn header(&self) -> &JwtHeader {
        &self.header
    }

    /// The payload
    #[must_use]
    pub fn payload(&self) -> &JwtPayload {
        &self.payload
    }

    /// `base64url(header) "." base64url(payload)`, the exact bytes that get signed
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::Serialization`] if either part cannot be serialized.
    pub fn unsigned_value(&self) -> JwtResult<String> {
        Ok(format!("{}.{}", self.header.encode()?, self.payload.encode()?))
    }

    /// Sign with `signer`, which must be bound to the header's algorithm
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::UnsupportedAlgorithm`] when the signer's algorithm
    /// differs from the header's, or the signer's error if signing fails.
    pub fn sign<S: Signer + ?Sized>(self, signer: &S) -> JwtResult<SignedJwt> {
        if signer.algorithm() != self.header.algorithm() {
            tracing::warn!(
                header = %self.header.algorithm(),
                signer = %signer.algorithm(),
                "signer algorithm does not match token header"
            );
            return Err(JwtError::UnsupportedAlgorithm(format!(
                "signer uses {} but header declares {}",
                signer.algorithm(),
                self.header.algorithm()
            )));
        }

        let unsigned_value = self.unsigned_value()?;
        let signature = signer.sign(unsigned_value.as_bytes())?;
        Ok(SignedJwt::from_parts(self, unsigned_value, signature))
    }
}
