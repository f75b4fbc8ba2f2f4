//! JWT Master Builder

use credo_jwt::{Algorithm, HmacSigner, JwtResult, JwtVerifier, RsaSsaPkcsSigner, Signer};
use std::sync::Arc;

/// Master builder for JWT operations
#[derive(Debug, Clone, Copy)]
pub struct JwtMasterBuilder;

impl JwtMasterBuilder {
    /// HMAC signer for an `HS*` algorithm
    ///
    /// # Errors
    ///
    /// See [`HmacSigner::new`].
    pub fn hmac(self, algorithm: Algorithm, key: impl Into<Vec<u8>>) -> JwtResult<Arc<dyn Signer>> {
        Ok(Arc::new(HmacSigner::new(algorithm, key)?))
    }

    /// RSA signer from PEM keys; omit the private key for verify-only use
    ///
    /// # Errors
    ///
    /// See [`RsaSsaPkcsSigner::from_pem`].
    pub fn rsa_pem(
        self,
        algorithm: Algorithm,
        public_key_pem: &str,
        private_key_pem: Option<&str>,
    ) -> JwtResult<Arc<dyn Signer>> {
        Ok(Arc::new(RsaSsaPkcsSigner::from_pem(
            algorithm,
            public_key_pem,
            private_key_pem,
        )?))
    }

    /// Verifier with the default checks
    #[must_use]
    pub fn verifier(self) -> JwtVerifier {
        JwtVerifier::new()
    }
}
