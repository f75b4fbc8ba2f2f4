//! Signers
//!
//! A [`Signer`] is bound to exactly one [`Algorithm`] at construction. The
//! symmetric variant only accepts `HS*` algorithms and the asymmetric variant
//! only `RS*`, so a token can never be checked with a primitive its header
//! did not name.

mod hmac;
mod rsa;

pub use self::hmac::HmacSigner;
pub use self::rsa::RsaSsaPkcsSigner;

use crate::algorithm::Algorithm;
use crate::error::JwtResult;
use std::sync::Arc;

/// Signing capability shared by symmetric and asymmetric signers.
///
/// Implementations must be thread-safe (Send + Sync) and hold no per-call
/// mutable state.
pub trait Signer: Send + Sync {
    /// Algorithm this signer is bound to.
    fn algorithm(&self) -> Algorithm;

    /// Sign `data`, returning the raw signature bytes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::JwtError::SigningFailure`] when the primitive fails or
    /// no signing key is available.
    fn sign(&self, data: &[u8]) -> JwtResult<Vec<u8>>;

    /// Check `signature` over `data`. An empty signature is never valid.
    fn verify(&self, data: &[u8], signature: &[u8]) -> bool;
}

impl<T: Signer + ?Sized> Signer for Arc<T> {
    fn algorithm(&self) -> Algorithm {
        (**self).algorithm()
    }

    fn sign(&self, data: &[u8]) -> JwtResult<Vec<u8>> {
        (**self).sign(data)
    }

    fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        (**self).verify(data, signature)
    }
}

impl<T: Signer + ?Sized> Signer for Box<T> {
    fn algorithm(&self) -> Algorithm {
        (**self).algorithm()
    }

    fn sign(&self, data: &[u8]) -> JwtResult<Vec<u8>> {
        (**self).sign(data)
    }

    fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        (**self).verify(data, signature)
    }
}
