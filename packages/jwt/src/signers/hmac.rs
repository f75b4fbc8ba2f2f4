//! HMAC-SHA2 signer (HS256, HS384, HS512)

use super::Signer;
use crate::algorithm::Algorithm;
use crate::error::{JwtError, JwtResult};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Symmetric signer using a shared secret
#[derive(Clone)]
pub struct HmacSigner {
    algorithm: Algorithm,
    key: Zeroizing<Vec<u8>>,
}

impl HmacSigner {
    /// Create a signer for an `HS*` algorithm
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::UnsupportedAlgorithm`] for asymmetric algorithms and
    /// [`JwtError::InvalidKey`] for an empty key.
    pub fn new(algorithm: Algorithm, key: impl Into<Vec<u8>>) -> JwtResult<Self> {
        if !algorithm.is_symmetric() {
            tracing::warn!(%algorithm, "HMAC signer cannot use an asymmetric algorithm");
            return Err(JwtError::unsupported_algorithm(algorithm.as_str()));
        }

        let key = Zeroizing::new(key.into());
        if key.is_empty() {
            return Err(JwtError::invalid_key("HMAC key must not be empty"));
        }

        Ok(Self { algorithm, key })
    }

    fn compute(&self, data: &[u8]) -> JwtResult<Vec<u8>> {
        match self.algorithm {
            Algorithm::Hs256 => mac::<HmacSha256>(&self.key, data),
            Algorithm::Hs384 => mac::<HmacSha384>(&self.key, data),
            Algorithm::Hs512 => mac::<HmacSha512>(&self.key, data),
            other => Err(JwtError::unsupported_algorithm(other.as_str())),
        }
    }
}

fn mac<M: Mac + KeyInit>(key: &[u8], data: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = <M as Mac>::new_from_slice(key)
        .map_err(|_| JwtError::invalid_key("Invalid HMAC key"))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

impl Signer for HmacSigner {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn sign(&self, data: &[u8]) -> JwtResult<Vec<u8>> {
        self.compute(data)
    }

    fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        if signature.is_empty() {
            return false;
        }

        match self.compute(data) {
            Ok(expected) => expected.as_slice().ct_eq(signature).into(),
            Err(_) => false,
        }
    }
}

impl fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSigner")
            .field("algorithm", &self.algorithm)
            .field("key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    // RFC 4231 test case 2
    const KEY: &[u8] = b"Jefe";
    const DATA: &[u8] = b"what do ya want for nothing?";

    #[test]
    fn rfc4231_hs256() {
        let signer = HmacSigner::new(Algorithm::Hs256, KEY).unwrap();
        assert_eq!(
            signer.sign(DATA).unwrap(),
            hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
        );
    }

    #[test]
    fn rfc4231_hs384() {
        let signer = HmacSigner::new(Algorithm::Hs384, KEY).unwrap();
        assert_eq!(
            signer.sign(DATA).unwrap(),
            hex!(
                "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e"
                "8e2240ca5e69e2c78b3239ecfab21649"
            )
        );
    }

    #[test]
    fn rfc4231_hs512() {
        let signer = HmacSigner::new(Algorithm::Hs512, KEY).unwrap();
        assert_eq!(
            signer.sign(DATA).unwrap(),
            hex!(
                "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554"
                "9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
            )
        );
    }

    #[test]
    fn rejects_asymmetric_algorithms() {
        for alg in [Algorithm::Rs256, Algorithm::Rs384, Algorithm::Rs512] {
            assert_eq!(
                HmacSigner::new(alg, KEY).unwrap_err(),
                JwtError::UnsupportedAlgorithm(alg.as_str().to_string())
            );
        }
    }

    #[test]
    fn rejects_empty_key() {
        assert!(matches!(
            HmacSigner::new(Algorithm::Hs256, Vec::new()),
            Err(JwtError::InvalidKey(_))
        ));
    }

    #[test]
    fn truncated_signature_fails() {
        let signer = HmacSigner::new(Algorithm::Hs256, KEY).unwrap();
        let signature = signer.sign(DATA).unwrap();
        assert!(!signer.verify(DATA, &signature[..31]));
    }

    #[test]
    fn debug_hides_key() {
        let signer = HmacSigner::new(Algorithm::Hs256, "super-secret").unwrap();
        assert!(!format!("{signer:?}").contains("super-secret"));
    }
}
