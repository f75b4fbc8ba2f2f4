//! RSA-SSA-PKCS#1 v1.5 signer (RS256, RS384, RS512)

use super::Signer;
use crate::algorithm::Algorithm;
use crate::error::{JwtError, JwtResult};
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::rand_core::OsRng;
use rsa::sha2::{Sha256, Sha384, Sha512};
use rsa::signature::{RandomizedSigner, SignatureEncoding, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::fmt;

/// PKCS#1 v1.5 signing key bound to the signer's digest
#[derive(Clone)]
enum RsaSigningKey {
    Rs256(SigningKey<Sha256>),
    Rs384(SigningKey<Sha384>),
    Rs512(SigningKey<Sha512>),
}

/// PKCS#1 v1.5 verifying key bound to the signer's digest
#[derive(Clone)]
enum RsaVerifyingKey {
    Rs256(VerifyingKey<Sha256>),
    Rs384(VerifyingKey<Sha384>),
    Rs512(VerifyingKey<Sha512>),
}

/// Asymmetric signer; verification needs only the public key
#[derive(Clone)]
pub struct RsaSsaPkcsSigner {
    algorithm: Algorithm,
    verifying_key: RsaVerifyingKey,
    signing_key: Option<RsaSigningKey>,
}

impl RsaSsaPkcsSigner {
    /// Create a signer for an `RS*` algorithm
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::UnsupportedAlgorithm`] for symmetric algorithms and
    /// [`JwtError::InvalidKey`] if the private key does not belong to the
    /// public key.
    pub fn new(
        algorithm: Algorithm,
        public_key: RsaPublicKey,
        private_key: Option<RsaPrivateKey>,
    ) -> JwtResult<Self> {
        if algorithm.is_symmetric() {
            tracing::warn!(%algorithm, "RSA signer cannot use a symmetric algorithm");
            return Err(JwtError::unsupported_algorithm(algorithm.as_str()));
        }

        if let Some(private_key) = &private_key {
            if RsaPublicKey::from(private_key) != public_key {
                return Err(JwtError::invalid_key(
                    "RSA private key does not match the public key",
                ));
            }
        }

        let (verifying_key, signing_key) = match algorithm {
            Algorithm::Rs256 => (
                RsaVerifyingKey::Rs256(VerifyingKey::new(public_key)),
                private_key.map(|key| RsaSigningKey::Rs256(SigningKey::new(key))),
            ),
            Algorithm::Rs384 => (
                RsaVerifyingKey::Rs384(VerifyingKey::new(public_key)),
                private_key.map(|key| RsaSigningKey::Rs384(SigningKey::new(key))),
            ),
            Algorithm::Rs512 => (
                RsaVerifyingKey::Rs512(VerifyingKey::new(public_key)),
                private_key.map(|key| RsaSigningKey::Rs512(SigningKey::new(key))),
            ),
            other => return Err(JwtError::unsupported_algorithm(other.as_str())),
        };

        Ok(Self {
            algorithm,
            verifying_key,
            signing_key,
        })
    }

    /// Create a signing and verifying signer from a private key alone
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::UnsupportedAlgorithm`] for symmetric algorithms.
    pub fn from_private_key(algorithm: Algorithm, private_key: RsaPrivateKey) -> JwtResult<Self> {
        let public_key = RsaPublicKey::from(&private_key);
        Self::new(algorithm, public_key, Some(private_key))
    }

    /// Create a signer from PEM key material
    ///
    /// Public keys may be SPKI (`PUBLIC KEY`) or PKCS#1 (`RSA PUBLIC KEY`);
    /// private keys may be PKCS#8 (`PRIVATE KEY`) or PKCS#1 (`RSA PRIVATE KEY`).
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::InvalidKey`] when a key cannot be parsed, plus the
    /// conditions of [`RsaSsaPkcsSigner::new`].
    pub fn from_pem(
        algorithm: Algorithm,
        public_key_pem: &str,
        private_key_pem: Option<&str>,
    ) -> JwtResult<Self> {
        let public_key = RsaPublicKey::from_public_key_pem(public_key_pem)
            .or_else(|_| RsaPublicKey::from_pkcs1_pem(public_key_pem))
            .map_err(|e| JwtError::InvalidKey(format!("Invalid RSA public key: {e}")))?;

        let private_key = private_key_pem
            .map(|pem| {
                RsaPrivateKey::from_pkcs8_pem(pem)
                    .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
                    .map_err(|e| JwtError::InvalidKey(format!("Invalid RSA private key: {e}")))
            })
            .transpose()?;

        Self::new(algorithm, public_key, private_key)
    }

    /// Create a signer from DER key material (SPKI public, PKCS#8 private)
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::InvalidKey`] when a key cannot be parsed, plus the
    /// conditions of [`RsaSsaPkcsSigner::new`].
    pub fn from_der(
        algorithm: Algorithm,
        public_key_der: &[u8],
        private_key_der: Option<&[u8]>,
    ) -> JwtResult<Self> {
        let public_key = RsaPublicKey::from_public_key_der(public_key_der)
            .map_err(|e| JwtError::InvalidKey(format!("Invalid RSA public key: {e}")))?;

        let private_key = private_key_der
            .map(|der| {
                RsaPrivateKey::from_pkcs8_der(der)
                    .map_err(|e| JwtError::InvalidKey(format!("Invalid RSA private key: {e}")))
            })
            .transpose()?;

        Self::new(algorithm, public_key, private_key)
    }

    /// Whether this signer can produce signatures
    #[must_use]
    pub fn can_sign(&self) -> bool {
        self.signing_key.is_some()
    }
}

/// Sign with RSA blinding, drawing the blinding factor from the OS
fn sign_blinded<K>(signing_key: &K, data: &[u8]) -> JwtResult<Vec<u8>>
where
    K: RandomizedSigner<Signature>,
{
    let signature = signing_key
        .try_sign_with_rng(&mut OsRng, data)
        .map_err(|e| JwtError::SigningFailure(format!("RSA signing failed: {e}")))?;
    Ok(signature.to_vec())
}

fn verify_with<K>(verifying_key: &K, data: &[u8], signature: &[u8]) -> bool
where
    K: Verifier<Signature>,
{
    let Ok(signature) = Signature::try_from(signature) else {
        return false;
    };
    verifying_key.verify(data, &signature).is_ok()
}

impl Signer for RsaSsaPkcsSigner {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn sign(&self, data: &[u8]) -> JwtResult<Vec<u8>> {
        match &self.signing_key {
            Some(RsaSigningKey::Rs256(key)) => sign_blinded(key, data),
            Some(RsaSigningKey::Rs384(key)) => sign_blinded(key, data),
            Some(RsaSigningKey::Rs512(key)) => sign_blinded(key, data),
            None => {
                tracing::warn!(algorithm = %self.algorithm, "RSA signer has no private key");
                Err(JwtError::signing_failure(
                    "private key required to sign with an RSA signer",
                ))
            }
        }
    }

    fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        if signature.is_empty() {
            return false;
        }

        match &self.verifying_key {
            RsaVerifyingKey::Rs256(key) => verify_with(key, data, signature),
            RsaVerifyingKey::Rs384(key) => verify_with(key, data, signature),
            RsaVerifyingKey::Rs512(key) => verify_with(key, data, signature),
        }
    }
}

impl fmt::Debug for RsaSsaPkcsSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaSsaPkcsSigner")
            .field("algorithm", &self.algorithm)
            .field("can_sign", &self.can_sign())
            .finish_non_exhaustive()
    }
}
