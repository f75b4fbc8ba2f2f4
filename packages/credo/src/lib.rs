//! # Credo
//!
//! JSON Web Token issuance and verification, PBKDF2 key derivation and
//! authenticated encryption, with each part behind a feature.
//!
//! ## Features
//!
//! - `jwt` - signers, token model, verification pipeline, credential factories
//! - `key` - typed secrets and the PBKDF2 key deriver
//! - `cipher` - AES-256-GCM / ChaCha20-Poly1305 encrypter (enables `key`)
//! - `full` - everything
//!
//! `jwt` and `cipher` are on by default.
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "jwt")]
//! # fn main() -> credo::jwt::JwtResult<()> {
//! use credo::jwt::{Algorithm, JwtHeader, JwtPayload, SignedJwt, UnsignedJwt, VerificationContext};
//! use credo::Credo;
//!
//! let signer = Credo::jwt().hmac(Algorithm::Hs256, "a-shared-secret")?;
//! let token = UnsignedJwt::new(
//!     JwtHeader::new(Algorithm::Hs256),
//!     JwtPayload::new().with_subject("userId"),
//! )
//! .sign(signer.as_ref())?
//! .encode();
//!
//! let jwt = SignedJwt::decode(&token)?;
//! let context = VerificationContext::new(signer).with_subject("userId");
//! assert!(Credo::jwt().verifier().verify(&jwt, &context).is_ok());
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "jwt"))]
//! # fn main() {}
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(any(feature = "jwt", feature = "key", feature = "cipher"))]
mod master;

#[cfg(any(feature = "jwt", feature = "key", feature = "cipher"))]
pub use master::Credo;

#[cfg(feature = "jwt")]
pub use master::JwtMasterBuilder;

#[cfg(feature = "key")]
pub use master::KeyMasterBuilder;

#[cfg(feature = "cipher")]
pub use master::CipherMasterBuilder;

// === Crate Re-exports ===

#[cfg(feature = "jwt")]
#[cfg_attr(docsrs, doc(cfg(feature = "jwt")))]
pub use credo_jwt as jwt;

#[cfg(feature = "key")]
#[cfg_attr(docsrs, doc(cfg(feature = "key")))]
pub use credo_key as key;

#[cfg(feature = "cipher")]
#[cfg_attr(docsrs, doc(cfg(feature = "cipher")))]
pub use credo_cipher as cipher;

#[cfg(feature = "jwt")]
#[cfg_attr(docsrs, doc(cfg(feature = "jwt")))]
pub use credo_jwt::{JwtError, JwtErrorType, JwtResult};

#[cfg(feature = "key")]
#[cfg_attr(docsrs, doc(cfg(feature = "key")))]
pub use credo_key::{KeyError, Secret, SecretType};

#[cfg(feature = "cipher")]
#[cfg_attr(docsrs, doc(cfg(feature = "cipher")))]
pub use credo_cipher::{Cipher, CipherError, Encrypter};
