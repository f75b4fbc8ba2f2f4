//! # Credo JWT
//!
//! JSON Web Token issuance and verification with pluggable signers.
//!
//! - [`Algorithm`]: the closed registry of `HS*` and `RS*` identifiers
//! - [`signers`]: [`HmacSigner`] and [`RsaSsaPkcsSigner`] behind the [`Signer`] trait
//! - [`token`]: header, payload and the compact `header.payload.signature` form
//! - [`verification`]: independent claim checks composed by [`JwtVerifier`]
//! - [`credentials`]: access and refresh token factories for authenticated subjects
//!
//! ## Quick Start
//!
//! ```rust
//! use credo_jwt::{
//!     Algorithm, HmacSigner, JwtHeader, JwtPayload, JwtVerifier, SignedJwt, UnsignedJwt,
//!     VerificationContext,
//! };
//! use std::sync::Arc;
//!
//! # fn main() -> credo_jwt::JwtResult<()> {
//! let signer = Arc::new(HmacSigner::new(Algorithm::Hs256, "a-shared-secret")?);
//!
//! let token = UnsignedJwt::new(
//!     JwtHeader::new(Algorithm::Hs256),
//!     JwtPayload::new().with_issuer("foo").with_subject("userId"),
//! )
//! .sign(signer.as_ref())?
//! .encode();
//!
//! let jwt = SignedJwt::decode(&token)?;
//! let context = VerificationContext::new(signer).with_issuer("foo");
//! assert!(JwtVerifier::new().verify(&jwt, &context).is_ok());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod credentials;
pub mod error;
pub mod signers;
pub mod token;
pub mod verification;

pub use algorithm::Algorithm;
pub use credentials::{
    AccessTokenCredentialFactory, Credential, CredentialFactory, CredentialType, Principal,
    RefreshTokenCredentialFactory, RoleRepository, Subject, TokenOptions, User, UserRepository,
};
pub use error::{JwtError, JwtResult};
pub use signers::{HmacSigner, RsaSsaPkcsSigner, Signer};
pub use token::{JwtHeader, JwtPayload, SignedJwt, UnsignedJwt};
pub use verification::{JwtErrorType, JwtVerifier, VerificationContext, Verifier};
