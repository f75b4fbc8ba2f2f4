//! JWT credential factories

use super::{
    Credential, CredentialFactory, CredentialType, RoleRepository, Subject, TokenOptions,
    UserRepository,
};
use crate::error::{JwtError, JwtResult};
use crate::signers::Signer;
use crate::token::{JwtHeader, JwtPayload, UnsignedJwt};
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use std::fmt;
use std::sync::Arc;

/// Value key a token credential stores its compact token under
pub const TOKEN_VALUE_KEY: &str = "token";

const JTI_BYTE_LENGTH: usize = 16;

/// Adds factory-specific claims before a token is signed
pub trait ClaimsExtension: Send + Sync {
    /// Insert custom claims for `subject` into `payload`
    ///
    /// # Errors
    ///
    /// Implementations may fail if a claim cannot be produced.
    fn add_custom_claims(&self, payload: &mut JwtPayload, subject: &Subject) -> JwtResult<()>;
}

/// Extension that adds nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCustomClaims;

impl ClaimsExtension for NoCustomClaims {
    fn add_custom_claims(&self, _payload: &mut JwtPayload, _subject: &Subject) -> JwtResult<()> {
        Ok(())
    }
}

/// Shared issuance template
///
/// Builds the registered claims from [`TokenOptions`], lets the extension add
/// its own, signs, and wraps the compact token in a [`Credential`].
pub struct JwtCredentialFactory<E> {
    signer: Arc<dyn Signer>,
    options: TokenOptions,
    credential_type: CredentialType,
    extension: E,
}

impl<E: ClaimsExtension> JwtCredentialFactory<E> {
    /// Create a factory issuing `credential_type` credentials
    #[must_use]
    pub fn new(
        signer: Arc<dyn Signer>,
        options: TokenOptions,
        credential_type: CredentialType,
        extension: E,
    ) -> Self {
        Self {
            signer,
            options,
            credential_type,
            extension,
        }
    }

    /// Issuance settings
    #[must_use]
    pub fn options(&self) -> &TokenOptions {
        &self.options
    }

    /// Issue a credential as of `now`
    ///
    /// # Errors
    ///
    /// [`JwtError::MissingPrincipal`] for a subject without principals,
    /// [`JwtError::Serialization`] if an offset overflows the timestamp
    /// range, or any signing error.
    pub fn create_credential_at(
        &self,
        subject: &Subject,
        now: DateTime<Utc>,
    ) -> JwtResult<Credential> {
        let principal = subject
            .primary_principal()
            .ok_or(JwtError::MissingPrincipal)?;

        let mut payload = JwtPayload::new()
            .with_subject(principal.id())
            .with_audience(self.options.audience.iter().cloned())
            .with_issued_at(now)
            .with_valid_from(offset(now, self.options.valid_from_seconds)?)
            .with_valid_to(offset(now, self.options.valid_to_seconds)?)
            .with_id(hex::encode(rand::random::<[u8; JTI_BYTE_LENGTH]>()));

        if let Some(issuer) = &self.options.issuer {
            payload = payload.with_issuer(issuer.clone());
        }

        self.extension.add_custom_claims(&mut payload, subject)?;

        let header = JwtHeader::new(self.signer.algorithm());
        let token = UnsignedJwt::new(header, payload)
            .sign(self.signer.as_ref())
            .map_err(|e| {
                tracing::warn!(error = %e, "failed to sign credential");
                e
            })?
            .encode();

        tracing::debug!(
            credential_type = self.credential_type.as_str(),
            algorithm = %self.signer.algorithm(),
            "issued credential"
        );

        Ok(Credential::new(self.credential_type).with_value(TOKEN_VALUE_KEY, token))
    }
}

impl<E: ClaimsExtension> CredentialFactory for JwtCredentialFactory<E> {
    fn create_credential_for_subject(&self, subject: &Subject) -> JwtResult<Credential> {
        self.create_credential_at(subject, Utc::now())
    }
}

impl<E> fmt::Debug for JwtCredentialFactory<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtCredentialFactory")
            .field("algorithm", &self.signer.algorithm())
            .field("options", &self.options)
            .field("credential_type", &self.credential_type)
            .finish_non_exhaustive()
    }
}

fn offset(now: DateTime<Utc>, seconds: i64) -> JwtResult<DateTime<Utc>> {
    Duration::try_seconds(seconds)
        .and_then(|delta| now.checked_add_signed(delta))
        .ok_or_else(|| JwtError::Serialization(format!("offset of {seconds}s is out of range")))
}

/// Adds `roles` and `user.username` from the repositories
#[derive(Clone)]
pub struct AccessTokenClaims {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleRepository>,
}

impl AccessTokenClaims {
    /// Create the extension
    #[must_use]
    pub fn new(users: Arc<dyn UserRepository>, roles: Arc<dyn RoleRepository>) -> Self {
        Self { users, roles }
    }
}

impl ClaimsExtension for AccessTokenClaims {
    fn add_custom_claims(&self, payload: &mut JwtPayload, subject: &Subject) -> JwtResult<()> {
        let id = subject
            .primary_principal()
            .ok_or(JwtError::MissingPrincipal)?
            .id();

        let roles = self.roles.get_role_names_for_subject(id);
        // Missing user yields an empty username
        let username = self
            .users
            .get_by_id(id)
            .map(|user| user.username().to_owned())
            .unwrap_or_default();

        payload.insert_claim("roles", json!(roles));
        payload.insert_claim("user", json!({ "username": username }));
        Ok(())
    }
}

impl fmt::Debug for AccessTokenClaims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessTokenClaims").finish_non_exhaustive()
    }
}

/// Issues `JWT_ACCESS_TOKEN` credentials carrying roles and username
#[derive(Debug)]
pub struct AccessTokenCredentialFactory {
    inner: JwtCredentialFactory<AccessTokenClaims>,
}

impl AccessTokenCredentialFactory {
    /// Create the factory
    #[must_use]
    pub fn new(
        signer: Arc<dyn Signer>,
        options: TokenOptions,
        users: Arc<dyn UserRepository>,
        roles: Arc<dyn RoleRepository>,
    ) -> Self {
        Self {
            inner: JwtCredentialFactory::new(
                signer,
                options,
                CredentialType::JwtAccessToken,
                AccessTokenClaims::new(users, roles),
            ),
        }
    }

    /// Issue a credential as of `now`
    ///
    /// # Errors
    ///
    /// See [`JwtCredentialFactory::create_credential_at`].
    pub fn create_credential_at(
        &self,
        subject: &Subject,
        now: DateTime<Utc>,
    ) -> JwtResult<Credential> {
        self.inner.create_credential_at(subject, now)
    }
}

impl CredentialFactory for AccessTokenCredentialFactory {
    fn create_credential_for_subject(&self, subject: &Subject) -> JwtResult<Credential> {
        self.inner.create_credential_for_subject(subject)
    }
}

/// Issues `JWT_REFRESH_TOKEN` credentials with registered claims only
#[derive(Debug)]
pub struct RefreshTokenCredentialFactory {
    inner: JwtCredentialFactory<NoCustomClaims>,
}

impl RefreshTokenCredentialFactory {
    /// Create the factory
    #[must_use]
    pub fn new(signer: Arc<dyn Signer>, options: TokenOptions) -> Self {
        Self {
            inner: JwtCredentialFactory::new(
                signer,
                options,
                CredentialType::JwtRefreshToken,
                NoCustomClaims,
            ),
        }
    }

    /// Issue a credential as of `now`
    ///
    /// # Errors
    ///
    /// See [`JwtCredentialFactory::create_credential_at`].
    pub fn create_credential_at(
        &self,
        subject: &Subject,
        now: DateTime<Utc>,
    ) -> JwtResult<Credential> {
        self.inner.create_credential_at(subject, now)
    }
}

impl CredentialFactory for RefreshTokenCredentialFactory {
    fn create_credential_for_subject(&self, subject: &Subject) -> JwtResult<Credential> {
        self.inner.create_credential_for_subject(subject)
    }
}
