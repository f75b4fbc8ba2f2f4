//! Credentials issued to authenticated subjects
//!
//! A [`CredentialFactory`] turns a [`Subject`] into a [`Credential`]. The JWT
//! factories sign a token with the configured [`crate::signers::Signer`] and
//! store the compact serialization under [`TOKEN_VALUE_KEY`].

mod factory;
mod options;
mod subject;

pub use factory::{
    AccessTokenClaims, AccessTokenCredentialFactory, ClaimsExtension, JwtCredentialFactory,
    NoCustomClaims, RefreshTokenCredentialFactory, TOKEN_VALUE_KEY,
};
pub use options::{TokenOptions, DEFAULT_VALID_TO_SECONDS};
pub use subject::{Principal, RoleRepository, Subject, User, UserRepository};

use crate::error::JwtResult;
use std::collections::BTreeMap;
use std::fmt;

/// Kind of credential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialType {
    /// Short-lived token presented on each request
    JwtAccessToken,
    /// Long-lived token exchanged for new access tokens
    JwtRefreshToken,
}

impl CredentialType {
    /// Stable type identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CredentialType::JwtAccessToken => "JWT_ACCESS_TOKEN",
            CredentialType::JwtRefreshToken => "JWT_REFRESH_TOKEN",
        }
    }
}

impl fmt::Display for CredentialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed bag of named values
///
/// `Debug` prints value names only; token credentials hold bearer secrets.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    credential_type: CredentialType,
    values: BTreeMap<String, String>,
}

impl Credential {
    /// Empty credential of the given type
    #[must_use]
    pub fn new(credential_type: CredentialType) -> Self {
        Self {
            credential_type,
            values: BTreeMap::new(),
        }
    }

    /// Add a named value
    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Credential type
    #[must_use]
    pub fn credential_type(&self) -> CredentialType {
        self.credential_type
    }

    /// Look up a value
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// The compact token of a JWT credential
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.value(TOKEN_VALUE_KEY)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("credential_type", &self.credential_type)
            .field("values", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Issues credentials for authenticated subjects
pub trait CredentialFactory: Send + Sync {
    /// Create a credential for `subject`
    ///
    /// # Errors
    ///
    /// Returns an error when the subject has no principal or the credential
    /// cannot be signed.
    fn create_credential_for_subject(&self, subject: &Subject) -> JwtResult<Credential>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;
    use crate::error::JwtError;
    use crate::signers::HmacSigner;
    use crate::token::SignedJwt;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use std::sync::Arc;

    struct Users;

    impl UserRepository for Users {
        fn get_by_id(&self, id: &str) -> Option<User> {
            (id == "userId").then(|| User::new("userId", "dave"))
        }

        fn get_by_username(&self, username: &str) -> Option<User> {
            (username == "dave").then(|| User::new("userId", "dave"))
        }
    }

    struct Roles;

    impl RoleRepository for Roles {
        fn get_role_names_for_subject(&self, _subject_id: &str) -> Vec<String> {
            vec!["role".to_owned()]
        }
    }

    fn signer() -> Arc<HmacSigner> {
        Arc::new(HmacSigner::new(Algorithm::Hs256, "factory-secret").unwrap())
    }

    fn subject(id: &str) -> Subject {
        Subject::new(vec![Principal::new("user", id)], Vec::new())
    }

    fn access_factory() -> AccessTokenCredentialFactory {
        AccessTokenCredentialFactory::new(
            signer(),
            TokenOptions::default().with_issuer("foo").with_audience(["api"]),
            Arc::new(Users),
            Arc::new(Roles),
        )
    }

    #[test]
    fn credential_type_codes() {
        assert_eq!(CredentialType::JwtAccessToken.as_str(), "JWT_ACCESS_TOKEN");
        assert_eq!(CredentialType::JwtRefreshToken.to_string(), "JWT_REFRESH_TOKEN");
    }

    #[test]
    fn credential_debug_hides_values() {
        let credential =
            Credential::new(CredentialType::JwtAccessToken).with_value("token", "abc.def.ghi");
        let debug = format!("{credential:?}");
        assert!(debug.contains("token"));
        assert!(!debug.contains("abc.def.ghi"));
    }

    #[test]
    fn access_token_carries_registered_and_custom_claims() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let credential = access_factory()
            .create_credential_at(&subject("userId"), now)
            .unwrap();
        assert_eq!(credential.credential_type(), CredentialType::JwtAccessToken);

        let jwt = SignedJwt::decode(credential.token().unwrap()).unwrap();
        let payload = jwt.payload();

        assert_eq!(payload.subject(), Some("userId"));
        assert_eq!(payload.issuer(), Some("foo"));
        assert_eq!(payload.audience(), ["api"]);
        assert_eq!(payload.issued_at(), Some(now));
        assert_eq!(payload.valid_from(), Some(now));
        assert_eq!(payload.valid_to(), Some(now + chrono::Duration::seconds(3600)));
        assert_eq!(payload.id().map(str::len), Some(32));
        assert_eq!(payload.claim("roles"), Some(&json!(["role"])));
        assert_eq!(payload.claim("user"), Some(&json!({ "username": "dave" })));
    }

    #[test]
    fn roles_are_looked_up_for_primary_principal() {
        struct AdminRoles;

        impl RoleRepository for AdminRoles {
            fn get_role_names_for_subject(&self, subject_id: &str) -> Vec<String> {
                match subject_id {
                    "userId" => vec!["admin".to_owned()],
                    _ => Vec::new(),
                }
            }
        }

        let factory = AccessTokenCredentialFactory::new(
            signer(),
            TokenOptions::default(),
            Arc::new(Users),
            Arc::new(AdminRoles),
        );
        let subject = Subject::new(
            vec![Principal::new("user", "userId"), Principal::new("device", "laptop")],
            Vec::new(),
        );

        let credential = factory.create_credential_for_subject(&subject).unwrap();
        let jwt = SignedJwt::decode(credential.token().unwrap()).unwrap();
        assert_eq!(jwt.payload().claim("roles"), Some(&json!(["admin"])));

        let device_first = Subject::new(vec![Principal::new("device", "laptop")], Vec::new());
        let credential = factory.create_credential_for_subject(&device_first).unwrap();
        let jwt = SignedJwt::decode(credential.token().unwrap()).unwrap();
        assert_eq!(jwt.payload().claim("roles"), Some(&json!([])));
    }

    #[test]
    fn unknown_user_gets_empty_username() {
        let credential = access_factory()
            .create_credential_for_subject(&subject("ghost"))
            .unwrap();
        let jwt = SignedJwt::decode(credential.token().unwrap()).unwrap();
        assert_eq!(jwt.payload().claim("user"), Some(&json!({ "username": "" })));
    }

    #[test]
    fn refresh_token_has_no_custom_claims() {
        let factory = RefreshTokenCredentialFactory::new(signer(), TokenOptions::default());
        let credential = factory
            .create_credential_for_subject(&subject("userId"))
            .unwrap();
        assert_eq!(credential.credential_type(), CredentialType::JwtRefreshToken);

        let jwt = SignedJwt::decode(credential.token().unwrap()).unwrap();
        assert_eq!(jwt.payload().custom_claims().count(), 0);
        assert_eq!(jwt.payload().issuer(), None);
    }

    #[test]
    fn token_ids_are_unique() {
        let factory = RefreshTokenCredentialFactory::new(signer(), TokenOptions::default());
        let a = factory.create_credential_for_subject(&subject("userId")).unwrap();
        let b = factory.create_credential_for_subject(&subject("userId")).unwrap();
        let id = |c: &Credential| {
            SignedJwt::decode(c.token().unwrap())
                .unwrap()
                .payload()
                .id()
                .map(str::to_owned)
        };
        assert_ne!(id(&a), id(&b));
    }

    #[test]
    fn subject_without_principal_is_rejected() {
        assert_eq!(
            access_factory().create_credential_for_subject(&Subject::default()),
            Err(JwtError::MissingPrincipal)
        );
    }

    #[test]
    fn overflowing_offset_is_rejected() {
        let factory = RefreshTokenCredentialFactory::new(
            signer(),
            TokenOptions::default().with_valid_to(i64::MAX),
        );
        assert!(matches!(
            factory.create_credential_for_subject(&subject("userId")),
            Err(JwtError::Serialization(_))
        ));
    }
}
