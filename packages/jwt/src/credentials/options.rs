use serde::{Deserialize, Serialize};

/// Default token lifetime in seconds
pub const DEFAULT_VALID_TO_SECONDS: i64 = 3600;

/// Issuance settings shared by the credential factories
///
/// Offsets are seconds relative to the issue time. Deserializable so they
/// can live in application config; absent fields take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenOptions {
    /// `iss` claim
    pub issuer: Option<String>,
    /// `aud` claim
    pub audience: Vec<String>,
    /// Offset applied to `nbf`
    pub valid_from_seconds: i64,
    /// Offset applied to `exp`
    pub valid_to_seconds: i64,
}

impl TokenOptions {
    /// Set the issuer
    #[must_use]
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Set the audience
    #[must_use]
    pub fn with_audience<I, S>(mut self, audience: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.audience = audience.into_iter().map(Into::into).collect();
        self
    }

    /// Set the `nbf` offset
    #[must_use]
    pub fn with_valid_from(mut self, seconds: i64) -> Self {
        self.valid_from_seconds = seconds;
        self
    }

    /// Set the `exp` offset
    #[must_use]
    pub fn with_valid_to(mut self, seconds: i64) -> Self {
        self.valid_to_seconds = seconds;
        self
    }
}

impl Default for TokenOptions {
    fn default() -> Self {
        Self {
            issuer: None,
            audience: Vec::new(),
            valid_from_seconds: 0,
            valid_to_seconds: DEFAULT_VALID_TO_SECONDS,
        }
    }
}
