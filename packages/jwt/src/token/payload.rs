//! JWT claims set
//!
//! Registered claims are typed fields; everything else lives in an open map
//! that is flattened into the JSON object. Time claims are whole seconds.

use super::base64url;
use crate::error::JwtResult;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

const REGISTERED_CLAIMS: [&str; 7] = ["iss", "sub", "aud", "exp", "nbf", "iat", "jti"];

/// JWT payload (claims)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JwtPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sub: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "audience")]
    aud: Vec<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "chrono::serde::ts_seconds_option"
    )]
    exp: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "chrono::serde::ts_seconds_option"
    )]
    nbf: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "chrono::serde::ts_seconds_option"
    )]
    iat: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    jti: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl JwtPayload {
    /// Create an empty payload
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the issuer (`iss`)
    #[must_use]
    pub fn with_issuer(mut self, iss: impl Into<String>) -> Self {
        self.iss = Some(iss.into());
        self
    }

    /// Set the subject (`sub`)
    #[must_use]
    pub fn with_subject(mut self, sub: impl Into<String>) -> Self {
        self.sub = Some(sub.into());
        self
    }

    /// Set the audience (`aud`)
    #[must_use]
    pub fn with_audience<I, S>(mut self, aud: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aud = aud.into_iter().map(Into::into).collect();
        self
    }

    /// Set the expiration time (`exp`)
    #[must_use]
    pub fn with_valid_to(mut self, exp: DateTime<Utc>) -> Self {
        self.exp = Some(exp.trunc_subsecs(0));
        self
    }

    /// Set the not-before time (`nbf`)
    #[must_use]
    pub fn with_valid_from(mut self, nbf: DateTime<Utc>) -> Self {
        self.nbf = Some(nbf.trunc_subsecs(0));
        self
    }

    /// Set the issued-at time (`iat`)
    #[must_use]
    pub fn with_issued_at(mut self, iat: DateTime<Utc>) -> Self {
        self.iat = Some(iat.trunc_subsecs(0));
        self
    }

    /// Set the JWT ID (`jti`)
    #[must_use]
    pub fn with_id(mut self, jti: impl Into<String>) -> Self {
        self.jti = Some(jti.into());
        self
    }

    /// Add a custom claim
    #[must_use]
    pub fn with_claim(mut self, name: impl Into<String>, value: Value) -> Self {
        self.insert_claim(name, value);
        self
    }

    /// Add or replace a custom claim, returning the previous value
    ///
    /// Registered claim names are left untouched and yield `None`; set them
    /// through the typed setters.
    pub fn insert_claim(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        let name = name.into();
        if REGISTERED_CLAIMS.contains(&name.as_str()) {
            tracing::debug!(claim = %name, "ignoring registered claim set as custom claim");
            return None;
        }
        self.extra.insert(name, value)
    }

    /// Issuer
    #[must_use]
    pub fn issuer(&self) -> Option<&str> {
        self.iss.as_deref()
    }

    /// Subject
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    /// Audience values; empty when the claim is absent
    #[must_use]
    pub fn audience(&self) -> &[String] {
        &self.aud
    }

    /// Expiration time
    #[must_use]
    pub fn valid_to(&self) -> Option<DateTime<Utc>> {
        self.exp
    }

    /// Not-before time
    #[must_use]
    pub fn valid_from(&self) -> Option<DateTime<Utc>> {
        self.nbf
    }

    /// Issued-at time
    #[must_use]
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.iat
    }

    /// JWT ID
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.jti.as_deref()
    }

    /// Custom claim by name
    #[must_use]
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// All custom claims
    pub fn custom_claims(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.extra.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// JSON-serialize then base64url-encode the claims
    ///
    /// # Errors
    ///
    /// Returns [`crate::JwtError::Serialization`] if serialization fails.
    pub fn encode(&self) -> JwtResult<String> {
        let json = serde_json::to_vec(self)?;
        Ok(base64url::encode(&json))
    }
}

/// `aud` is a bare string for a single audience and an array otherwise.
mod audience {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Single(String),
        Multiple(Vec<String>),
    }

    pub(super) fn serialize<S: Serializer>(
        aud: &[String],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match aud {
            [single] => single.serialize(serializer),
            many => many.serialize(serializer),
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<String>, D::Error> {
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Single(aud) => vec![aud],
            Repr::Multiple(aud) => aud,
        })
    }
}
