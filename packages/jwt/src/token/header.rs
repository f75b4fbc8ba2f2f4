//! JOSE header

use super::base64url;
use crate::algorithm::Algorithm;
use crate::error::JwtResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

fn default_token_type() -> String {
    "JWT".to_string()
}

/// JWT header structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JwtHeader {
    alg: Algorithm,
    #[serde(default = "default_token_type")]
    typ: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    kid: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl JwtHeader {
    /// Create a header for `algorithm` with `typ` set to `JWT`
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            alg: algorithm,
            typ: default_token_type(),
            cty: None,
            kid: None,
            extra: BTreeMap::new(),
        }
    }

    /// Set the content type (`cty`)
    #[must_use]
    pub fn with_content_type(mut self, cty: impl Into<String>) -> Self {
        self.cty = Some(cty.into());
        self
    }

    /// Set the key ID hint (`kid`)
    #[must_use]
    pub fn with_key_id(mut self, kid: impl Into<String>) -> Self {
        self.kid = Some(kid.into());
        self
    }

    /// Add a non-standard header parameter
    ///
    /// Registered names (`alg`, `typ`, `cty`, `kid`) are ignored here; use the
    /// dedicated setters.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: Value) -> Self {
        let name = name.into();
        if !matches!(name.as_str(), "alg" | "typ" | "cty" | "kid") {
            self.extra.insert(name, value);
        }
        self
    }

    /// Signing algorithm
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.alg
    }

    /// Token type
    #[must_use]
    pub fn token_type(&self) -> &str {
        &self.typ
    }

    /// Content type
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.cty.as_deref()
    }

    /// Key ID hint
    #[must_use]
    pub fn key_id(&self) -> Option<&str> {
        self.kid.as_deref()
    }

    /// Non-standard header parameter
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// JSON-serialize then base64url-encode the header
    ///
    /// # Errors
    ///
    /// Returns [`crate::JwtError::Serialization`] if serialization fails.
    pub fn encode(&self) -> JwtResult<String> {
        let json = serde_json::to_vec(self)?;
        Ok(base64url::encode(&json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_header_has_alg_and_typ() {
        let header = JwtHeader::new(Algorithm::Hs256);
        let json = serde_json::to_value(&header).unwrap();
        assert_eq!(json, json!({"alg": "HS256", "typ": "JWT"}));
    }

    #[test]
    fn encodes_known_segment() {
        // {"alg":"HS256","typ":"JWT"}
        assert_eq!(
            JwtHeader::new(Algorithm::Hs256).encode().unwrap(),
            "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"
        );
    }

    #[test]
    fn registered_names_cannot_be_overridden_as_extras() {
        let header = JwtHeader::new(Algorithm::Rs256)
            .with_parameter("alg", json!("none"))
            .with_parameter("x5t", json!("thumb"));
        assert_eq!(header.algorithm(), Algorithm::Rs256);
        assert_eq!(header.parameter("alg"), None);
        assert_eq!(header.parameter("x5t"), Some(&json!("thumb")));
    }

    #[test]
    fn missing_typ_defaults_to_jwt() {
        let header: JwtHeader = serde_json::from_str(r#"{"alg":"RS384"}"#).unwrap();
        assert_eq!(header.token_type(), "JWT");
        assert_eq!(header.algorithm(), Algorithm::Rs384);
    }
}
