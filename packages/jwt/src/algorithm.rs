//! Signing algorithm registry
//!
//! The set of algorithms is closed. Anything outside it, including `none`,
//! is rejected wherever an algorithm identifier is parsed.

use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// JWS signing algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// RSASSA-PKCS1-v1_5 using SHA-256
    Rs256,
    /// RSASSA-PKCS1-v1_5 using SHA-384
    Rs384,
    /// RSASSA-PKCS1-v1_5 using SHA-512
    Rs512,
    /// HMAC using SHA-256
    Hs256,
    /// HMAC using SHA-384
    Hs384,
    /// HMAC using SHA-512
    Hs512,
}

const ALL_ALGORITHMS: [Algorithm; 6] = [
    Algorithm::Rs256,
    Algorithm::Rs384,
    Algorithm::Rs512,
    Algorithm::Hs256,
    Algorithm::Hs384,
    Algorithm::Hs512,
];

impl Algorithm {
    /// Every supported algorithm
    #[must_use]
    pub const fn all() -> &'static [Algorithm] {
        &ALL_ALGORITHMS
    }

    /// The `alg` header value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::Rs256 => "RS256",
            Algorithm::Rs384 => "RS384",
            Algorithm::Rs512 => "RS512",
            Algorithm::Hs256 => "HS256",
            Algorithm::Hs384 => "HS384",
            Algorithm::Hs512 => "HS512",
        }
    }

    /// Whether the algorithm signs with a shared secret
    #[must_use]
    pub const fn is_symmetric(self) -> bool {
        matches!(
            self,
            Algorithm::Hs256 | Algorithm::Hs384 | Algorithm::Hs512
        )
    }

    /// Whether `value` names a supported algorithm
    #[must_use]
    pub fn is_supported(value: &str) -> bool {
        value.parse::<Algorithm>().is_ok()
    }

    /// Whether the algorithm named by `value` is symmetric
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::UnsupportedAlgorithm`] if `value` is not supported.
    pub fn is_symmetric_str(value: &str) -> JwtResult<bool> {
        value.parse::<Algorithm>().map(Algorithm::is_symmetric)
    }
}

impl FromStr for Algorithm {
    type Err = JwtError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ALL_ALGORITHMS
            .iter()
            .copied()
            .find(|alg| alg.as_str() == value)
            .ok_or_else(|| JwtError::unsupported_algorithm(value))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Algorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for alg in Algorithm::all() {
            assert_eq!(alg.as_str().parse::<Algorithm>().unwrap(), *alg);
        }
        assert_eq!(Algorithm::all().len(), 6);
    }

    #[test]
    fn classification() {
        assert!(Algorithm::Hs256.is_symmetric());
        assert!(Algorithm::Hs512.is_symmetric());
        assert!(!Algorithm::Rs256.is_symmetric());
        assert!(Algorithm::is_symmetric_str("HS384").unwrap());
        assert!(!Algorithm::is_symmetric_str("RS384").unwrap());
    }

    #[test]
    fn unknown_identifiers_are_rejected() {
        assert!(!Algorithm::is_supported("none"));
        assert!(!Algorithm::is_supported("hs256"));
        assert!(!Algorithm::is_supported("ES256"));
        assert_eq!(
            Algorithm::is_symmetric_str("none").unwrap_err(),
            JwtError::UnsupportedAlgorithm("none".to_string())
        );
    }

    #[test]
    fn serde_uses_exact_identifier() {
        assert_eq!(serde_json::to_string(&Algorithm::Rs512).unwrap(), "\"RS512\"");
        assert!(serde_json::from_str::<Algorithm>("\"none\"").is_err());
    }
}
