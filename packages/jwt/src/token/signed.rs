use super::{base64url, JwtHeader, JwtPayload, UnsignedJwt};
use crate::error::{JwtError, JwtResult};
use std::fmt;

/// A token with its signature, built by signing or decoded from the wire
///
/// The unsigned value is kept exactly as it was signed or received, so a
/// decoded token is verified against the issuer's bytes rather than a local
/// re-serialization of the claims.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedJwt {
    unsigned: UnsignedJwt,
    unsigned_value: String,
    signature: Vec<u8>,
}

impl SignedJwt {
    pub(crate) fn from_parts(
        unsigned: UnsignedJwt,
        unsigned_value: String,
        signature: Vec<u8>,
    ) -> Self {
        Self {
            unsigned,
            unsigned_value,
            signature,
        }
    }

    /// Attach an already computed signature to an unsigned token
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::Serialization`] if the unsigned value cannot be
    /// produced.
    pub fn from_unsigned(unsigned: UnsignedJwt, signature: Vec<u8>) -> JwtResult<Self> {
        let unsigned_value = unsigned.unsigned_value()?;
        Ok(Self::from_parts(unsigned, unsigned_value, signature))
    }

    /// Parse the compact serialization `header.payload.signature`
    ///
    /// Claims are not checked here; see [`crate::verification::JwtVerifier`].
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::MalformedToken`] unless the token has exactly three
    /// base64url segments whose first two decode to JSON objects with a
    /// supported `alg`.
    pub fn decode(token: &str) -> JwtResult<Self> {
        let segments: Vec<&str> = token.split('.').collect();
        let [header_b64, payload_b64, signature_b64] = segments.as_slice() else {
            return Err(JwtError::MalformedToken(format!(
                "expected 3 segments, found {}",
                segments.len()
            )));
        };

        let header_bytes = base64url::decode(header_b64)
            .map_err(|_| JwtError::malformed("invalid header encoding"))?;
        let header: JwtHeader = serde_json::from_slice(&header_bytes)
            .map_err(|e| JwtError::MalformedToken(format!("invalid header: {e}")))?;

        let payload_bytes = base64url::decode(payload_b64)
            .map_err(|_| JwtError::malformed("invalid payload encoding"))?;
        let payload: JwtPayload = serde_json::from_slice(&payload_bytes)
            .map_err(|e| JwtError::MalformedToken(format!("invalid payload: {e}")))?;

        let signature = base64url::decode(signature_b64)
            .map_err(|_| JwtError::malformed("invalid signature encoding"))?;

        Ok(Self::from_parts(
            UnsignedJwt::new(header, payload),
            format!("{header_b64}.{payload_b64}"),
            signature,
        ))
    }

    /// The compact serialization
    #[must_use]
    pub fn encode(&self) -> String {
        format!(
            "{}.{}",
            self.unsigned_value,
            base64url::encode(&self.signature)
        )
    }

    /// The signed bytes: `header.payload` as signed or received
    #[must_use]
    pub fn unsigned_value(&self) -> &str {
        &self.unsigned_value
    }

    /// The header
    #[must_use]
    pub fn header(&self) -> &JwtHeader {
        self.unsigned.header()
    }

    /// The payload
    #[must_use]
    pub fn payload(&self) -> &JwtPayload {
        self.unsigned.payload()
    }

    /// Raw signature bytes
    #[must_use]
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// The unsigned token this signature covers
    #[must_use]
    pub fn unsigned_jwt(&self) -> &UnsignedJwt {
        &self.unsigned
    }
}

impl fmt::Display for SignedJwt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
