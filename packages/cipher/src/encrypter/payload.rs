use crate::{Cipher, CipherError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// Envelope version this crate writes and accepts
pub const PAYLOAD_VERSION: &str = "1";

/// Serialized form of an encrypted value
///
/// Binary fields are hex encoded; the whole JSON document is then base64
/// encoded for transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct EncryptedPayload {
    pub(crate) version: String,
    pub(crate) cipher: Cipher,
    pub(crate) nonce: String,
    pub(crate) key_salt: String,
    pub(crate) value: String,
    pub(crate) hmac: String,
}

impl EncryptedPayload {
    pub(crate) fn encode(&self) -> Result<String> {
        Ok(STANDARD.encode(serde_json::to_vec(self)?))
    }

    pub(crate) fn decode(data: &str) -> Result<Self> {
        let payload: Self = serde_json::from_slice(&STANDARD.decode(data.trim())?)?;

        if payload.version != PAYLOAD_VERSION {
            return Err(CipherError::InvalidPayload(format!(
                "unsupported payload version {}",
                payload.version
            )));
        }

        Ok(payload)
    }
}

/// Bytes covered by the envelope MAC: `version || cipher || nonce || salt || ciphertext`
pub(crate) fn mac_input(
    version: &str,
    cipher: Cipher,
    nonce: &[u8],
    key_salt: &[u8],
    ciphertext: &[u8],
) -> Vec<u8> {
    let cipher = cipher.as_str();
    let mut input = Vec::with_capacity(
        version.len() + cipher.len() + nonce.len() + key_salt.len() + ciphertext.len(),
    );
    input.extend_from_slice(version.as_bytes());
    input.extend_from_slice(cipher.as_bytes());
    input.extend_from_slice(nonce);
    input.extend_from_slice(key_salt);
    input.extend_from_slice(ciphertext);
    input
}
