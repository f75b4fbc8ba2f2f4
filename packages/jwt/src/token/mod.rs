//! Token model and compact serialization

mod base64url;
mod header;
mod payload;
mod signed;
mod unsigned;

pub use header::JwtHeader;
pub use payload::JwtPayload;
pub use signed::SignedJwt;
pub use unsigned::UnsignedJwt;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;
    use crate::error::JwtError;
    use crate::signers::{HmacSigner, Signer};
    use serde_json::json;

    fn signer() -> HmacSigner {
        HmacSigner::new(Algorithm::Hs256, "a-shared-secret").unwrap()
    }

    fn unsigned() -> UnsignedJwt {
        UnsignedJwt::new(
            JwtHeader::new(Algorithm::Hs256),
            JwtPayload::new()
                .with_issuer("foo")
                .with_subject("userId")
                .with_claim("roles", json!(["role"])),
        )
    }

    #[test]
    fn unsigned_value_joins_encoded_segments() {
        let jwt = unsigned();
        let expected = format!(
            "{}.{}",
            jwt.header().encode().unwrap(),
            jwt.payload().encode().unwrap()
        );
        assert_eq!(jwt.unsigned_value().unwrap(), expected);
    }

    #[test]
    fn encode_appends_signature_segment() {
        let signed = unsigned().sign(&signer()).unwrap();
        let encoded = signed.encode();
        let (unsigned_value, signature) = encoded.rsplit_once('.').unwrap();

        assert_eq!(unsigned_value, signed.unsigned_value());
        assert_eq!(base64url::decode(signature).unwrap(), signed.signature());
        assert!(!encoded.contains('='));
    }

    #[test]
    fn decode_reproduces_encoded_token() {
        let signed = unsigned().sign(&signer()).unwrap();
        let decoded = SignedJwt::decode(&signed.encode()).unwrap();

        assert_eq!(decoded, signed);
        assert_eq!(decoded.payload().claim("roles"), Some(&json!(["role"])));
    }

    #[test]
    fn from_unsigned_matches_signing() {
        let signer = signer();
        let jwt = unsigned();
        let signature = signer.sign(jwt.unsigned_value().unwrap().as_bytes()).unwrap();

        let composed = SignedJwt::from_unsigned(jwt.clone(), signature).unwrap();
        assert_eq!(composed, jwt.sign(&signer).unwrap());
    }

    #[test]
    fn decode_keeps_wire_segments() {
        // Same claims as a local serialization would produce, different key order
        let header = base64url::encode(br#"{"typ":"JWT","alg":"HS256"}"#);
        let payload = base64url::encode(br#"{"sub":"userId","iss":"foo"}"#);
        let token = format!("{header}.{payload}.c2ln");

        let decoded = SignedJwt::decode(&token).unwrap();
        assert_eq!(decoded.unsigned_value(), format!("{header}.{payload}"));
        assert_eq!(decoded.encode(), token);
        assert_eq!(decoded.payload().issuer(), Some("foo"));
    }

    #[test]
    fn signer_must_match_header_algorithm() {
        let hs512 = HmacSigner::new(Algorithm::Hs512, "a-shared-secret").unwrap();
        assert!(matches!(
            unsigned().sign(&hs512),
            Err(JwtError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn wrong_segment_count_is_malformed() {
        for token in ["", "a.b", "a.b.c.d", "onlyone"] {
            assert!(
                matches!(SignedJwt::decode(token), Err(JwtError::MalformedToken(_))),
                "{token:?} should be malformed"
            );
        }
    }

    #[test]
    fn invalid_segments_are_malformed() {
        let header = JwtHeader::new(Algorithm::Hs256).encode().unwrap();
        let payload = JwtPayload::new().encode().unwrap();
        let not_json = base64url::encode(b"not json");
        let not_object = base64url::encode(b"[1,2]");
        let none_alg = base64url::encode(br#"{"alg":"none","typ":"JWT"}"#);

        let cases = [
            format!("{not_json}.{payload}.c2ln"),
            format!("{header}.{not_json}.c2ln"),
            format!("{header}.{not_object}.c2ln"),
            format!("{none_alg}.{payload}."),
            format!("{header}.{payload}.c2ln="),
            format!("{header}.%%%.c2ln"),
        ];

        for token in cases {
            assert!(
                matches!(SignedJwt::decode(&token), Err(JwtError::MalformedToken(_))),
                "{token} should be malformed"
            );
        }
    }

    #[test]
    fn empty_signature_segment_decodes() {
        let jwt = unsigned();
        let token = format!("{}.", jwt.unsigned_value().unwrap());
        let decoded = SignedJwt::decode(&token).unwrap();
        assert!(decoded.signature().is_empty());
    }
}
