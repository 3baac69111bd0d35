//! Signed Tokens (HS256 JWT)
//!
//! Two ways to read a token:
//! - [`TokenCodec::verify`] checks the signature and `exp`. Use it for
//!   anything that grants access.
//! - [`decode_unverified`] only base64-decodes the payload. Its result must
//!   never be used for authorization.

use std::fmt;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token encoding failed: {0}")]
    Encode(jsonwebtoken::errors::Error),

    #[error("Token has expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(jsonwebtoken::errors::Error),

    #[error("Token payload is unreadable: {0}")]
    Malformed(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        if matches!(err.kind(), JwtErrorKind::ExpiredSignature) {
            TokenError::Expired
        } else {
            TokenError::Invalid(err)
        }
    }
}

/// HS256 signer/verifier bound to one secret
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn hs256(secret: &[u8]) -> Self {
        // Default validation: HS256 only, `exp` required and checked with 60s leeway
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Sign claims into a compact JWT
    pub fn issue<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding).map_err(TokenError::Encode)
    }

    /// Verify signature and expiry, returning the claims
    pub fn verify<C: DeserializeOwned>(&self, token: &str) -> Result<C, TokenError> {
        let data = decode::<C>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Decode the payload without checking signature, algorithm, or expiry
///
/// Only the compact `header.payload.signature` shape and the JSON payload are
/// checked. The header is not parsed, so any `alg` (including `none`) is read.
pub fn decode_unverified<C: DeserializeOwned>(token: &str) -> Result<C, TokenError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed("expected three segments".to_string()));
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::Malformed(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| TokenError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestClaims {
        username: String,
        exp: i64,
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64
    }

    fn claims(exp: i64) -> TestClaims {
        TestClaims {
            username: "alice".to_string(),
            exp,
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let codec = TokenCodec::hs256(b"test-secret-that-is-long-enough");
        let token = codec.issue(&claims(now() + 3600)).unwrap();

        let decoded: TestClaims = codec.verify(&token).unwrap();
        assert_eq!(decoded.username, "alice");
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = TokenCodec::hs256(b"attacker")
            .issue(&claims(now() + 3600))
            .unwrap();

        let result: Result<TestClaims, _> = TokenCodec::hs256(b"server").verify(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_expired_is_rejected() {
        let codec = TokenCodec::hs256(b"server");
        let token = codec.issue(&claims(now() - 3600)).unwrap();

        let result: Result<TestClaims, _> = codec.verify(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_decode_unverified_ignores_signature_and_expiry() {
        let token = TokenCodec::hs256(b"anyone")
            .issue(&claims(now() - 3600))
            .unwrap();

        let decoded: TestClaims = decode_unverified(&token).unwrap();
        assert_eq!(decoded.username, "alice");
    }

    #[test]
    fn test_decode_unverified_reads_any_alg() {
        let payload = URL_SAFE_NO_PAD.encode(br#"{"username":"alice","exp":0}"#);
        for header in [r#"{"alg":"none","typ":"JWT"}"#, r#"{"alg":"XX999"}"#] {
            let token = format!("{}.{}.", URL_SAFE_NO_PAD.encode(header), payload);
            let decoded: TestClaims = decode_unverified(&token).unwrap();
            assert_eq!(decoded.username, "alice");
        }
    }

    #[test]
    fn test_decode_unverified_rejects_garbage() {
        assert!(decode_unverified::<TestClaims>("not-a-token").is_err());
        assert!(decode_unverified::<TestClaims>("").is_err());
        assert!(decode_unverified::<TestClaims>("a.b.c.d").is_err());
        assert!(matches!(
            decode_unverified::<TestClaims>("e30.!!!.sig"),
            Err(TokenError::Malformed(_))
        ));
        // Payload decodes but is not the expected shape
        let token = format!("e30.{}.sig", URL_SAFE_NO_PAD.encode(b"[1,2]"));
        assert!(decode_unverified::<TestClaims>(&token).is_err());
    }
}
