//! HS256 JSON Web Token codec.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use super::TokenSecret;
use crate::domain::ports::{TokenCodec, TokenCodecError};
use crate::domain::{IdentityAssertion, UserId, Username};

/// Claims carried in every issued token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    username: String,
    iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exp: Option<i64>,
}

/// Stateless token codec signing with a shared HMAC secret.
///
/// Without a TTL, tokens carry no `exp` claim and stay valid until the
/// secret changes.
pub struct JwtTokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: Option<i64>,
}

impl JwtTokenCodec {
    /// Build a codec from `secret`, optionally stamping an expiry of `ttl`.
    #[must_use]
    pub fn new(secret: &TokenSecret, ttl: Option<Duration>) -> Self {
        let ttl_secs = ttl.map(|ttl| i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX));
        let mut validation = Validation::new(Algorithm::HS256);
        if ttl_secs.is_none() {
            validation.required_spec_claims.clear();
            validation.validate_exp = false;
        }
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs,
        }
    }
}

impl TokenCodec for JwtTokenCodec {
    fn issue(&self, assertion: &IdentityAssertion) -> Result<String, TokenCodecError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: assertion.user_id.to_string(),
            username: assertion.username.to_string(),
            iat: now,
            exp: self.ttl_secs.map(|ttl| now.saturating_add(ttl)),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| TokenCodecError::signing(err.to_string()))
    }

    fn verify(&self, token: &str) -> Result<IdentityAssertion, TokenCodecError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|err| {
            match err.kind() {
                ErrorKind::ExpiredSignature => TokenCodecError::expired(),
                _ => TokenCodecError::invalid(err.to_string()),
            }
        })?;
        let Claims { sub, username, .. } = data.claims;
        Ok(IdentityAssertion {
            user_id: UserId::new(&sub).map_err(|err| TokenCodecError::invalid(err.to_string()))?,
            username: Username::new(username)
                .map_err(|err| TokenCodecError::invalid(err.to_string()))?,
        })
    }
}
