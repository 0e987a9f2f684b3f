//! JWT access tokens signed with an HMAC secret

use chrono::Utc;
use focusflow_core::auth::ports::TokenService;
use focusflow_domain::{FocusFlowError, Result};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User id
    sub: String,
    iat: i64,
    exp: i64,
}

/// Token service issuing HS256 JWTs with a fixed lifetime
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: u64,
}

impl JwtTokenService {
    /// Create a new service from the shared HMAC secret
    pub fn new(secret: &str, ttl_seconds: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: &str) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now.saturating_add(i64::try_from(self.ttl_seconds).unwrap_or(i64::MAX)),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|err| FocusFlowError::Internal(format!("token signing failed: {err}")))
    }

    fn verify(&self, token: &str) -> Result<String> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default()).map_err(
            |err| match err.kind() {
                ErrorKind::ExpiredSignature => FocusFlowError::Auth("token expired".to_string()),
                _ => FocusFlowError::Auth("invalid token".to_string()),
            },
        )?;
        Ok(data.claims.sub)
    }
}
