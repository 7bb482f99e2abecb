//! Session token issuance (HS256 JWT).

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use shared::api::SessionClaims;

use crate::models::User;

/// Signs session tokens handed out at login.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Create a token for `user`, valid for the configured lifetime.
    pub fn issue(&self, user: &User) -> Result<String> {
        let now = Utc::now();

        let claims = SessionClaims {
            sub: user.id.to_string(),
            user_id: user.id,
            email: user.email.clone(),
            verified: user.verified,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }
}
