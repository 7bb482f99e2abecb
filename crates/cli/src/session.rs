//! Local inspection of the stored session token.
//!
//! Claims are decoded without verifying the signature; the server remains the
//! authority on whether a token is valid.

use anyhow::{Context, Result, anyhow};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use shared::api::SessionClaims;

use crate::{config::Config, credentials};

/// Decode the claims segment of a JWT.
pub fn decode_claims(token: &str) -> Result<SessionClaims> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| anyhow!("Stored session is malformed. Run: todo login <email>"))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .context("Stored session is malformed. Run: todo login <email>")?;

    serde_json::from_slice(&bytes).context("Stored session is malformed. Run: todo login <email>")
}

/// When the session stops being accepted.
pub fn expires_at(claims: &SessionClaims) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(claims.exp, 0)
}

/// Claims of the signed-in user. Fails if signed out or the token has expired.
pub fn current(config: &Config) -> Result<SessionClaims> {
    let token = credentials::get_token(config)?;
    let claims = decode_claims(&token)?;

    if claims.exp <= Utc::now().timestamp() {
        anyhow::bail!("Session expired. Run: todo login {}", claims.email);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::context::{TestContext, fake_token};
    use uuid::Uuid;

    fn claims(exp: i64) -> SessionClaims {
        SessionClaims {
            sub: "alice@example.com".to_string(),
            user_id: Uuid::new_v4(),
            email: "alice@example.com".to_string(),
            verified: true,
            iat: 0,
            exp,
        }
    }

    #[test]
    fn decodes_payload_segment() {
        let original = claims(4_102_444_800);

        let decoded = decode_claims(&fake_token(&original)).unwrap();

        assert_eq!(decoded.email, original.email);
        assert_eq!(decoded.user_id, original.user_id);
        assert!(decoded.verified);
        assert_eq!(
            expires_at(&decoded).unwrap().to_rfc3339(),
            "2100-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(decode_claims("not-a-token").is_err());
        assert!(decode_claims("a.!!!.c").is_err());
        assert!(decode_claims("a.e30.c").is_err());
    }

    #[tokio::test]
    async fn current_rejects_expired_session() {
        let ctx = TestContext::with_token(&fake_token(&claims(1))).await;

        let err = current(&ctx.config).unwrap_err();

        assert!(err.to_string().contains("Session expired"));
    }

    #[tokio::test]
    async fn current_returns_live_session() {
        let ctx = TestContext::with_session("alice@example.com").await;

        assert_eq!(current(&ctx.config).unwrap().email, "alice@example.com");
    }
}
