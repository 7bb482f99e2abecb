//! Shared API request/response types used by both CLI and API server.

use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shortest password accepted at signup.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Create an account with email and password.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct SignupPayload {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = MIN_PASSWORD_LEN))]
    pub password: String,
}

/// Exchange credentials for a session token.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginPayload {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

/// Returned after a successful login. The token is an HS256 JWT.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Claims carried by the session token. Clients decode these locally
/// (e.g. to find the signed-in email) without verifying the signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub user_id: Uuid,
    pub email: String,
    pub verified: bool,
    pub iat: i64,
    pub exp: i64,
}

/// Request a one-time code be emailed to an address.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RequestVerifyPayload {
    #[garde(email)]
    pub email: String,
}

/// Submit the one-time code received via email.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct VerifyCodePayload {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub code: String,
}

/// Mark an account as verified.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct VerifyUserPayload {
    #[garde(email)]
    pub email: String,
}

/// Generic `{"status": ...}` acknowledgement.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Generic `{"message": ...}` acknowledgement.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub verified: bool,
}

/// A todo item as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: Uuid,
    /// Owner of the todo (the user's email).
    pub user: String,
    pub date: DateTime<Utc>,
    pub tag: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateTodoPayload {
    #[garde(length(min = 1))]
    pub user: String,
    #[garde(length(min = 1))]
    pub tag: String,
    #[garde(length(min = 1))]
    pub description: String,
}

/// Partial update. Omitted fields are left unchanged.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTodoPayload {
    #[garde(length(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[garde(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[garde(length(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[garde(length(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateTodoPayload {
    pub fn is_empty(&self) -> bool {
        self.user.is_none()
            && self.date.is_none()
            && self.tag.is_none()
            && self.description.is_none()
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoResponse {
    pub updated_id: Uuid,
    pub modified_count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTodoResponse {
    pub deleted_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_rejects_short_password() {
        let payload = SignupPayload {
            email: "alice@example.com".to_string(),
            password: "12345".to_string(),
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn signup_rejects_invalid_email() {
        let payload = SignupPayload {
            email: "not-an-email".to_string(),
            password: "hunter22".to_string(),
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn verify_code_requires_code() {
        let payload = VerifyCodePayload {
            email: "alice@example.com".to_string(),
            code: String::new(),
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn update_payload_empty_when_no_fields() {
        let payload: UpdateTodoPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.is_empty());

        let payload: UpdateTodoPayload = serde_json::from_str(r#"{"tag": "work"}"#).unwrap();
        assert!(!payload.is_empty());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn update_payload_rejects_blank_field() {
        let payload: UpdateTodoPayload = serde_json::from_str(r#"{"tag": ""}"#).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn update_response_uses_camel_case() {
        let id = Uuid::new_v4();
        let json = serde_json::to_value(UpdateTodoResponse {
            updated_id: id,
            modified_count: 1,
        })
        .unwrap();

        assert_eq!(json["updatedId"], id.to_string());
        assert_eq!(json["modifiedCount"], 1);
    }
}
