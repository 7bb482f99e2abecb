//! Email ownership verification with one-time codes.
//!
//! Flow:
//! 1. Client requests a code via POST /request-verify with an email
//! 2. A 6-digit code is issued into the OTP store (default TTL 5 minutes)
//!    and emailed in the background
//! 3. Client submits email + code to POST /verify-code; the code is consumed
//!    on success
//! 4. Client marks the account verified via POST /verify-user
//!
//! Notes:
//! - Email delivery is fire-and-forget. A failed send is logged and the code
//!   stays valid; the request is still acknowledged with 202.
//! - Unknown email, expired code, consumed code and wrong code all produce
//!   the same 401 response.
//! - A wrong code does not invalidate the pending code.

use axum::{
    Json, Router, debug_handler,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use garde::Validate;
use shared::api::{
    RequestVerifyPayload, StatusResponse, VerifyCodePayload, VerifyCodeResponse,
    VerifyUserPayload,
};

use crate::{error::AppError, services::verification_email, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/request-verify", post(request_verify))
        .route("/verify-code", post(verify_code))
        .route("/verify-user", post(verify_user))
}

#[debug_handler]
async fn request_verify(
    State(state): State<AppState>,
    payload: Result<Json<RequestVerifyPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let invalid = || AppError::External(StatusCode::BAD_REQUEST, "invalid email");
    let Json(payload) = payload.map_err(|_| invalid())?;
    payload.validate().map_err(|_| invalid())?;

    let ttl = state.config.otp_ttl();
    let code = state.stores.otp.issue(&payload.email, ttl)?;

    let (subject, body) = verification_email(&code, ttl);
    let email = state.email.clone();
    let to = payload.email.clone();
    tokio::spawn(async move {
        if let Err(e) = email.send(&to, subject, &body).await {
            tracing::warn!(email = %to, "failed to send verification email: {:?}", e);
        }
    });

    tracing::info!(email = %payload.email, "verification code requested");

    Ok((
        StatusCode::ACCEPTED,
        Json(StatusResponse {
            status: "code_sent".to_string(),
        }),
    ))
}

#[debug_handler]
async fn verify_code(
    State(state): State<AppState>,
    payload: Result<Json<VerifyCodePayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let invalid = || AppError::External(StatusCode::BAD_REQUEST, "invalid payload");
    let Json(payload) = payload.map_err(|_| invalid())?;
    payload.validate().map_err(|_| invalid())?;

    if !state.stores.otp.verify(&payload.email, &payload.code) {
        tracing::warn!(email = %payload.email, "code verification failed");
        return Err(AppError::External(
            StatusCode::UNAUTHORIZED,
            "invalid or expired code",
        ));
    }

    tracing::info!(email = %payload.email, "code verified");

    Ok(Json(VerifyCodeResponse { verified: true }))
}

#[debug_handler]
async fn verify_user(
    State(state): State<AppState>,
    payload: Result<Json<VerifyUserPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let invalid = || AppError::External(StatusCode::BAD_REQUEST, "invalid email payload");
    let Json(payload) = payload.map_err(|_| invalid())?;
    payload.validate().map_err(|_| invalid())?;

    if !state.repos.users.set_verified(&payload.email).await? {
        return Err(AppError::External(StatusCode::NOT_FOUND, "user not found"));
    }

    tracing::info!(email = %payload.email, "user verified");

    Ok(Json(StatusResponse {
        status: "verified".to_string(),
    }))
}
