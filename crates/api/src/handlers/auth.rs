//! Password-based accounts.
//!
//! - POST /signup creates an unverified account (argon2-hashed password)
//! - POST /login checks credentials and returns a session JWT
//!
//! Unknown email and wrong password produce the same 401 so login cannot be
//! used to discover registered addresses.

use axum::{
    Json, Router, debug_handler,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use garde::Validate;
use shared::api::{LoginPayload, LoginResponse, MessageResponse, SignupPayload};

use crate::{
    error::AppError,
    services::password::{hash_password, verify_password},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

#[debug_handler]
async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(AppError::bad_body)?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if state.repos.users.find_by_email(&payload.email).await?.is_some() {
        return Err(AppError::External(
            StatusCode::CONFLICT,
            "email already registered",
        ));
    }

    let password_hash = hash_password(payload.password).await?;

    // A concurrent signup may have claimed the email since the check above
    let Some(user) = state
        .repos
        .users
        .create(&payload.email, &password_hash)
        .await?
    else {
        return Err(AppError::External(
            StatusCode::CONFLICT,
            "email already registered",
        ));
    };

    tracing::info!(user_id = %user.id, email = %user.email, "user created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "user created".to_string(),
        }),
    ))
}

#[debug_handler]
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(AppError::bad_body)?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let invalid = || AppError::External(StatusCode::UNAUTHORIZED, "invalid credentials");

    let user = state
        .repos
        .users
        .find_by_email(&payload.email)
        .await?
        .ok_or_else(invalid)?;

    if !verify_password(payload.password, user.password_hash.clone()).await? {
        tracing::warn!(user_id = %user.id, "login failed: wrong password");
        return Err(invalid());
    }

    let token = state.tokens.issue(&user)?;

    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(LoginResponse { token }))
}
