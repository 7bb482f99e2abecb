use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum AppError {
    /// Internal errors - logged but return generic 500 to user
    Internal(anyhow::Error),
    /// User-facing errors - message is safe to show
    External(StatusCode, &'static str),
    /// Validation errors - safe to show
    Validation(String),
}

impl AppError {
    /// Malformed, incomplete or wrongly typed JSON request body.
    pub fn bad_body(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }

    fn body(message: &str) -> Json<serde_json::Value> {
        Json(serde_json::json!({ "error": message }))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Internal(err) => {
                tracing::error!("internal error: {:?}", err);
                sentry::capture_error(
                    err.as_ref() as &(dyn std::error::Error + Send + Sync + 'static)
                );

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Self::body("Internal server error"),
                )
                    .into_response()
            }
            AppError::External(status, msg) => (status, Self::body(msg)).into_response(),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, Self::body(&msg)).into_response(),
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}
