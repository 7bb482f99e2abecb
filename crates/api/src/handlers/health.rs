//! Health check endpoint for load balancers and monitoring.
//!
//! Returns 200 OK when the database answers, 503 Service Unavailable otherwise.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: bool,
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let db_ok = match state.repos.status.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "database health check failed");
            false
        }
    };

    let response = HealthResponse {
        status: if db_ok { "ok" } else { "unhealthy" },
        database: db_ok,
    };

    let status = if db_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::MockStatusRepo;
    use crate::test_utils::{TestStateBuilder, response_json};

    #[tokio::test]
    async fn healthy_when_database_answers() {
        let mut status_repo = MockStatusRepo::new();
        status_repo.expect_ping().returning(|| Ok(()));

        let state = TestStateBuilder::new().with_status_repo(status_repo).build();

        let response = health_check(State(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], true);
    }

    #[tokio::test]
    async fn unavailable_when_database_fails() {
        let mut status_repo = MockStatusRepo::new();
        status_repo
            .expect_ping()
            .returning(|| Err(anyhow::anyhow!("connection refused")));

        let state = TestStateBuilder::new().with_status_repo(status_repo).build();

        let response = health_check(State(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response_json(response).await["database"], false);
    }
}
