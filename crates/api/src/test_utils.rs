//! Shared test utilities for API handler tests.
//!
//! Provides mock factories and a `TestStateBuilder` for constructing `AppState`
//! instances with only the mocks needed for each test. The OTP store defaults
//! to a real in-memory store since it has no external dependencies.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::test_utils::{TestStateBuilder, mock_user};
//!
//! let mut user_repo = MockUserRepo::new();
//! user_repo
//!     .expect_find_by_email()
//!     .returning(|_| Ok(Some(mock_user("alice@example.com"))));
//!
//! let state = TestStateBuilder::new()
//!     .with_user_repo(user_repo)
//!     .build();
//! ```

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::config::Config;
use crate::models::{Todo, User};
use crate::repos::{MockStatusRepo, MockTodoRepo, MockUserRepo, Repos};
use crate::services::{EmailSender, MockEmailSender, TokenService};
use crate::state::AppState;
use crate::stores::{MemoryOtpStore, OtpStore, Stores};

pub const TEST_JWT_SECRET: &str = "test-secret";

/// Creates a test configuration with dummy values.
pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 8000,
        database_url: "postgres://test".to_string(),
        smtp_url: "smtp://localhost:1025".to_string(),
        mail_from: "noreply@example.com".to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        token_ttl_hours: 24,
        otp_ttl_secs: 300,
        cors_origins: vec!["http://localhost:3000".to_string()],
        env: "test".to_string(),
        sentry_dsn: None,
    }
}

/// Creates a mock unverified user with the given email and a placeholder hash.
pub fn mock_user(email: &str) -> User {
    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        verified: false,
        created_at: Utc::now(),
    }
}

/// Creates a mock todo owned by `user`.
pub fn mock_todo(user: &str) -> Todo {
    Todo {
        id: Uuid::new_v4(),
        user: user.to_string(),
        date: Utc::now(),
        tag: "work".to_string(),
        description: "write the report".to_string(),
    }
}

/// Builder for constructing test `AppState` with custom mocks.
///
/// Uses default (empty) mocks for any repo/service not explicitly set.
#[derive(Default)]
pub struct TestStateBuilder {
    user_repo: Option<MockUserRepo>,
    todo_repo: Option<MockTodoRepo>,
    status_repo: Option<MockStatusRepo>,
    otp_store: Option<Arc<dyn OtpStore>>,
    email_sender: Option<MockEmailSender>,
}

impl TestStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_repo(mut self, repo: MockUserRepo) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn with_todo_repo(mut self, repo: MockTodoRepo) -> Self {
        self.todo_repo = Some(repo);
        self
    }

    pub fn with_status_repo(mut self, repo: MockStatusRepo) -> Self {
        self.status_repo = Some(repo);
        self
    }

    /// Use a specific OTP store (a mock, or a real store the test inspects).
    pub fn with_otp_store(mut self, store: Arc<dyn OtpStore>) -> Self {
        self.otp_store = Some(store);
        self
    }

    pub fn with_email_sender(mut self, sender: MockEmailSender) -> Self {
        self.email_sender = Some(sender);
        self
    }

    /// Builds the `AppState` using configured mocks or defaults.
    pub fn build(self) -> AppState {
        let config = test_config();

        let repos = Repos {
            users: Arc::new(self.user_repo.unwrap_or_else(MockUserRepo::new)),
            todos: Arc::new(self.todo_repo.unwrap_or_else(MockTodoRepo::new)),
            status: Arc::new(self.status_repo.unwrap_or_else(MockStatusRepo::new)),
        };

        let stores = Stores {
            otp: self
                .otp_store
                .unwrap_or_else(|| Arc::new(MemoryOtpStore::new())),
        };

        let email = Arc::new(self.email_sender.unwrap_or_else(MockEmailSender::new))
            as Arc<dyn EmailSender>;
        let tokens = TokenService::new(&config.jwt_secret, config.token_ttl_hours);

        AppState {
            config,
            repos,
            stores,
            email,
            tokens,
        }
    }
}

/// Reads a response body as JSON.
pub async fn response_json(response: axum::response::Response) -> serde_json::Value {
    use http_body_util::BodyExt;

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
