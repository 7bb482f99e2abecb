//! Database repositories (PostgreSQL).
//!
//! This module contains traits and implementations for database access.
//! Each repository is abstracted behind a trait to enable mocking in tests.
//!
//! ## Repositories
//!
//! - **users** - Accounts, password hashes and the verified flag
//! - **todos** - Todo CRUD, filterable by owner email
//! - **status** - Database connectivity for health checks
//!
//! ## Usage in Handlers
//!
//! Repositories are accessed via `state.repos`:
//!
//! ```ignore
//! async fn handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
//!     let user = state.repos.users.find_by_email(&email).await?;
//!     let todos = state.repos.todos.list_by_user(&email).await?;
//! }
//! ```

mod status;
mod todos;
mod users;

pub use status::{PgStatusRepo, StatusRepo};
pub use todos::{PgTodoRepo, TodoRepo};
pub use users::{PgUserRepo, UserRepo};

#[cfg(test)]
pub use status::MockStatusRepo;
#[cfg(test)]
pub use todos::MockTodoRepo;
#[cfg(test)]
pub use users::MockUserRepo;

use std::sync::Arc;

/// Collection of all database repositories.
#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn UserRepo>,
    pub todos: Arc<dyn TodoRepo>,
    pub status: Arc<dyn StatusRepo>,
}
