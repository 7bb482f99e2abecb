use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::api::TodoItem;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// Argon2 PHC string. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    /// Owner email. Stored as `user_email` since `user` is reserved in Postgres.
    #[sqlx(rename = "user_email")]
    pub user: String,
    pub date: DateTime<Utc>,
    pub tag: String,
    pub description: String,
}

impl From<Todo> for TodoItem {
    fn from(todo: Todo) -> Self {
        TodoItem {
            id: todo.id,
            user: todo.user,
            date: todo.date,
            tag: todo.tag,
            description: todo.description,
        }
    }
}

/// Fields for inserting a todo; id and date are assigned by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTodo {
    pub user: String,
    pub tag: String,
    pub description: String,
}

/// Partial todo update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoChanges {
    pub user: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub tag: Option<String>,
    pub description: Option<String>,
}
