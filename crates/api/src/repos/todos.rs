//! Todo repository for PostgreSQL.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::{NewTodo, Todo, TodoChanges};

const TODO_COLUMNS: &str = "id, user_email, date, tag, description";

/// Repository for todo operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepo: Send + Sync {
    /// List every todo, oldest first.
    async fn list_all(&self) -> Result<Vec<Todo>>;

    /// List the todos owned by `user`, oldest first.
    async fn list_by_user(&self, user: &str) -> Result<Vec<Todo>>;

    /// Insert a todo dated now.
    async fn create(&self, todo: NewTodo) -> Result<Todo>;

    /// Apply a partial update. Returns the number of rows matched (0 or 1).
    async fn update(&self, id: Uuid, changes: TodoChanges) -> Result<u64>;

    /// Delete a todo (returns true if it existed).
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// PostgreSQL implementation of TodoRepo.
#[derive(Clone)]
pub struct PgTodoRepo {
    pool: Pool<Postgres>,
}

impl PgTodoRepo {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepo for PgTodoRepo {
    async fn list_all(&self) -> Result<Vec<Todo>> {
        let todos = sqlx::query_as::<_, Todo>(&format!(
            "SELECT {TODO_COLUMNS} FROM todos ORDER BY date, id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(todos)
    }

    async fn list_by_user(&self, user: &str) -> Result<Vec<Todo>> {
        let todos = sqlx::query_as::<_, Todo>(&format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE user_email = $1 ORDER BY date, id"
        ))
        .bind(user)
        .fetch_all(&self.pool)
        .await?;
        Ok(todos)
    }

    async fn create(&self, todo: NewTodo) -> Result<Todo> {
        let todo = sqlx::query_as::<_, Todo>(&format!(
            "INSERT INTO todos (id, user_email, date, tag, description) \
             VALUES ($1, $2, now(), $3, $4) RETURNING {TODO_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(todo.user)
        .bind(todo.tag)
        .bind(todo.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(todo)
    }

    async fn update(&self, id: Uuid, changes: TodoChanges) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE todos SET \
                user_email = COALESCE($2, user_email), \
                date = COALESCE($3, date), \
                tag = COALESCE($4, tag), \
                description = COALESCE($5, description) \
             WHERE id = $1",
        )
        .bind(id)
        .bind(changes.user)
        .bind(changes.date)
        .bind(changes.tag)
        .bind(changes.description)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
