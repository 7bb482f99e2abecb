//! Todo CRUD.
//!
//! Endpoints:
//! - POST /todos - Create a todo dated now
//! - GET /todos - List all todos
//! - GET /todos/{user} - List todos owned by an email
//! - PUT /todos/{id} - Partially update a todo
//! - DELETE /todos/{id} - Delete a todo
//!
//! GET and PUT/DELETE share the `/todos/{id}` path; for GET the segment is
//! the owner's email rather than a todo id.

use axum::{
    Json, Router, debug_handler,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use garde::Validate;
use shared::api::{
    CreateTodoPayload, DeleteTodoResponse, TodoItem, UpdateTodoPayload, UpdateTodoResponse,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{NewTodo, TodoChanges},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(list_user_todos).put(update_todo).delete(delete_todo),
        )
}

fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::External(StatusCode::BAD_REQUEST, "invalid id format"))
}

#[debug_handler]
async fn list_todos(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let todos = state.repos.todos.list_all().await?;

    Ok(Json(todos.into_iter().map(TodoItem::from).collect::<Vec<_>>()))
}

#[debug_handler]
async fn list_user_todos(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let todos = state.repos.todos.list_by_user(&user).await?;

    Ok(Json(todos.into_iter().map(TodoItem::from).collect::<Vec<_>>()))
}

#[debug_handler]
async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(AppError::bad_body)?;
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let todo = state
        .repos
        .todos
        .create(NewTodo {
            user: payload.user,
            tag: payload.tag,
            description: payload.description,
        })
        .await?;

    tracing::info!(todo_id = %todo.id, user = %todo.user, "todo created");

    Ok((StatusCode::CREATED, Json(TodoItem::from(todo))))
}

#[debug_handler]
async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodoPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let Json(payload) = payload.map_err(AppError::bad_body)?;

    if payload.is_empty() {
        return Err(AppError::External(
            StatusCode::BAD_REQUEST,
            "no fields to update",
        ));
    }

    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let changes = TodoChanges {
        user: payload.user,
        date: payload.date,
        tag: payload.tag,
        description: payload.description,
    };

    let matched = state.repos.todos.update(id, changes).await?;
    if matched == 0 {
        return Err(AppError::External(StatusCode::NOT_FOUND, "todo not found"));
    }

    tracing::info!(todo_id = %id, "todo updated");

    Ok(Json(UpdateTodoResponse {
        updated_id: id,
        modified_count: matched,
    }))
}

#[debug_handler]
async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    if !state.repos.todos.delete(id).await? {
        return Err(AppError::External(StatusCode::NOT_FOUND, "todo not found"));
    }

    tracing::info!(todo_id = %id, "todo deleted");

    Ok(Json(DeleteTodoResponse { deleted_id: id }))
}
