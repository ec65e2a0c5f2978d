use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use crate::application::todo_service::TodoService;
use crate::domain::todo::{CompletionFilter, CreateTodo, Todo, TodoId, UpdateTodo};
use crate::http::types::ApiError;

#[derive(Clone)]
pub struct AppState<S: TodoService> {
    pub service: S,
}

// Collection paths are served with and without a trailing slash; axum routes
// the two spellings separately, so both point at the same handlers.
pub fn router<S: TodoService + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/todos", post(create_todo::<S>).get(list_todos::<S>))
        .route("/todos/", post(create_todo::<S>).get(list_todos::<S>))
        .route("/todos/completed", get(list_completed::<S>))
        .route("/todos/completed/", get(list_completed::<S>))
        .route("/todos/pending", get(list_pending::<S>))
        .route("/todos/pending/", get(list_pending::<S>))
        .route("/todos/:id", get(get_todo::<S>).put(update_todo::<S>).delete(delete_todo::<S>))
        .with_state(state)
}

async fn create_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Json(payload): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    validate_title(&payload.title)?;
    let todo = state.service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn list_todos<S: TodoService>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.service.list(CompletionFilter::All).await?))
}

async fn list_completed<S: TodoService>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.service.list(CompletionFilter::Completed).await?))
}

async fn list_pending<S: TodoService>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.service.list(CompletionFilter::Pending).await?))
}

async fn get_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    state.service.get(id).await?.map(Json).ok_or(ApiError::NotFound)
}

async fn update_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    if let Some(title) = &payload.title {
        validate_title(title)?;
    }
    state.service.update(id, payload).await?.map(Json).ok_or(ApiError::NotFound)
}

async fn delete_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    if state.service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

fn parse_id(s: &str) -> Result<TodoId, ApiError> {
    Uuid::parse_str(s).map(TodoId).map_err(|_| ApiError::InvalidId)
}

fn validate_title(title: &str) -> Result<(), ApiError> {
    if title.trim().is_empty() {
        return Err(ApiError::Validation("title must not be empty".into()));
    }
    Ok(())
}
