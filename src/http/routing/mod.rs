use axum::{routing::get, Json, Router};

async fn welcome() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Welcome to the Todo API!" }))
}

pub fn app(todos: Router) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(|| async { "ok" }))
        .merge(todos)
}
