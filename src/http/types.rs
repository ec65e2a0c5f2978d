use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Outcomes the HTTP layer reports to clients, mapped to status codes in
/// `IntoResponse`. Storage failures keep their cause for the log but the
/// response body stays generic.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("invalid todo id")]
    InvalidId,
    #[error("Todo not found")]
    NotFound,
    #[error("storage failure")]
    Storage(#[source] anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self { Self::Storage(err) }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(err) => {
                tracing::error!(error = %err, "storage failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(ErrorBody { message: self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn statuses_follow_the_error_kind() {
        assert_eq!(
            ApiError::Validation("title must not be empty".into()).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::InvalidId.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Storage(anyhow::anyhow!("disk gone")).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
