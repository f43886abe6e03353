use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("token missing or invalid")]
    Unauthorized,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("only the creator can delete a blog")]
    Forbidden,

    #[error("{0}")]
    Validation(String),

    #[error("blog not found")]
    NotFound,
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = match self {
            BackendError::Unauthorized | BackendError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            BackendError::Forbidden => StatusCode::FORBIDDEN,
            BackendError::Validation(_) => StatusCode::BAD_REQUEST,
            BackendError::NotFound => StatusCode::NOT_FOUND,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
