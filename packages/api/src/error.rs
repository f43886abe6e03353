//! Errors returned by the backend services.

use reqwest::StatusCode;
use serde::Deserialize;

/// Failure of a backend call.
///
/// Statuses are folded into the categories the UI reacts to. [`is_retryable`]
/// separates failures worth trying again (network, 5xx) from permanent ones.
///
/// [`is_retryable`]: ApiError::is_retryable
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("invalid request: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Build an error from a non-success status and the raw response body.
    ///
    /// Bodies of the form `{"error": "..."}` contribute their message; anything
    /// else falls back to the canonical status reason.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::Validation(message)
            }
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            _ => ApiError::Server {
                status: status.as_u16(),
                message,
            },
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Server { .. })
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    /// Short user-facing reason, without transport internals.
    pub fn reason(&self) -> String {
        match self {
            ApiError::Transport(_) => "server unreachable, try again".to_string(),
            ApiError::Server { .. } => "server error, try again".to_string(),
            ApiError::Unauthorized(msg) | ApiError::Validation(msg) | ApiError::NotFound(msg) => {
                msg.clone()
            }
            ApiError::Decode(_) => "unexpected server response".to_string(),
        }
    }
}
