//! Username/password login.

use serde::{Deserialize, Serialize};
use store::User;

use crate::client::{fetch_json, Backend};
use crate::error::ApiError;

/// Body of `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LoginService {
    backend: Backend,
}

impl LoginService {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Exchange credentials for a [`User`] carrying a bearer token.
    ///
    /// Bad credentials come back as [`ApiError::Unauthorized`].
    pub async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        tracing::debug!("POST /api/login username={}", request.username);
        fetch_json(self.backend.post("/api/login").json(request)).await
    }
}
