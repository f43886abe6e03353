//! User registration and backend reset, used to prepare end-to-end runs.

use serde::{Deserialize, Serialize};
use store::UserRef;

use crate::client::{fetch_empty, fetch_json, Backend};
use crate::error::ApiError;

/// Body of `POST /api/users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub password: String,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct UserService {
    backend: Backend,
}

impl UserService {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn register(&self, user: &NewUser) -> Result<UserRef, ApiError> {
        tracing::debug!("POST /api/users username={}", user.username);
        fetch_json(self.backend.post("/api/users").json(user)).await
    }
}

/// The backend's test-only endpoints.
#[derive(Clone, Debug)]
pub struct TestingService {
    backend: Backend,
}

impl TestingService {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Wipe all users and blogs.
    pub async fn reset(&self) -> Result<(), ApiError> {
        tracing::debug!("POST /api/testing/reset");
        fetch_empty(self.backend.post("/api/testing/reset")).await
    }
}
