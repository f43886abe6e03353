//! Shared HTTP plumbing for the backend services.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::credential::Credential;
use crate::error::ApiError;

/// A `reqwest` client bound to a backend origin.
///
/// Cheap to clone; all services built from one `Backend` share a connection pool.
#[derive(Clone, Debug)]
pub struct Backend {
    http: Client,
    base_url: String,
}

impl Backend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.http.put(self.url(path))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.http.delete(self.url(path))
    }
}

/// Attach the bearer header.
pub(crate) fn authorized(request: RequestBuilder, credential: &Credential) -> RequestBuilder {
    request.header(reqwest::header::AUTHORIZATION, credential.header_value())
}

/// Send a request and decode a JSON body on success.
pub(crate) async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ApiError::from_status(status, &body));
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send a request whose success body is ignored.
pub(crate) async fn fetch_empty(request: RequestBuilder) -> Result<(), ApiError> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}
