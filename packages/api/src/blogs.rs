//! # Blog collection service
//!
//! [`BlogService`] wraps the `/api/blogs` resource collection.
//!
//! | Method | Request | Auth |
//! |--------|---------|------|
//! | [`get_all`](BlogService::get_all) | `GET /api/blogs` | none |
//! | [`create`](BlogService::create) | `POST /api/blogs` with `{title, author, url, user}` | bearer |
//! | [`update`](BlogService::update) | `PUT /api/blogs/:id` with the full record, owner as id | bearer |
//! | [`delete`](BlogService::delete) | `DELETE /api/blogs/:id` | bearer |
//!
//! Delete is not idempotent: a second delete of the same id is whatever error the
//! server answers (usually [`ApiError::NotFound`]).

use store::{Blog, NewBlog};

use crate::client::{authorized, fetch_empty, fetch_json, Backend};
use crate::credential::Credential;
use crate::error::ApiError;

const BLOGS_PATH: &str = "/api/blogs";

#[derive(Clone, Debug)]
pub struct BlogService {
    backend: Backend,
}

impl BlogService {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn get_all(&self) -> Result<Vec<Blog>, ApiError> {
        tracing::debug!("GET {}", BLOGS_PATH);
        fetch_json(self.backend.get(BLOGS_PATH)).await
    }

    pub async fn create(&self, credential: &Credential, blog: &NewBlog) -> Result<Blog, ApiError> {
        tracing::debug!("POST {} title={:?}", BLOGS_PATH, blog.title);
        let request = authorized(self.backend.post(BLOGS_PATH), credential).json(blog);
        fetch_json(request).await
    }

    /// Replace a blog by id. The owner is always sent as a bare id.
    pub async fn update(&self, credential: &Credential, blog: &Blog) -> Result<Blog, ApiError> {
        let path = format!("{BLOGS_PATH}/{}", blog.id);
        tracing::debug!("PUT {} likes={}", path, blog.likes);
        let request = authorized(self.backend.put(&path), credential).json(&blog.with_owner_id());
        fetch_json(request).await
    }

    pub async fn delete(&self, credential: &Credential, id: &str) -> Result<(), ApiError> {
        let path = format!("{BLOGS_PATH}/{id}");
        tracing::debug!("DELETE {}", path);
        fetch_empty(authorized(self.backend.delete(&path), credential)).await
    }
}
