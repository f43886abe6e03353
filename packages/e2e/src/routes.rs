use api::{LoginRequest, NewUser};
use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use store::{Blog, BlogOwner, User};
use tracing::{debug, info};

use crate::db::{Db, SharedDb, StoredUser};
use crate::error::BackendError;

/// Body of `POST /api/blogs` and `PUT /api/blogs/{id}`.
#[derive(Deserialize)]
pub struct BlogPayload {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    likes: u64,
    #[serde(default)]
    user: Option<BlogOwner>,
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn authorize(db: &Db, headers: &HeaderMap) -> Result<StoredUser, BackendError> {
    bearer(headers)
        .and_then(|token| db.user_for_token(token))
        .cloned()
        .ok_or(BackendError::Unauthorized)
}

fn require_title_and_url(payload: &BlogPayload) -> Result<(), BackendError> {
    if payload.title.trim().is_empty() || payload.url.trim().is_empty() {
        return Err(BackendError::Validation("title and url are required".to_string()));
    }
    Ok(())
}

pub async fn list_blogs(State(db): State<SharedDb>) -> Json<Vec<Blog>> {
    Json(db.lock().await.populated_blogs())
}

pub async fn create_blog(
    State(db): State<SharedDb>,
    headers: HeaderMap,
    Json(payload): Json<BlogPayload>,
) -> Result<impl IntoResponse, BackendError> {
    let mut db = db.lock().await;
    let user = authorize(&db, &headers)?;
    require_title_and_url(&payload)?;
    if let Some(owner) = &payload.user {
        if owner.id() != user.id {
            return Err(BackendError::Validation("user does not match token".to_string()));
        }
    }

    let blog = db.insert_blog(payload.title, payload.author, payload.url, payload.likes, user.id);
    debug!("Created blog {} for {}", blog.id, user.username);
    Ok((StatusCode::CREATED, Json(blog.to_blog())))
}

/// Full replace of the mutable fields; the owner never changes.
pub async fn update_blog(
    State(db): State<SharedDb>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<BlogPayload>,
) -> Result<Json<Blog>, BackendError> {
    let mut db = db.lock().await;
    authorize(&db, &headers)?;
    require_title_and_url(&payload)?;

    let blog = db.blog_mut(&id).ok_or(BackendError::NotFound)?;
    blog.title = payload.title;
    blog.author = payload.author;
    blog.url = payload.url;
    blog.likes = payload.likes;
    debug!("Updated blog {id}, likes={}", blog.likes);
    Ok(Json(blog.to_blog()))
}

pub async fn delete_blog(
    State(db): State<SharedDb>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, BackendError> {
    let mut db = db.lock().await;
    let user = authorize(&db, &headers)?;

    let blog = db.blog(&id).ok_or(BackendError::NotFound)?;
    if blog.owner != user.id {
        return Err(BackendError::Forbidden);
    }
    db.remove_blog(&id);
    debug!("Deleted blog {id}");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn login(
    State(db): State<SharedDb>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<User>, BackendError> {
    let (user, token) = db
        .lock()
        .await
        .authenticate(&payload.username, &payload.password)
        .ok_or(BackendError::InvalidCredentials)?;
    info!("{} logged in", user.username);
    Ok(Json(User {
        id: user.id,
        name: user.name,
        username: user.username,
        token,
    }))
}

pub async fn create_user(
    State(db): State<SharedDb>,
    Json(payload): Json<NewUser>,
) -> Result<impl IntoResponse, BackendError> {
    let user = db
        .lock()
        .await
        .add_user(&payload.name, &payload.username, &payload.password)?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn reset(State(db): State<SharedDb>) -> StatusCode {
    db.lock().await.reset();
    info!("Reset all users and blogs");
    StatusCode::NO_CONTENT
}
