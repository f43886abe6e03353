//! # End-to-end harness
//!
//! An in-memory stand-in for the blog list backend, speaking the same JSON
//! contract as the real one:
//!
//! | Route | Auth | Behaviour |
//! |-------|------|-----------|
//! | `GET /api/blogs` | no | all blogs, owner populated as `{id, name, username}` |
//! | `POST /api/blogs` | bearer | 201 with the created blog, owner as a bare id; 400 without title or url |
//! | `PUT /api/blogs/{id}` | bearer | replaces title/author/url/likes, owner as a bare id; 404 for unknown ids |
//! | `DELETE /api/blogs/{id}` | bearer | 204; 403 for anyone but the creator; 404 for unknown ids |
//! | `POST /api/login` | no | `{id, name, username, token}` or 401 |
//! | `POST /api/users` | no | 201 with the new user; 400 on short or duplicate usernames |
//! | `POST /api/testing/reset` | no | wipes users, tokens and blogs |
//!
//! Errors are JSON bodies of the form `{"error": "<message>"}`.
//!
//! Tests start one per case with [`FakeBackend::spawn`]; the `fake-backend`
//! binary serves it on a fixed address for manual runs of the web frontend.

use std::net::SocketAddr;

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::{
    net::{TcpListener, ToSocketAddrs},
    task::JoinHandle,
};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

mod db;
mod error;
mod routes;

pub use db::{Db, SharedDb};
pub use error::BackendError;

/// `(name, username, password)` of the users the scenarios log in with.
pub const DEMO_USERS: [(&str, &str, &str); 2] = [
    ("Aleksandar Prodanic", "aleksandar", "sifra"),
    ("Jane Doe", "jane", "password"),
];

pub fn router(db: SharedDb) -> Router {
    Router::new()
        .route("/api/blogs", get(routes::list_blogs).post(routes::create_blog))
        .route("/api/blogs/{id}", put(routes::update_blog).delete(routes::delete_blog))
        .route("/api/login", post(routes::login))
        .route("/api/users", post(routes::create_user))
        .route("/api/testing/reset", post(routes::reset))
        .layer(CorsLayer::permissive())
        .with_state(db)
}

/// A fake backend serving on a background task until dropped.
pub struct FakeBackend {
    addr: SocketAddr,
    db: SharedDb,
    server: JoinHandle<()>,
}

impl FakeBackend {
    /// Serve on an ephemeral localhost port.
    pub async fn spawn() -> std::io::Result<Self> {
        Self::bind("127.0.0.1:0").await
    }

    pub async fn bind(addr: impl ToSocketAddrs) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        let db = Db::shared();
        let app = router(db.clone());

        let server = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                error!("Fake backend stopped: {e}");
            }
        });
        info!("Fake backend listening on {addr}");

        Ok(Self { addr, db, server })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Origin to hand to the API client, without `/api`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Direct access to the stored data, bypassing HTTP.
    pub fn db(&self) -> &SharedDb {
        &self.db
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}
