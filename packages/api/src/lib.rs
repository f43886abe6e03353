//! # API crate: HTTP client for the blog list backend
//!
//! Every frontend talks to the backend through the services defined here. They are
//! thin `reqwest` wrappers: each method issues one request, attaches a bearer
//! [`Credential`] when the endpoint mutates state, and decodes the JSON response
//! into the models from the `store` crate.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`blogs`] | `BlogService`: fetch-all, create, update and delete on `/api/blogs` |
//! | [`login`] | `LoginService`: exchange username/password for a [`store::User`] |
//! | [`users`] | `UserService` and `TestingService`: registration and reset, used by end-to-end runs |
//! | [`credential`] | The bearer [`Credential`] passed explicitly to mutating calls |
//! | [`error`] | [`ApiError`], mapping HTTP statuses and transport failures |
//!
//! ## Credentials
//!
//! There is no global token. A caller holding a session builds a [`Credential`] from
//! its [`store::User`] and hands it to each mutating call, so independent sessions
//! can coexist in one process.

pub mod blogs;
mod client;
pub mod credential;
pub mod error;
pub mod login;
pub mod users;

pub use blogs::BlogService;
pub use client::Backend;
pub use credential::Credential;
pub use error::ApiError;
pub use login::{LoginRequest, LoginService};
pub use users::{NewUser, TestingService, UserService};

/// The services a frontend needs, sharing one connection pool.
#[derive(Clone, Debug)]
pub struct Services {
    pub blogs: BlogService,
    pub login: LoginService,
}

impl Services {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_backend(Backend::new(base_url))
    }

    pub fn from_backend(backend: Backend) -> Self {
        Self {
            blogs: BlogService::new(backend.clone()),
            login: LoginService::new(backend),
        }
    }
}
