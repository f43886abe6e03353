//! # Domain models for users and blogs
//!
//! Defines the records exchanged with the blog list backend and persisted by the
//! [`crate::SessionStore`]. Every type is `Serialize + Deserialize` so the same
//! definitions are used for the HTTP wire format and for local storage.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | The logged-in user as returned by `POST /api/login`, including the bearer `token`. Persisted verbatim. |
//! | [`UserRef`] | A user as embedded in a blog listing (`id`, `name`, `username`) or returned by registration. |
//! | [`BlogOwner`] | The `user` field of a blog: either a populated [`UserRef`] or a bare id, depending on the endpoint. |
//! | [`Blog`] | A blog post with its like count and owner. |
//! | [`NewBlog`] | The body of `POST /api/blogs`: the form fields plus the owner id. |
//!
//! ## Owner normalization
//!
//! The backend populates the owner on `GET /api/blogs` but answers `POST`/`PUT` with
//! an id-only owner. Requests always send the id ([`Blog::owner_id`]); rendering
//! needs a name, so [`BlogOwner::hydrate`] re-attaches a known [`UserRef`] when
//! the ids match.

use serde::{Deserialize, Serialize};

/// An authenticated user together with its bearer token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    pub token: String,
}

impl User {
    /// The token-free reference used when rendering ownership.
    pub fn to_ref(&self) -> UserRef {
        UserRef {
            id: self.id.clone(),
            name: self.name.clone(),
            username: self.username.clone(),
        }
    }
}

/// A user as seen from a blog listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub username: String,
}

/// The `user` field of a blog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlogOwner {
    User(UserRef),
    Id(String),
}

impl BlogOwner {
    pub fn id(&self) -> &str {
        match self {
            BlogOwner::User(user) => &user.id,
            BlogOwner::Id(id) => id,
        }
    }

    /// Display name, if the owner is populated.
    pub fn name(&self) -> Option<&str> {
        match self {
            BlogOwner::User(user) => Some(&user.name),
            BlogOwner::Id(_) => None,
        }
    }

    /// Replace an id-only owner with `known` when both refer to the same user.
    pub fn hydrate(self, known: Option<&UserRef>) -> Self {
        match (self, known) {
            (BlogOwner::Id(id), Some(user)) if user.id == id => BlogOwner::User(user.clone()),
            (owner, _) => owner,
        }
    }
}

/// A blog post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<BlogOwner>,
}

impl Blog {
    pub fn owner_id(&self) -> Option<&str> {
        self.user.as_ref().map(BlogOwner::id)
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.user.as_ref().and_then(BlogOwner::name)
    }

    /// Whether `user_id` owns this blog.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id() == Some(user_id)
    }

    /// A copy with the owner reduced to its id, as sent in update requests.
    pub fn with_owner_id(&self) -> Self {
        Self {
            user: self.owner_id().map(|id| BlogOwner::Id(id.to_string())),
            ..self.clone()
        }
    }
}

/// Body of a blog creation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlog {
    pub title: String,
    pub author: String,
    pub url: String,
    /// Id of the creating user.
    pub user: String,
}
