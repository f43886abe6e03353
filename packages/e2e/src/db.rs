//! In-memory users, tokens and blogs.

use std::collections::HashMap;
use std::sync::Arc;

use store::{Blog, BlogOwner, UserRef};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::BackendError;

pub type SharedDb = Arc<Mutex<Db>>;

#[derive(Clone, Debug)]
pub struct StoredUser {
    pub id: String,
    pub name: String,
    pub username: String,
    pub password: String,
}

impl StoredUser {
    pub fn to_ref(&self) -> UserRef {
        UserRef {
            id: self.id.clone(),
            name: self.name.clone(),
            username: self.username.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct StoredBlog {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
    pub owner: String,
}

impl StoredBlog {
    /// The shape returned by create and update: the owner is only an id.
    pub fn to_blog(&self) -> Blog {
        Blog {
            id: self.id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            url: self.url.clone(),
            likes: self.likes,
            user: Some(BlogOwner::Id(self.owner.clone())),
        }
    }
}

#[derive(Debug, Default)]
pub struct Db {
    users: Vec<StoredUser>,
    /// token -> user id
    tokens: HashMap<String, String>,
    blogs: Vec<StoredBlog>,
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

impl Db {
    pub fn shared() -> SharedDb {
        Arc::new(Mutex::new(Self::default()))
    }

    pub fn reset(&mut self) {
        self.users.clear();
        self.tokens.clear();
        self.blogs.clear();
    }

    pub fn add_user(&mut self, name: &str, username: &str, password: &str) -> Result<UserRef, BackendError> {
        if username.len() < 3 || password.len() < 3 {
            return Err(BackendError::Validation(
                "username and password must be at least 3 characters long".to_string(),
            ));
        }
        if self.users.iter().any(|u| u.username == username) {
            return Err(BackendError::Validation("expected `username` to be unique".to_string()));
        }
        let user = StoredUser {
            id: new_id(),
            name: name.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        };
        let user_ref = user.to_ref();
        self.users.push(user);
        Ok(user_ref)
    }

    /// Check a password and issue a fresh token.
    pub fn authenticate(&mut self, username: &str, password: &str) -> Option<(StoredUser, String)> {
        let user = self
            .users
            .iter()
            .find(|u| u.username == username && u.password == password)?
            .clone();
        let token = new_id();
        self.tokens.insert(token.clone(), user.id.clone());
        Some((user, token))
    }

    pub fn user_for_token(&self, token: &str) -> Option<&StoredUser> {
        let id = self.tokens.get(token)?;
        self.user(id)
    }

    pub fn user(&self, id: &str) -> Option<&StoredUser> {
        self.users.iter().find(|u| u.id == id)
    }

    /// All blogs with their owner populated, in insertion order.
    pub fn populated_blogs(&self) -> Vec<Blog> {
        self.blogs
            .iter()
            .map(|stored| {
                let mut blog = stored.to_blog();
                if let Some(owner) = self.user(&stored.owner) {
                    blog.user = Some(BlogOwner::User(owner.to_ref()));
                }
                blog
            })
            .collect()
    }

    pub fn insert_blog(&mut self, title: String, author: String, url: String, likes: u64, owner: String) -> StoredBlog {
        let blog = StoredBlog {
            id: new_id(),
            title,
            author,
            url,
            likes,
            owner,
        };
        self.blogs.push(blog.clone());
        blog
    }

    pub fn blog(&self, id: &str) -> Option<&StoredBlog> {
        self.blogs.iter().find(|b| b.id == id)
    }

    pub fn blog_mut(&mut self, id: &str) -> Option<&mut StoredBlog> {
        self.blogs.iter_mut().find(|b| b.id == id)
    }

    pub fn remove_blog(&mut self, id: &str) -> Option<StoredBlog> {
        let index = self.blogs.iter().position(|b| b.id == id)?;
        Some(self.blogs.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_user_rejects_duplicates_and_short_fields() {
        let mut db = Db::default();
        assert!(db.add_user("Jane Doe", "jane", "password").is_ok());
        assert!(matches!(
            db.add_user("Other Jane", "jane", "secret"),
            Err(BackendError::Validation(_))
        ));
        assert!(matches!(db.add_user("X", "xy", "secret"), Err(BackendError::Validation(_))));
        assert!(matches!(db.add_user("X", "xyz", "pw"), Err(BackendError::Validation(_))));
    }

    #[test]
    fn test_authenticate_issues_distinct_tokens() {
        let mut db = Db::default();
        db.add_user("Jane Doe", "jane", "password").unwrap();

        assert!(db.authenticate("jane", "wrong").is_none());
        let (user, first) = db.authenticate("jane", "password").unwrap();
        let (_, second) = db.authenticate("jane", "password").unwrap();
        assert_ne!(first, second);
        assert_eq!(db.user_for_token(&first).map(|u| u.id.as_str()), Some(user.id.as_str()));
        assert!(db.user_for_token("bogus").is_none());
    }

    #[test]
    fn test_populated_blogs_embed_owner() {
        let mut db = Db::default();
        let jane = db.add_user("Jane Doe", "jane", "password").unwrap();
        let stored = db.insert_blog("T".into(), "A".into(), "u".into(), 0, jane.id.clone());

        assert_eq!(stored.to_blog().user, Some(BlogOwner::Id(jane.id.clone())));
        let blogs = db.populated_blogs();
        assert_eq!(blogs[0].owner_name(), Some("Jane Doe"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut db = Db::default();
        let jane = db.add_user("Jane Doe", "jane", "password").unwrap();
        let (_, token) = db.authenticate("jane", "password").unwrap();
        let blog = db.insert_blog("T".into(), "A".into(), "u".into(), 0, jane.id);

        db.reset();
        assert!(db.user_for_token(&token).is_none());
        assert!(db.blog(&blog.id).is_none());
        assert!(db.populated_blogs().is_empty());
    }
}
