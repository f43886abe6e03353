//! # Session store: the logged-in user across reloads
//!
//! [`SessionStore`] persists the authenticated [`User`] (token included) as JSON under
//! a single key of a [`KeyValueStore`]. The same logic runs against browser local
//! storage on the web, a directory of files on native targets, or an in-memory map
//! in tests.
//!
//! ## [`KeyValueStore`] trait
//!
//! A synchronous string-to-string capability with `get`/`set`/`remove`. Backends
//! swallow their own I/O errors: a missing or unreadable entry is simply absent.
//!
//! ## Contract
//!
//! | Method | Behaviour |
//! |--------|-----------|
//! | [`save`](SessionStore::save) | Serialises the user and writes it under the session key. |
//! | [`load`](SessionStore::load) | Returns the stored user, or `None` when the entry is absent or corrupt. |
//! | [`clear`](SessionStore::clear) | Removes the entry. |

use crate::models::User;

/// Key used by the browser frontend for the persisted user.
pub const DEFAULT_SESSION_KEY: &str = "loggedBlogappUser";

/// Pluggable string key-value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Persists the current user under one key of a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_SESSION_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn save(&self, user: &User) -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(user)?;
        self.store.set(&self.key, &json);
        Ok(())
    }

    pub fn load(&self) -> Option<User> {
        let raw = self.store.get(&self.key)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Ignoring corrupt session entry {}: {}", self.key, e);
                None
            }
        }
    }

    pub fn clear(&self) {
        self.store.remove(&self.key);
    }
}
