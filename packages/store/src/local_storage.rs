//! # Browser local storage: web persistence
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. It reads
//! and writes `window.localStorage` through `web-sys`.
//!
//! ## Error handling
//!
//! All trait methods swallow errors (returning `None` for reads, doing nothing for
//! writes). Storage can be unavailable (private browsing, quota, sandboxed
//! iframes); that degrades to "no saved session" rather than breaking login.

use crate::session::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for the web platform.
///
/// Zero-sized and `Copy`: the storage handle is looked up on every call since
/// `web_sys::Storage` is not `Send`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, {} not saved", key);
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage rejected write of {}", key);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
