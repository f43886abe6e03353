pub mod config;
pub mod models;
pub mod session;

mod file_store;
pub use file_store::FileStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::ClientConfig;
pub use models::{Blog, BlogOwner, NewBlog, User, UserRef};
pub use session::{KeyValueStore, SessionStore, DEFAULT_SESSION_KEY};
