//! This crate contains the blog list application state and all shared UI for the workspace.

pub mod components;
pub use components::{BlogForm, BlogItem, LoginForm, NotificationBanner};

mod context;
pub use context::{use_app, AppContext, AppProvider};

pub mod platform;

mod session;
pub use session::{make_session_store, PlatformStore};

pub mod state;
pub use state::{AppState, BlogRow, Effect, Notification, NotificationKind, Notifier, Session, Ticket};

#[cfg(not(target_arch = "wasm32"))]
mod app;
#[cfg(not(target_arch = "wasm32"))]
pub use app::BlogApp;
