//! # Headless application driver
//!
//! [`BlogApp`] runs the [`AppState`] transitions against real backend services
//! without a renderer. Each method mirrors one user gesture of the web frontend,
//! such as submitting the login form or clicking `like`, and awaits the backend's
//! answer before returning.
//!
//! Notification clears are spawned on the current tokio runtime, so a notification
//! disappears on its own after the configured delay, exactly as in the browser.
//! Showing a new notification aborts the pending clear of the previous one.
//! Call [`snapshot`](BlogApp::snapshot) to inspect what would be rendered.

use std::sync::Arc;
use std::time::Duration;

use api::Services;
use store::{ClientConfig, KeyValueStore, SessionStore};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::state::{AppState, Effect, Ticket};

pub struct BlogApp<S: KeyValueStore> {
    services: Services,
    sessions: SessionStore<S>,
    state: Arc<Mutex<AppState>>,
    pending_clear: Mutex<Option<JoinHandle<()>>>,
}

impl<S: KeyValueStore> BlogApp<S> {
    pub fn new(services: Services, sessions: SessionStore<S>, notification_duration: Duration) -> Self {
        Self {
            services,
            sessions,
            state: Arc::new(Mutex::new(AppState::new(notification_duration))),
            pending_clear: Mutex::new(None),
        }
    }

    /// Build from a client config, persisting the session in `store`.
    pub fn from_config(config: &ClientConfig, store: S) -> Self {
        Self::new(
            Services::new(config.api.base_url.clone()),
            SessionStore::with_key(store, config.session.storage_key.clone()),
            config.notification_duration(),
        )
    }

    pub async fn snapshot(&self) -> AppState {
        self.state.lock().await.clone()
    }

    /// Page load: resume a persisted session.
    pub async fn restore(&self) {
        let effect = self.state.lock().await.restore(&self.sessions);
        if let Some(effect) = effect {
            self.apply(effect).await;
        }
    }

    pub async fn login(&self, username: &str, password: &str) {
        let request = {
            let mut state = self.state.lock().await;
            state.login_form.username = username.to_string();
            state.login_form.password = password.to_string();
            state.login_request()
        };
        let result = self.services.login.login(&request).await;
        let effect = self.state.lock().await.on_login(result, &self.sessions);
        self.apply(effect).await;
    }

    pub async fn logout(&self) {
        self.state.lock().await.logout(&self.sessions);
    }

    pub async fn load_blogs(&self) {
        let result = self.services.blogs.get_all().await;
        let effect = self.state.lock().await.on_blogs_loaded(result);
        if let Some(Effect::ScheduleClear(ticket)) = effect {
            self.schedule_clear(ticket).await;
        }
    }

    pub async fn toggle_form(&self) {
        self.state.lock().await.toggle_form();
    }

    /// Fill the create form and submit it. Returns whether a request was sent.
    pub async fn add_blog(&self, title: &str, author: &str, url: &str) -> bool {
        let request = {
            let mut state = self.state.lock().await;
            state.blog_form.title = title.to_string();
            state.blog_form.author = author.to_string();
            state.blog_form.url = url.to_string();
            state.create_request()
        };
        let Some((credential, blog)) = request else {
            return false;
        };
        let result = self.services.blogs.create(&credential, &blog).await;
        let effect = self.state.lock().await.on_blog_created(&credential, result);
        if let Some(effect) = effect {
            self.apply(effect).await;
        }
        true
    }

    pub async fn like(&self, id: &str) -> bool {
        let request = self.state.lock().await.like_request(id);
        let Some((credential, blog)) = request else {
            return false;
        };
        let result = self.services.blogs.update(&credential, &blog).await;
        let effect = self.state.lock().await.on_blog_liked(&credential, result);
        if let Some(effect) = effect {
            self.apply(effect).await;
        }
        true
    }

    /// Delete after asking `confirm` with the prompt text. Returns whether a
    /// request was sent.
    pub async fn delete(&self, id: &str, confirm: impl FnOnce(&str) -> bool) -> bool {
        let request = {
            let mut state = self.state.lock().await;
            let Some(blog) = state.deletable(id) else {
                return false;
            };
            if !confirm(&AppState::delete_prompt(blog)) {
                return false;
            }
            state.delete_request(id)
        };
        let Some((credential, blog)) = request else {
            return false;
        };
        let result = self.services.blogs.delete(&credential, &blog.id).await;
        let effect = self
            .state
            .lock()
            .await
            .on_blog_deleted(&credential, &blog, result);
        if let Some(effect) = effect {
            self.apply(effect).await;
        }
        true
    }

    async fn apply(&self, effect: Effect) {
        match effect {
            Effect::FetchBlogs => self.load_blogs().await,
            Effect::ScheduleClear(ticket) => self.schedule_clear(ticket).await,
        }
    }

    async fn schedule_clear(&self, ticket: Ticket) {
        let state = Arc::clone(&self.state);
        let task = tokio::spawn(async move {
            tokio::time::sleep(ticket.after()).await;
            state.lock().await.expire(ticket);
        });
        if let Some(previous) = self.pending_clear.lock().await.replace(task) {
            previous.abort();
        }
    }
}

impl<S: KeyValueStore> Drop for BlogApp<S> {
    fn drop(&mut self) {
        if let Some(task) = self.pending_clear.get_mut().take() {
            task.abort();
        }
    }
}
