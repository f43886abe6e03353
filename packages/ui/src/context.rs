//! Application context and hooks for the UI.
//!
//! [`AppProvider`] owns the [`AppState`] signal, the backend services and the
//! platform session store. Components reach them through [`use_app`] and trigger
//! user actions through the [`AppContext`] methods, which spawn the request and
//! fold the answer back into the signal.

use api::Services;
use dioxus::core::Task;
use dioxus::prelude::*;
use store::{ClientConfig, SessionStore};

use crate::platform;
use crate::session::{make_session_store, PlatformStore};
use crate::state::{AppState, Effect, Ticket};

#[derive(Clone)]
pub struct AppContext {
    pub state: Signal<AppState>,
    services: Services,
    sessions: SessionStore<PlatformStore>,
    /// The pending notification clear, cancelled when a newer one is scheduled.
    clear_task: Signal<Option<Task>>,
}

/// Get the application context provided by [`AppProvider`].
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

/// Provider component that manages application state.
/// Wrap your app with this component; the persisted session is restored on mount.
#[component]
pub fn AppProvider(config: ClientConfig, children: Element) -> Element {
    let ctx = use_context_provider(|| AppContext {
        state: Signal::new(AppState::new(config.notification_duration())),
        services: Services::new(config.api.base_url.clone()),
        sessions: make_session_store(&config.session.storage_key),
        clear_task: Signal::new(None),
    });

    use_hook(move || ctx.restore());

    rsx! {
        {children}
    }
}

impl AppContext {
    pub fn restore(&self) {
        let mut state = self.state;
        let effect = state.write().restore(&self.sessions);
        if let Some(effect) = effect {
            self.apply(effect);
        }
    }

    /// Submit the login form.
    pub fn login(&self) {
        let ctx = self.clone();
        let request = self.state.read().login_request();
        spawn(async move {
            let result = ctx.services.login.login(&request).await;
            let mut state = ctx.state;
            let effect = state.write().on_login(result, &ctx.sessions);
            ctx.apply(effect);
        });
    }

    pub fn logout(&self) {
        let mut state = self.state;
        state.write().logout(&self.sessions);
    }

    pub fn load_blogs(&self) {
        let ctx = self.clone();
        spawn(async move {
            let result = ctx.services.blogs.get_all().await;
            let mut state = ctx.state;
            let effect = state.write().on_blogs_loaded(result);
            if let Some(effect) = effect {
                ctx.apply(effect);
            }
        });
    }

    /// Submit the create form.
    pub fn add_blog(&self) {
        let mut state = self.state;
        let Some((credential, blog)) = state.write().create_request() else {
            return;
        };
        let ctx = self.clone();
        spawn(async move {
            let result = ctx.services.blogs.create(&credential, &blog).await;
            let mut state = ctx.state;
            let effect = state.write().on_blog_created(&credential, result);
            if let Some(effect) = effect {
                ctx.apply(effect);
            }
        });
    }

    pub fn like(&self, id: &str) {
        let Some((credential, blog)) = self.state.read().like_request(id) else {
            return;
        };
        let ctx = self.clone();
        spawn(async move {
            let result = ctx.services.blogs.update(&credential, &blog).await;
            let mut state = ctx.state;
            let effect = state.write().on_blog_liked(&credential, result);
            if let Some(effect) = effect {
                ctx.apply(effect);
            }
        });
    }

    /// Ask for confirmation, then delete.
    pub fn delete(&self, id: &str) {
        let prompt = match self.state.read().deletable(id) {
            Some(blog) => AppState::delete_prompt(blog),
            None => return,
        };
        if !platform::confirm(&prompt) {
            return;
        }
        let mut state = self.state;
        let Some((credential, blog)) = state.write().delete_request(id) else {
            return;
        };
        let ctx = self.clone();
        spawn(async move {
            let result = ctx.services.blogs.delete(&credential, &blog.id).await;
            let mut state = ctx.state;
            let effect = state.write().on_blog_deleted(&credential, &blog, result);
            if let Some(effect) = effect {
                ctx.apply(effect);
            }
        });
    }

    fn apply(&self, effect: Effect) {
        match effect {
            Effect::FetchBlogs => self.load_blogs(),
            Effect::ScheduleClear(ticket) => self.schedule_clear(ticket),
        }
    }

    fn schedule_clear(&self, ticket: Ticket) {
        let mut pending = self.clear_task;
        if let Some(task) = pending.write().take() {
            task.cancel();
        }
        let mut state = self.state;
        let task = spawn(async move {
            platform::sleep(ticket.after()).await;
            state.write().expire(ticket);
        });
        pending.set(Some(task));
    }
}
