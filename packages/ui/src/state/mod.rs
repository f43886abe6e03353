//! # Application state and its transitions
//!
//! [`AppState`] is everything the blog list view renders: the session, the blog
//! collection, the notification slot and the two forms. It never performs I/O.
//! Each user action is split in two:
//!
//! 1. a `*_request` method that reads the state and returns what to send (or
//!    `None` when the action is not allowed, e.g. deleting someone else's blog);
//! 2. an `on_*` method that folds the backend's answer back into the state and
//!    returns an [`Effect`] for the caller to run.
//!
//! Mutating requests carry the [`Credential`] they were sent with, and their
//! `on_*` handler takes it back. An answer whose credential no longer matches the
//! session (the user logged out, or someone else logged in meanwhile) is dropped
//! without touching the state.
//!
//! Both the Dioxus components and the headless [`crate::BlogApp`] drive the same
//! transitions, so the rules below hold for every frontend.
//!
//! | Rule | Where |
//! |------|-------|
//! | Render order is descending likes, ties in fetch order | [`AppState::visible_blogs`] |
//! | Delete is offered only to the owner | [`AppState::visible_blogs`], [`AppState::delete_request`] |
//! | Local list changes only after the server confirms | `on_blog_created`, `on_blog_liked`, `on_blog_deleted` |
//! | Answers from an ended session are ignored | [`AppState::is_current`] |
//! | Like sends `likes + 1`; the returned record wins | [`AppState::like_request`], [`AppState::on_blog_liked`] |
//! | Session store and credential change together | [`AppState::restore`], [`AppState::on_login`], [`AppState::logout`] |
//!
//! Concurrent likes of the same blog from two sessions can lose an increment: the
//! last response to arrive is what both the server and this state keep.

mod blog_list;
mod notification;

use std::collections::HashSet;
use std::time::Duration;

use api::{ApiError, Credential, LoginRequest};
use store::{Blog, BlogOwner, KeyValueStore, NewBlog, SessionStore, User, UserRef};

pub use blog_list::BlogList;
pub use notification::{Notification, NotificationKind, Notifier, Ticket};

pub const WRONG_CREDENTIALS: &str = "Wrong credentials";

/// Follow-up work requested by a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the whole collection and pass it to [`AppState::on_blogs_loaded`].
    FetchBlogs,
    /// Call [`AppState::expire`] with the ticket once its delay has passed.
    ScheduleClear(Ticket),
}

/// An authenticated user and the credential derived from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: User,
    pub credential: Credential,
}

impl Session {
    pub fn new(user: User) -> Self {
        let credential = Credential::for_user(&user);
        Self { user, credential }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlogForm {
    pub title: String,
    pub author: String,
    pub url: String,
}

/// One rendered list entry.
#[derive(Clone, Debug, PartialEq)]
pub struct BlogRow {
    pub blog: Blog,
    /// Whether the current user may delete it.
    pub deletable: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    session: Option<Session>,
    pub blogs: BlogList,
    pub notifier: Notifier,
    pub login_form: LoginForm,
    pub blog_form: BlogForm,
    /// Whether the create form is expanded.
    pub form_visible: bool,
    deleting: HashSet<String>,
}

impl AppState {
    pub fn new(notification_duration: Duration) -> Self {
        Self {
            session: None,
            blogs: BlogList::default(),
            notifier: Notifier::new(notification_duration),
            login_form: LoginForm::default(),
            blog_form: BlogForm::default(),
            form_visible: false,
            deleting: HashSet::new(),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifier.current()
    }

    pub fn expire(&mut self, ticket: Ticket) -> bool {
        self.notifier.expire(ticket)
    }

    /// Whether a request sent with `issued` belongs to the current session.
    pub fn is_current(&self, issued: &Credential) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| &s.credential == issued)
    }

    // Login flow

    /// Resume a persisted session, if any.
    pub fn restore<S: KeyValueStore>(&mut self, sessions: &SessionStore<S>) -> Option<Effect> {
        let user = sessions.load()?;
        tracing::info!("Restored session for {}", user.username);
        self.session = Some(Session::new(user));
        Some(Effect::FetchBlogs)
    }

    pub fn login_request(&self) -> LoginRequest {
        LoginRequest::new(
            self.login_form.username.clone(),
            self.login_form.password.clone(),
        )
    }

    pub fn on_login<S: KeyValueStore>(
        &mut self,
        result: Result<User, ApiError>,
        sessions: &SessionStore<S>,
    ) -> Effect {
        match result {
            Ok(user) => {
                tracing::info!("Logged in as {}", user.username);
                if let Err(e) = sessions.save(&user) {
                    tracing::error!("Failed to persist session: {}", e);
                }
                self.session = Some(Session::new(user));
                self.login_form = LoginForm::default();
                Effect::FetchBlogs
            }
            Err(e) => {
                tracing::error!("Login error: {}", e);
                let message = if e.is_retryable() {
                    format!("Login failed: {}", e.reason())
                } else {
                    WRONG_CREDENTIALS.to_string()
                };
                Effect::ScheduleClear(self.notifier.error(message))
            }
        }
    }

    pub fn logout<S: KeyValueStore>(&mut self, sessions: &SessionStore<S>) {
        sessions.clear();
        if let Some(session) = self.session.take() {
            tracing::info!("Logged out {}", session.user.username);
        }
        self.blogs.clear();
        self.blog_form = BlogForm::default();
        self.form_visible = false;
        self.deleting.clear();
    }

    // Blog list

    pub fn on_blogs_loaded(&mut self, result: Result<Vec<Blog>, ApiError>) -> Option<Effect> {
        if self.session.is_none() {
            return None;
        }
        match result {
            Ok(blogs) => {
                tracing::debug!("Fetched {} blogs", blogs.len());
                self.blogs = BlogList::new(blogs);
                None
            }
            Err(e) => Some(self.fail("Error loading blogs", &e)),
        }
    }

    /// Rows in render order, with the delete control resolved for the current user.
    pub fn visible_blogs(&self) -> Vec<BlogRow> {
        let user_id = self.user().map(|u| u.id.as_str());
        self.blogs
            .sorted()
            .into_iter()
            .map(|blog| BlogRow {
                deletable: user_id.is_some_and(|id| blog.is_owned_by(id)),
                blog: blog.clone(),
            })
            .collect()
    }

    // Create

    pub fn toggle_form(&mut self) {
        self.form_visible = !self.form_visible;
    }

    /// Take the form contents as a creation request and reset the fields.
    pub fn create_request(&mut self) -> Option<(Credential, NewBlog)> {
        let session = self.session.as_ref()?;
        let form = std::mem::take(&mut self.blog_form);
        let blog = NewBlog {
            title: form.title,
            author: form.author,
            url: form.url,
            user: session.user.id.clone(),
        };
        Some((session.credential.clone(), blog))
    }

    pub fn on_blog_created(
        &mut self,
        issued: &Credential,
        result: Result<Blog, ApiError>,
    ) -> Option<Effect> {
        if !self.is_current(issued) {
            tracing::debug!("Dropping create answer from an ended session");
            return None;
        }
        match result {
            Ok(mut blog) => {
                let me = self.user().map(User::to_ref);
                blog.user = blog.user.map(|owner| owner.hydrate(me.as_ref()));
                self.blogs.append(blog);
                Some(Effect::ScheduleClear(
                    self.notifier.success("Blog added successfully"),
                ))
            }
            Err(e) => Some(self.fail("Error adding blog", &e)),
        }
    }

    // Like

    /// The update to send: the stored record with one more like.
    pub fn like_request(&self, id: &str) -> Option<(Credential, Blog)> {
        let session = self.session.as_ref()?;
        let blog = self.blogs.get(id)?;
        let liked = Blog {
            likes: blog.likes + 1,
            ..blog.with_owner_id()
        };
        Some((session.credential.clone(), liked))
    }

    pub fn on_blog_liked(
        &mut self,
        issued: &Credential,
        result: Result<Blog, ApiError>,
    ) -> Option<Effect> {
        if !self.is_current(issued) {
            tracing::debug!("Dropping like answer from an ended session");
            return None;
        }
        match result {
            Ok(mut returned) => {
                let known = self.known_owner(&returned.id);
                returned.user = returned.user.map(|owner| owner.hydrate(known.as_ref()));
                self.blogs.replace(returned);
                Some(Effect::ScheduleClear(
                    self.notifier.success("Blog liked successfully"),
                ))
            }
            Err(e) => Some(self.fail("Error liking blog", &e)),
        }
    }

    fn known_owner(&self, blog_id: &str) -> Option<UserRef> {
        match self.blogs.get(blog_id).and_then(|b| b.user.as_ref()) {
            Some(BlogOwner::User(owner)) => Some(owner.clone()),
            _ => self.user().map(User::to_ref),
        }
    }

    // Delete

    /// The blog if the current user may delete it and no delete is in flight.
    pub fn deletable(&self, id: &str) -> Option<&Blog> {
        let user = self.user()?;
        if self.deleting.contains(id) {
            return None;
        }
        self.blogs.get(id).filter(|b| b.is_owned_by(&user.id))
    }

    /// Question shown before a delete is sent.
    pub fn delete_prompt(blog: &Blog) -> String {
        format!("Remove blog {} by {}?", blog.title, blog.author)
    }

    /// Mark a confirmed delete as in flight and return what to send.
    pub fn delete_request(&mut self, id: &str) -> Option<(Credential, Blog)> {
        let blog = self.deletable(id)?.clone();
        let credential = self.session.as_ref()?.credential.clone();
        self.deleting.insert(blog.id.clone());
        Some((credential, blog))
    }

    pub fn on_blog_deleted(
        &mut self,
        issued: &Credential,
        blog: &Blog,
        result: Result<(), ApiError>,
    ) -> Option<Effect> {
        if !self.is_current(issued) {
            tracing::debug!("Dropping delete answer from an ended session");
            return None;
        }
        self.deleting.remove(&blog.id);
        match result {
            Ok(()) => {
                self.blogs.remove(&blog.id);
                Some(Effect::ScheduleClear(
                    self.notifier
                        .success(format!("Blog \"{}\" deleted successfully", blog.title)),
                ))
            }
            Err(e) => Some(self.fail("Error deleting blog", &e)),
        }
    }

    fn fail(&mut self, action: &str, error: &ApiError) -> Effect {
        tracing::error!("{}: {}", action, error);
        Effect::ScheduleClear(
            self.notifier
                .error(format!("{action}: {}", error.reason())),
        )
    }
}
