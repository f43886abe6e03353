//! The single page: login form while anonymous, blog list once logged in.

use dioxus::prelude::*;
use ui::{use_app, BlogForm, BlogItem, LoginForm, NotificationBanner};

#[component]
pub fn Blogs() -> Element {
    let ctx = use_app();
    let (user, rows) = {
        let state = ctx.state.read();
        (state.user().cloned(), state.visible_blogs())
    };

    let Some(user) = user else {
        return rsx! {
            div {
                NotificationBanner {}
                LoginForm {}
            }
        };
    };

    rsx! {
        div {
            NotificationBanner {}
            h2 { "blogs" }
            p { "{user.name} logged-in" }
            button {
                onclick: move |_| ctx.logout(),
                "Log out"
            }
            BlogForm {}
            for row in rows {
                BlogItem {
                    key: "{row.blog.id}",
                    row: row.clone(),
                }
            }
        }
    }
}
