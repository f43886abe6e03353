use dioxus::prelude::*;

use crate::context::use_app;
use crate::state::BlogRow;

/// One blog entry with a `view`/`hide` details toggle.
///
/// The details hold the url, the like counter and, for the owner only, the
/// delete button.
#[component]
pub fn BlogItem(row: BlogRow) -> Element {
    let ctx = use_app();
    let mut expanded = use_signal(|| false);
    let blog = row.blog;
    let owner = blog.owner_name().unwrap_or_default().to_string();

    let like = {
        let ctx = ctx.clone();
        let id = blog.id.clone();
        move |_| ctx.like(&id)
    };
    let delete = {
        let id = blog.id.clone();
        move |_| ctx.delete(&id)
    };

    rsx! {
        div {
            class: "blog",
            "data-id": "{blog.id}",
            span { class: "blog-title", "{blog.title} by {blog.author}" }
            button {
                onclick: move |_| expanded.toggle(),
                if expanded() { "hide" } else { "view" }
            }
            if expanded() {
                div { class: "blog-url", "{blog.url}" }
                div {
                    class: "blog-likes",
                    "likes {blog.likes} "
                    button { onclick: like, "like" }
                }
                div { class: "blog-user", "{owner}" }
                if row.deletable {
                    button {
                        class: "delete-button",
                        onclick: delete,
                        "delete"
                    }
                }
            }
        }
    }
}
