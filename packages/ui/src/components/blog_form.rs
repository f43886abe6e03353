use dioxus::prelude::*;

use crate::context::use_app;

/// Collapsible form for creating a blog.
///
/// Stays open after a submit so several blogs can be added in a row.
#[component]
pub fn BlogForm() -> Element {
    let ctx = use_app();
    let mut state = ctx.state;
    let (visible, form) = {
        let s = state.read();
        (s.form_visible, s.blog_form.clone())
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        ctx.add_blog();
    };

    rsx! {
        div {
            h2 { "add new blog" }
            if !visible {
                button {
                    onclick: move |_| state.write().toggle_form(),
                    "add blog"
                }
            } else {
                form {
                    onsubmit: handle_submit,
                    div {
                        "title: "
                        input {
                            r#type: "text",
                            name: "Title",
                            value: "{form.title}",
                            oninput: move |evt: FormEvent| state.write().blog_form.title = evt.value(),
                        }
                    }
                    div {
                        "author: "
                        input {
                            r#type: "text",
                            name: "Author",
                            value: "{form.author}",
                            oninput: move |evt: FormEvent| state.write().blog_form.author = evt.value(),
                        }
                    }
                    div {
                        "url: "
                        input {
                            r#type: "text",
                            name: "Url",
                            value: "{form.url}",
                            oninput: move |evt: FormEvent| state.write().blog_form.url = evt.value(),
                        }
                    }
                    button { r#type: "submit", "submit" }
                }
                button {
                    onclick: move |_| state.write().toggle_form(),
                    "cancel"
                }
            }
        }
    }
}
