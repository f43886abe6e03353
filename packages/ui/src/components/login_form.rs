use dioxus::prelude::*;

use crate::context::use_app;

/// Username/password form shown while anonymous.
#[component]
pub fn LoginForm() -> Element {
    let ctx = use_app();
    let mut state = ctx.state;
    let form = state.read().login_form.clone();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        ctx.login();
    };

    rsx! {
        h2 { "Log in to application" }
        form {
            onsubmit: handle_submit,
            div {
                "username: "
                input {
                    r#type: "text",
                    name: "Username",
                    value: "{form.username}",
                    oninput: move |evt: FormEvent| state.write().login_form.username = evt.value(),
                }
            }
            div {
                "password: "
                input {
                    r#type: "password",
                    name: "Password",
                    value: "{form.password}",
                    oninput: move |evt: FormEvent| state.write().login_form.password = evt.value(),
                }
            }
            button { r#type: "submit", "login" }
        }
    }
}
