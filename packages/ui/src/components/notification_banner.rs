use dioxus::prelude::*;

use crate::context::use_app;

/// The single notification slot. Renders nothing when empty.
#[component]
pub fn NotificationBanner() -> Element {
    let ctx = use_app();
    let notification = ctx.state.read().notification().cloned();

    match notification {
        Some(n) => rsx! {
            div {
                class: "notification {n.kind.class()}",
                role: "status",
                "{n.message}"
            }
        },
        None => rsx! {},
    }
}
