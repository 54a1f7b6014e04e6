use dioxus::prelude::*;

use crate::components::icons::CloseIcon;
use crate::toast;
use crate::toast::TOASTS;

/// Renders published toasts in the bottom-right corner, newest last.
#[component]
pub fn Toaster() -> Element {
    let entries = TOASTS.read().entries.clone();

    rsx! {
        div {
            class: "toaster",
            "aria-live": "polite",
            for queued in entries {
                div {
                    key: "{queued.id}",
                    class: "toast toast-{queued.toast.severity}",
                    role: "status",
                    span { "{queued.toast.message}" }
                    button {
                        class: "close-button",
                        "aria-label": "Dismiss",
                        onclick: move |_| toast::dismiss(queued.id),
                        CloseIcon {}
                    }
                }
            }
        }
    }
}
