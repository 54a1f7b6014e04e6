// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{self, Window};

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// Writes `text` to the system clipboard. Returns `false` if the browser
    /// refused, e.g. for lack of permission.
    pub async fn clipboard_set(text: String) -> bool {
        match web_sys::window().map(|win: Window| win.navigator().clipboard()) {
            Some(clipboard) => {
                let promise = clipboard.write_text(&text);
                JsFuture::from(promise).await.is_ok()
            }
            _ => false,
        }
    }

    /// Opens `url` in a new browsing context.
    pub fn open_external(url: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.open_with_url_and_target(url, "_blank").ok().flatten())
            .is_some()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use dioxus::prelude::*;
    use dioxus_clipboard::prelude::*;
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> bool {
        let mut clipboard = use_clipboard();
        clipboard.set(text).is_ok()
    }

    /// Opens `url` in a new browsing context of the hosting webview.
    pub fn open_external(url: &str) -> bool {
        match serde_json::to_string(url) {
            Ok(quoted) => {
                let _ = document::eval(&format!("window.open({quoted}, '_blank');"));
                true
            }
            Err(_) => false,
        }
    }
}
