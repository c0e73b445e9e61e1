//! Lightweight toast notifications.
//!
//! Feedback for save/upload/ingestion outcomes is shown as a transient,
//! non-blocking toast injected straight into the document body. Failures
//! never block the UI; the user can always retry the action that produced
//! them. All user-facing messages remain in Spanish by design.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// How long a toast stays on screen before removing itself.
const TOAST_MILLIS: u32 = 3000;

/// Displays a temporary notification message at the bottom of the screen.
///
/// Creates a `div.app-toast`, fills it with `message` as plain text (never
/// HTML, so server-provided error strings cannot inject markup) and removes
/// it again after [`TOAST_MILLIS`]. Styling lives in the `app-toast` class
/// of the host page stylesheet.
pub fn show_toast(message: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
            toast.set_class_name("app-toast");
            toast.set_text_content(Some(message));
            let html_toast: HtmlElement = toast.unchecked_into();

            if body.append_child(&html_toast).is_ok() {
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
                    if let Some(parent) = html_toast.parent_node() {
                        parent.remove_child(&html_toast).ok();
                    }
                });
            }
        }
    }
}
