//! Small DOM utilities shared by the pages.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Displays a temporary notification at the bottom of the screen and
/// removes it after a few seconds. Non-blocking; used for transient
/// notices like the required-field guard.
pub fn show_toast(message: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
            toast.set_text_content(Some(message));
            let html_toast: HtmlElement = toast.unchecked_into();
            let style = html_toast.style();
            style.set_property("position", "fixed").ok();
            style.set_property("bottom", "20px").ok();
            style.set_property("left", "50%").ok();
            style.set_property("transform", "translateX(-50%)").ok();
            style.set_property("background", "#1a1a1a").ok();
            style.set_property("color", "#f5f0e6").ok();
            style.set_property("border", "3px solid #000").ok();
            style.set_property("padding", "10px 20px").ok();
            style.set_property("z-index", "10000").ok();
            style.set_property("font-weight", "bold").ok();

            if body.append_child(&html_toast).is_ok() {
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(3000).await;
                    if let Some(parent) = html_toast.parent_node() {
                        parent.remove_child(&html_toast).ok();
                    }
                });
            }
        }
    }
}

/// Blocking notification for failures that must not be missed, such as a
/// rejected feedback write.
pub fn blocking_notice(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
