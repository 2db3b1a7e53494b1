//! Browser side of `Notifier`: toasts injected into the page and the delayed
//! reload that follows an expired session.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use common::list::{Notice, NoticeKind, Notifier};

#[derive(Clone, Debug, PartialEq)]
pub struct BrowserNotifier {
    toast_duration_ms: u32,
}

impl BrowserNotifier {
    pub fn new(toast_duration_ms: u32) -> Self {
        Self { toast_duration_ms }
    }
}

impl Notifier for BrowserNotifier {
    fn notify(&self, notice: &Notice) {
        show_toast(&notice.message, notice.kind, self.toast_duration_ms);
    }

    fn schedule_reload(&self, delay_ms: u32) {
        Timeout::new(delay_ms, || {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.location().reload() {
                    gloo_console::error!("page reload failed", err);
                }
            }
        })
        .forget();
    }
}

fn background(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "rgba(22, 101, 52, 0.92)",
        NoticeKind::Error => "rgba(153, 27, 27, 0.92)",
        NoticeKind::SessionExpired => "rgba(146, 64, 14, 0.92)",
    }
}

/// Shows `message` at the bottom of the screen for `duration_ms`. The text is
/// set as text content, never parsed as markup.
pub fn show_toast(message: &str, kind: NoticeKind, duration_ms: u32) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let toast: HtmlElement = toast.unchecked_into();
    let style = toast.style();
    for (property, value) in [
        ("position", "fixed"),
        ("bottom", "20px"),
        ("left", "50%"),
        ("transform", "translateX(-50%)"),
        ("background", background(kind)),
        ("color", "#fff"),
        ("padding", "10px 20px"),
        ("border-radius", "6px"),
        ("z-index", "10000"),
        ("font-family", "Inter, Arial, sans-serif"),
    ] {
        style.set_property(property, value).ok();
    }

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration_ms).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}
