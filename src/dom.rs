use log::warn;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};

fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

pub fn scroll_offset() -> Option<f64> {
    window()?.page_y_offset().ok()
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Stops the page behind a modal from scrolling.
pub fn set_scroll_locked(locked: bool) {
    let Some(body) = body() else { return };
    let value = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", value) {
        warn!("Failed to set body overflow: {:?}", e);
    }
}

pub fn mark_body_loaded() {
    if let Some(body) = body() {
        if let Err(e) = body.class_list().add_1("loaded") {
            warn!("Failed to mark body as loaded: {:?}", e);
        }
    }
}

pub fn alert(message: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.alert_with_message(message) {
            warn!("Failed to show alert: {:?}", e);
        }
    }
}
