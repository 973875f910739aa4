use super::{diagnostics, dom};
use crate::effects::{
    log::LogLevel, markup::FLOATING_ELEMENT_SELECTOR, scroll::parallax_transform,
};
use serde_json::json;
use web_sys::window;

pub fn init() {
    if dom::prefers_reduced_motion() {
        diagnostics::log_event(
            LogLevel::Debug,
            "parallax_skipped",
            json!({ "reason": "prefers-reduced-motion" }),
        );
        return;
    }

    let elements = dom::query_all(FLOATING_ELEMENT_SELECTOR);
    if elements.is_empty() {
        diagnostics::missing_hook(FLOATING_ELEMENT_SELECTOR);
        return;
    }
    let Some(win) = window() else {
        return;
    };

    dom::attach(&win, "scroll", move |_| {
        let scroll_y = dom::scroll_y();
        for (index, element) in elements.iter().enumerate() {
            dom::set_style(element, "transform", &parallax_transform(scroll_y, index));
        }
    });
}
