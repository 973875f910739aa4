use super::dom;
use crate::effects::{
    log::{event_payload, LogLevel, DEFAULT_LOG_LEVEL},
    scroll::SCROLL_SETTLE_DEBOUNCE_MS,
};
use serde_json::json;
use std::cell::Cell;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, window, ErrorEvent, HtmlScriptElement};

const SMOOTH_SCROLL_POLYFILL_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/smoothscroll/1.4.10/SmoothScroll.min.js";
const PORTFOLIO_OWNER: &str = "Sayed Ibrahim";
const BANNER_TITLE_STYLE: &str = "color: #6366f1; font-size: 16px; font-weight: bold;";
const BANNER_BODY_STYLE: &str = "color: #8b5cf6; font-size: 14px;";

thread_local! {
    static LOG_THRESHOLD: Cell<LogLevel> = const { Cell::new(DEFAULT_LOG_LEVEL) };
}

pub fn set_log_level(level: LogLevel) {
    LOG_THRESHOLD.with(|threshold| threshold.set(level));
}

pub fn log_event(level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < LOG_THRESHOLD.with(Cell::get) {
        return;
    }

    let ts = (js_sys::Date::now() / 1_000.0) as u64;
    let line = JsValue::from_str(&event_payload(ts, level, event, fields).to_string());
    match level {
        LogLevel::Debug => console::debug_1(&line),
        LogLevel::Info => console::info_1(&line),
        LogLevel::Warn => console::warn_1(&line),
    }
}

pub fn missing_hook(selector: &str) {
    log_event(LogLevel::Debug, "hook_missing", json!({ "selector": selector }));
}

pub fn print_banner(contact_recipient: &str) {
    let banner = format!(
        "\n%c👋 Welcome to {PORTFOLIO_OWNER}'s Portfolio!\n%cThanks for exploring the code. \n\
Feel free to reach out if you have any questions!\nEmail: {contact_recipient}\n"
    );
    console::log_3(
        &JsValue::from_str(&banner),
        &JsValue::from_str(BANNER_TITLE_STYLE),
        &JsValue::from_str(BANNER_BODY_STYLE),
    );
}

pub fn log_uncaught_errors() {
    let Some(win) = window() else {
        return;
    };

    dom::attach(&win, "error", |event| {
        let error = event
            .dyn_ref::<ErrorEvent>()
            .map(ErrorEvent::error)
            .unwrap_or(JsValue::UNDEFINED);
        console::warn_2(&JsValue::from_str("Portfolio JS Error:"), &error);
    });
}

pub fn load_smooth_scroll_polyfill() {
    if web_sys::css::supports_with_property_and_value("scroll-behavior", "smooth").unwrap_or(false) {
        return;
    }

    let Some(document) = dom::document() else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };
    let Some(script) = document
        .create_element("script")
        .ok()
        .and_then(|element| element.dyn_into::<HtmlScriptElement>().ok())
    else {
        return;
    };

    script.set_src(SMOOTH_SCROLL_POLYFILL_URL);
    if head.append_child(&script).is_ok() {
        log_event(
            LogLevel::Info,
            "smooth_scroll_polyfill_requested",
            json!({ "src": SMOOTH_SCROLL_POLYFILL_URL }),
        );
    }
}

/// Logs the resting scroll position once scroll events stop arriving.
pub fn watch_scroll_settle() {
    let Some(win) = window() else {
        return;
    };

    let settle = dom::Debounced::new(SCROLL_SETTLE_DEBOUNCE_MS, || {
        log_event(
            LogLevel::Debug,
            "scroll_settled",
            json!({ "scrollY": dom::scroll_y() }),
        );
    });
    dom::attach(&win, "scroll", move |_| settle.trigger());
}
