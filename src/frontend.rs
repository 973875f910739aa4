mod contact;
mod cursor;
mod diagnostics;
mod dom;
mod labels;
mod loading;
mod navigation;
mod overlay;
mod parallax;
mod progress;
mod reveal;
mod tilt;
mod typing;

use crate::effects::{config::PageConfig, log::LogLevel, motion::DEFERRED_INIT_DELAY_MS};
use serde_json::json;

pub fn run() {
    diagnostics::log_uncaught_errors();
    diagnostics::load_smooth_scroll_polyfill();
    diagnostics::watch_scroll_settle();

    dom::when_dom_ready(|| attach_effects(dom::page_config()));
}

fn attach_effects(config: PageConfig) {
    diagnostics::set_log_level(config.log_level);
    diagnostics::print_banner(&config.contact_recipient);

    loading::init();
    progress::init();
    navigation::init(&config);
    reveal::init();
    contact::init(&config);
    overlay::mount(&config);
    parallax::init();

    diagnostics::log_event(
        LogLevel::Info,
        "effects_attached",
        json!({
            "navOffsetPx": config.nav_offset_px,
            "scrollTopThresholdPx": config.scroll_top_threshold_px,
            "notificationDisplayMs": config.notification_display_ms,
        }),
    );

    dom::schedule(DEFERRED_INIT_DELAY_MS, move || {
        typing::init();
        tilt::init();
        cursor::init(&config);
        labels::init();
    });
}

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
