use super::{diagnostics, dom};
use crate::effects::{
    markup::LOADING_ID,
    motion::{LOADING_FADE_DELAY_MS, LOADING_HIDE_DELAY_MS},
};
use web_sys::{window, HtmlElement};

pub fn init() {
    let Some(loading) = dom::element_by_id(LOADING_ID) else {
        diagnostics::missing_hook(LOADING_ID);
        return;
    };

    let already_loaded = dom::document()
        .map(|document| document.ready_state() == "complete")
        .unwrap_or(false);
    if already_loaded {
        dismiss(loading);
        return;
    }

    let Some(win) = window() else {
        return;
    };
    let mut pending = Some(loading);
    dom::attach(&win, "load", move |_| {
        if let Some(loading) = pending.take() {
            dismiss(loading);
        }
    });
}

fn dismiss(loading: HtmlElement) {
    dom::schedule(LOADING_FADE_DELAY_MS, move || {
        dom::set_style(&loading, "opacity", "0");
        dom::schedule(LOADING_HIDE_DELAY_MS, move || {
            dom::set_style(&loading, "display", "none");
        });
    });
}
