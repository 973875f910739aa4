use super::{diagnostics, dom};
use crate::effects::{markup::SCROLL_PROGRESS_ID, scroll::scroll_progress_width};
use web_sys::{window, HtmlElement};

pub fn init() {
    let Some(bar) = dom::element_by_id(SCROLL_PROGRESS_ID) else {
        diagnostics::missing_hook(SCROLL_PROGRESS_ID);
        return;
    };
    let Some(win) = window() else {
        return;
    };

    dom::attach(&win, "scroll", move |_| update(&bar));
}

fn update(bar: &HtmlElement) {
    let Some(root) = dom::document().and_then(|document| document.document_element()) else {
        return;
    };

    let width = scroll_progress_width(
        dom::scroll_y(),
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    );
    dom::set_style(bar, "width", &width);
}
