use super::dom;
use crate::effects::{
    config::PageConfig,
    motion::{cursor_trail_hidden, cursor_trail_position, CURSOR_TRAIL_CLASS, CURSOR_TRAIL_STYLE},
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

pub fn init(config: &PageConfig) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Some(trail) = document
        .create_element("div")
        .ok()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    trail.set_class_name(CURSOR_TRAIL_CLASS);
    trail.style().set_css_text(CURSOR_TRAIL_STYLE);
    if body.append_child(&trail).is_err() {
        return;
    }

    let follower = trail.clone();
    dom::attach(&document, "mousemove", move |event| {
        let Some(pointer) = event.dyn_ref::<MouseEvent>() else {
            return;
        };

        let (left, top) =
            cursor_trail_position(f64::from(pointer.client_x()), f64::from(pointer.client_y()));
        dom::set_style(&follower, "left", &left);
        dom::set_style(&follower, "top", &top);
    });

    if cursor_trail_hidden(dom::viewport_width(), config.mobile_breakpoint_px) {
        dom::set_style(&trail, "display", "none");
    }
}
