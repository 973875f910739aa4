use super::dom;
use crate::effects::{
    markup::TYPING_SELECTOR,
    typing::{Typewriter, CARET_BORDER, CARET_LINGER_MS, TYPING_INTERVAL_MS},
};
use std::{cell::Cell, rc::Rc};
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;

pub fn init() {
    for element in dom::query_all(TYPING_SELECTOR) {
        start(element);
    }
}

fn start(element: HtmlElement) {
    let mut typewriter = Typewriter::new(&element.text_content().unwrap_or_default());
    element.set_text_content(Some(""));
    dom::set_style(&element, "border-right", CARET_BORDER);

    let interval: Rc<Cell<Option<i32>>> = Rc::default();
    let tick = {
        let interval = interval.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(visible) = typewriter.advance() {
                element.set_text_content(Some(visible.as_str()));
                return;
            }

            if let Some(handle) = interval.take() {
                dom::clear_interval(handle);
                let element = element.clone();
                dom::schedule(CARET_LINGER_MS, move || {
                    dom::set_style(&element, "border-right", "none");
                });
            }
        })
    };

    interval.set(dom::set_interval(&tick, TYPING_INTERVAL_MS));
    tick.forget();
}
