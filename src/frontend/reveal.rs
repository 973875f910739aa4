use super::dom;
use crate::effects::{
    markup::{ACTIVE_CLASS, REVEAL_SELECTOR, SKILL_CARD_SELECTOR, SKILL_TAG_SELECTOR},
    motion::{skill_tag_delay_ms, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD},
};
use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub fn init() {
    let targets = dom::query_all(REVEAL_SELECTOR);
    if !targets.is_empty() {
        if let Some(observer) = reveal_observer() {
            for target in &targets {
                observer.observe(target);
            }
        }
    }

    let cards = dom::query_all(SKILL_CARD_SELECTOR);
    if !cards.is_empty() {
        if let Some(observer) = skill_card_observer() {
            for card in &cards {
                observer.observe(card);
            }
        }
    }
}

/// One-shot: a revealed element is unobserved and never hidden again.
fn reveal_observer() -> Option<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in intersecting(&entries) {
                let target = entry.target();
                let _ = target.class_list().add_1(ACTIVE_CLASS);
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    callback.forget();
    Some(observer)
}

fn skill_card_observer() -> Option<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(Array)>::new(|entries: Array| {
        for entry in intersecting(&entries) {
            stagger_skill_tags(&entry.target());
        }
    });

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;
    callback.forget();
    Some(observer)
}

fn intersecting(entries: &Array) -> Vec<IntersectionObserverEntry> {
    entries
        .iter()
        .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
        .filter(IntersectionObserverEntry::is_intersecting)
        .collect()
}

fn stagger_skill_tags(card: &Element) {
    for (index, tag) in dom::query_all_within(card, SKILL_TAG_SELECTOR)
        .into_iter()
        .enumerate()
    {
        dom::schedule(skill_tag_delay_ms(index), move || {
            dom::set_style(&tag, "transform", "scale(1)");
            dom::set_style(&tag, "opacity", "1");
        });
    }
}
