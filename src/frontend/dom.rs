use crate::effects::config::PageConfig;
use js_sys::Function;
use std::cell::Cell;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, Document, Element, Event, EventTarget, HtmlElement, NodeList, ScrollBehavior,
    ScrollToOptions,
};

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    document()
        .and_then(|document| document.query_selector_all(selector).ok())
        .map(html_elements)
        .unwrap_or_default()
}

pub fn query_all_within(root: &Element, selector: &str) -> Vec<HtmlElement> {
    root.query_selector_all(selector)
        .ok()
        .map(html_elements)
        .unwrap_or_default()
}

fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn page_config() -> PageConfig {
    let body = document().and_then(|document| document.body());
    PageConfig::from_lookup(|name| body.as_ref()?.get_attribute(name))
}

pub fn scroll_y() -> f64 {
    window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0)
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn scroll_to(top: f64) {
    let Some(win) = window() else {
        return;
    };

    let behavior = if prefers_reduced_motion() {
        ScrollBehavior::Instant
    } else {
        ScrollBehavior::Smooth
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(behavior);
    win.scroll_to_with_scroll_to_options(&options);
}

/// Runs `task` once after `delay_ms`. The closure is only freed when it runs,
/// so timers that may be cancelled go through [`Debounced`] instead.
pub fn schedule(delay_ms: i32, task: impl FnOnce() + 'static) {
    let Some(win) = window() else {
        return;
    };
    let callback = Closure::once_into_js(task);
    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref::<Function>(),
        delay_ms,
    );
}

pub fn clear_timeout(handle: i32) {
    if let Some(win) = window() {
        win.clear_timeout_with_handle(handle);
    }
}

/// A task that runs `delay_ms` after the most recent [`Debounced::trigger`].
/// Every trigger re-arms the same callback.
pub struct Debounced {
    callback: Closure<dyn FnMut()>,
    delay_ms: i32,
    pending: Cell<Option<i32>>,
}

impl Debounced {
    pub fn new(delay_ms: i32, task: impl FnMut() + 'static) -> Self {
        Self {
            callback: Closure::<dyn FnMut()>::new(task),
            delay_ms,
            pending: Cell::new(None),
        }
    }

    pub fn trigger(&self) {
        self.cancel();

        let handle = window().and_then(|win| {
            win.set_timeout_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                self.delay_ms,
            )
            .ok()
        });
        self.pending.set(handle);
    }

    fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            clear_timeout(handle);
        }
    }
}

impl Drop for Debounced {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub fn set_interval(callback: &Closure<dyn FnMut()>, interval_ms: i32) -> Option<i32> {
    window()?
        .set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            interval_ms,
        )
        .ok()
}

pub fn clear_interval(handle: i32) {
    if let Some(win) = window() {
        win.clear_interval_with_handle(handle);
    }
}

/// An event listener that is removed again when dropped.
pub struct Listener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        event_type: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }

    /// Keeps the listener registered for the rest of the page's life.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Binds `handler` for the page's lifetime.
pub fn attach(target: &EventTarget, event_type: &'static str, handler: impl FnMut(Event) + 'static) {
    if let Some(listener) = Listener::new(target, event_type, handler) {
        listener.forget();
    }
}

pub fn when_dom_ready(task: impl FnOnce() + 'static) {
    let Some(document) = document() else {
        return;
    };

    if document.ready_state() != "loading" {
        task();
        return;
    }

    let mut task = Some(task);
    attach(&document, "DOMContentLoaded", move |_| {
        if let Some(task) = task.take() {
            task();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::wasm_bindgen_test;

    async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            window()
                .expect("window available")
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .expect("arm timer");
        });
        JsFuture::from(promise).await.expect("timer resolves");
    }

    #[wasm_bindgen_test]
    async fn burst_of_triggers_runs_the_task_once() {
        let runs = Rc::new(Cell::new(0));
        let counted = runs.clone();
        let debounced = Debounced::new(10, move || counted.set(counted.get() + 1));

        for _ in 0..5 {
            debounced.trigger();
        }
        sleep(60).await;

        assert_eq!(runs.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn callback_is_reused_after_it_fires() {
        let runs = Rc::new(Cell::new(0));
        let counted = runs.clone();
        let debounced = Debounced::new(5, move || counted.set(counted.get() + 1));

        debounced.trigger();
        sleep(40).await;
        debounced.trigger();
        sleep(40).await;

        assert_eq!(runs.get(), 2);
    }

    #[wasm_bindgen_test]
    async fn dropping_cancels_the_pending_run() {
        let runs = Rc::new(Cell::new(0));
        let counted = runs.clone();
        let debounced = Debounced::new(10, move || counted.set(counted.get() + 1));

        debounced.trigger();
        drop(debounced);
        sleep(40).await;

        assert_eq!(runs.get(), 0);
    }
}
