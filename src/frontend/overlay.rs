use super::{diagnostics, dom};
use crate::effects::{
    config::PageConfig,
    log::LogLevel,
    notification::{NotificationKind, Toast, ToastQueue, ToastSchedule},
    scroll::{scroll_top_button_style, scroll_top_visible},
};
use serde_json::json;
use std::{
    cell::RefCell,
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};
use web_sys::{window, MouseEvent};
use yew::prelude::*;

const OVERLAY_ROOT_ID: &str = "effects-overlay";

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static TOAST_SINK: RefCell<Option<ToastSink>> = const { RefCell::new(None) };
}

#[derive(Clone)]
struct ToastSink {
    dispatcher: UseReducerDispatcher<ToastState>,
    schedule: ToastSchedule,
}

#[derive(Default, PartialEq)]
struct ToastState {
    queue: ToastQueue,
}

enum ToastAction {
    Push(Toast),
    Reveal(u64),
    Dismiss(u64),
    Remove(u64),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = self.queue.clone();
        match action {
            ToastAction::Push(toast) => queue.push(toast),
            ToastAction::Reveal(id) => queue.reveal(id),
            ToastAction::Dismiss(id) => queue.dismiss(id),
            ToastAction::Remove(id) => queue.remove(id),
        }
        Rc::new(Self { queue })
    }
}

/// Shows a toast that slides in, stays for the configured display time, then
/// slides out and is removed. Dropped with a warning before the overlay mounts.
pub fn show_notification(message: &str, kind: NotificationKind) {
    let Some(sink) = TOAST_SINK.with(|sink| sink.borrow().clone()) else {
        diagnostics::log_event(
            LogLevel::Warn,
            "notification_dropped",
            json!({ "kind": kind.as_str() }),
        );
        return;
    };

    let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
    sink.dispatcher
        .dispatch(ToastAction::Push(Toast::new(id, message, kind)));

    let steps = [
        (sink.schedule.reveal_at_ms, ToastAction::Reveal(id)),
        (sink.schedule.dismiss_at_ms, ToastAction::Dismiss(id)),
        (sink.schedule.remove_at_ms, ToastAction::Remove(id)),
    ];
    for (delay_ms, action) in steps {
        let dispatcher = sink.dispatcher.clone();
        dom::schedule(i32::try_from(delay_ms).unwrap_or(i32::MAX), move || {
            dispatcher.dispatch(action);
        });
    }

    diagnostics::log_event(
        LogLevel::Debug,
        "notification_shown",
        json!({ "id": id, "kind": kind.as_str() }),
    );
}

#[derive(Properties, PartialEq)]
struct NotificationProps {
    toast: Toast,
}

#[function_component(Notification)]
fn notification(props: &NotificationProps) -> Html {
    let toast = &props.toast;

    html! {
        <div class={classes!("notification", toast.kind.class_name())} style={toast.style()}>
            <div class="notification-content">
                <i class={classes!("fas", toast.kind.icon())}></i>
                <span>{toast.message.clone()}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ScrollTopButtonProps {
    threshold_px: f64,
}

#[function_component(ScrollTopButton)]
fn scroll_top_button(props: &ScrollTopButtonProps) -> Html {
    let threshold_px = props.threshold_px;
    let visible = use_state_eq(|| scroll_top_visible(dom::scroll_y(), threshold_px));
    let hovered = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with(threshold_px, move |threshold_px| {
            let threshold_px = *threshold_px;
            let listener = window().and_then(|win| {
                dom::Listener::new(&win, "scroll", move |_| {
                    visible.set(scroll_top_visible(dom::scroll_y(), threshold_px));
                })
            });
            move || drop(listener)
        });
    }

    let onclick = Callback::from(|_: MouseEvent| dom::scroll_to(0.0));

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };

    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <button
            class="scroll-top-btn"
            type="button"
            aria-label="Scroll to top"
            style={scroll_top_button_style(*visible, *hovered)}
            onclick={onclick}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <i class="fas fa-arrow-up" aria-hidden="true"></i>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct OverlayProps {
    config: PageConfig,
}

#[function_component(Overlay)]
fn overlay(props: &OverlayProps) -> Html {
    let toasts = use_reducer(ToastState::default);

    {
        let dispatcher = toasts.dispatcher();
        let schedule = ToastSchedule::for_display(props.config.notification_display_ms);
        use_effect_with((), move |_| {
            TOAST_SINK.with(|sink| {
                *sink.borrow_mut() = Some(ToastSink {
                    dispatcher,
                    schedule,
                });
            });
            || TOAST_SINK.with(|sink| *sink.borrow_mut() = None)
        });
    }

    html! {
        <>
            <ScrollTopButton threshold_px={props.config.scroll_top_threshold_px} />
            {
                for toasts.queue.toasts().iter().map(|toast| html! {
                    <Notification key={toast.id.to_string()} toast={toast.clone()} />
                })
            }
        </>
    }
}

/// Appends the overlay host to `<body>` and renders the scroll-to-top button
/// and notification stack into it.
pub fn mount(config: &PageConfig) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(host) = document.create_element("div") else {
        return;
    };

    host.set_id(OVERLAY_ROOT_ID);
    if body.append_child(&host).is_err() {
        return;
    }

    yew::Renderer::<Overlay>::with_root_and_props(
        host,
        OverlayProps {
            config: config.clone(),
        },
    )
    .render();
}
