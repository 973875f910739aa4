use super::{diagnostics, dom, overlay};
use crate::effects::{
    config::PageConfig,
    contact::{ContactMessage, EMAIL_LINK_MESSAGE, SUBMITTED_MESSAGE},
    log::LogLevel,
    markup::{CONTACT_FORM_ID, EMAIL_LINK_ID},
    notification::NotificationKind,
};
use serde_json::json;
use url::Url;
use wasm_bindgen::JsCast;
use web_sys::{window, FormData, HtmlFormElement};

pub fn init(config: &PageConfig) {
    let form = dom::document()
        .and_then(|document| document.get_element_by_id(CONTACT_FORM_ID))
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok());

    match form {
        Some(form) => {
            let recipient = config.contact_recipient.clone();
            let submitted = form.clone();
            dom::attach(&form, "submit", move |event| {
                event.prevent_default();
                submit(&submitted, &recipient, open_mail_client);
            });
        }
        None => diagnostics::missing_hook(CONTACT_FORM_ID),
    }

    if let Some(link) = dom::element_by_id(EMAIL_LINK_ID) {
        dom::attach(&link, "click", |_| {
            overlay::show_notification(EMAIL_LINK_MESSAGE, NotificationKind::Info);
        });
    }
}

fn open_mail_client(link: &Url) {
    if let Some(win) = window() {
        let _ = win.location().set_href(link.as_str());
    }
}

fn submit(form: &HtmlFormElement, recipient: &str, open: impl FnOnce(&Url)) {
    let message = read_message(form);

    match message.mailto_link(recipient) {
        Ok(link) => {
            open(&link);
            diagnostics::log_event(
                LogLevel::Info,
                "contact_mail_client_opened",
                json!({
                    "subjectProvided": !message.subject.is_empty(),
                    "messageChars": message.message.chars().count(),
                }),
            );
        }
        Err(error) => diagnostics::log_event(
            LogLevel::Warn,
            "contact_mailto_invalid",
            json!({ "error": error.to_string() }),
        ),
    }

    overlay::show_notification(SUBMITTED_MESSAGE, NotificationKind::Success);
    form.reset();
}

fn read_message(form: &HtmlFormElement) -> ContactMessage {
    let data = FormData::new_with_form(form).ok();
    ContactMessage::from_fields(|name| data.as_ref()?.get(name).as_string())
}
