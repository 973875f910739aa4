use super::{diagnostics, dom};
use crate::effects::{
    config::PageConfig,
    markup::{ACTIVE_CLASS, NAVBAR_ID, NAV_LINKS_SELECTOR, SECTION_SELECTOR},
    scroll::{active_section, anchor_scroll_top, in_page_selector, navbar_style, SectionBounds},
};
use wasm_bindgen::JsCast;
use web_sys::{window, Event, HtmlElement};

pub fn init(config: &PageConfig) {
    let Some(win) = window() else {
        return;
    };

    match dom::element_by_id(NAVBAR_ID) {
        Some(navbar) => dom::attach(&win, "scroll", move |_| {
            apply_navbar_style(&navbar, dom::scroll_y());
        }),
        None => diagnostics::missing_hook(NAVBAR_ID),
    }

    let links = dom::query_all(NAV_LINKS_SELECTOR);
    for link in &links {
        bind_link(link, config.nav_offset_px);
    }

    dom::attach(&win, "scroll", move |_| {
        highlight_active_link(&links, dom::scroll_y());
    });
}

fn bind_link(link: &HtmlElement, nav_offset_px: f64) {
    let clicked = link.clone();
    dom::attach(link, "click", move |event| {
        follow_in_page_link(&clicked, &event, nav_offset_px);
    });
}

fn apply_navbar_style(navbar: &HtmlElement, scroll_y: f64) {
    let style = navbar_style(scroll_y);
    dom::set_style(navbar, "background", style.background);
    dom::set_style(navbar, "backdrop-filter", style.backdrop_filter);
}

fn follow_in_page_link(link: &HtmlElement, event: &Event, nav_offset_px: f64) {
    let Some(href) = link.get_attribute("href") else {
        return;
    };
    let Some(selector) = in_page_selector(&href) else {
        return;
    };
    let Some(target) = dom::document()
        .and_then(|document| document.query_selector(selector).ok().flatten())
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    event.prevent_default();
    dom::scroll_to(anchor_scroll_top(f64::from(target.offset_top()), nav_offset_px));
}

fn highlight_active_link(links: &[HtmlElement], scroll_y: f64) {
    let sections: Vec<SectionBounds> = dom::query_all(SECTION_SELECTOR)
        .iter()
        .map(|section| SectionBounds {
            id: section.get_attribute("id"),
            top: f64::from(section.offset_top()),
            height: f64::from(section.offset_height()),
        })
        .collect();

    let Some(active) = active_section(&sections, scroll_y) else {
        return;
    };
    let active_href = active.link_href();

    for link in links {
        let class_list = link.class_list();
        let _ = class_list.remove_1(ACTIVE_CLASS);
        if active_href.is_some() && link.get_attribute("href") == active_href {
            let _ = class_list.add_1(ACTIVE_CLASS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::scroll::{NAVBAR_RESTING_BACKGROUND, NAVBAR_SOLID_BACKGROUND};
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::EventInit;

    fn mounted(tag: &str, id: Option<&str>) -> HtmlElement {
        let document = dom::document().expect("document available");
        let element: HtmlElement = document
            .create_element(tag)
            .expect("create element")
            .dyn_into()
            .expect("element is an HtmlElement");
        if let Some(id) = id {
            element.set_id(id);
        }
        document
            .body()
            .expect("body available")
            .append_child(&element)
            .expect("append element");
        element
    }

    fn link_to(href: &str) -> HtmlElement {
        let link = mounted("a", None);
        link.set_attribute("href", href).expect("set href");
        bind_link(&link, 80.0);
        link
    }

    fn cancelable_click() -> Event {
        let init = EventInit::new();
        init.set_cancelable(true);
        Event::new_with_event_init_dict("click", &init).expect("click event")
    }

    #[wasm_bindgen_test]
    fn link_to_existing_section_suppresses_default_navigation() {
        mounted("section", Some("nav-test-present"));
        let link = link_to("#nav-test-present");
        let click = cancelable_click();

        link.dispatch_event(&click).expect("dispatch click");

        assert!(click.default_prevented());
    }

    #[wasm_bindgen_test]
    fn link_to_missing_section_keeps_default_navigation() {
        let link = link_to("#nav-test-missing");
        let click = cancelable_click();

        link.dispatch_event(&click).expect("dispatch click");

        assert!(!click.default_prevented());
    }

    #[wasm_bindgen_test]
    fn external_link_is_left_alone() {
        let link = link_to("https://example.org/#nav-test-present");
        let click = cancelable_click();

        link.dispatch_event(&click).expect("dispatch click");

        assert!(!click.default_prevented());
    }

    #[wasm_bindgen_test]
    fn navbar_turns_solid_past_threshold_and_back() {
        let navbar = mounted("nav", None);
        let background = || {
            navbar
                .style()
                .get_property_value("background-color")
                .expect("read background color")
        };

        apply_navbar_style(&navbar, 150.0);
        assert_eq!(background(), NAVBAR_SOLID_BACKGROUND);

        apply_navbar_style(&navbar, 40.0);
        assert_eq!(background(), NAVBAR_RESTING_BACKGROUND);
    }
}
