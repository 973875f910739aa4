use super::dom;
use crate::effects::{
    markup::PROJECT_CARD_SELECTOR,
    motion::{tilt_transform, CardRect, TILT_HOVER_TRANSFORM, TILT_RESTING_TRANSFORM},
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

pub fn init() {
    for card in dom::query_all(PROJECT_CARD_SELECTOR) {
        bind(&card);
    }
}

fn bind(card: &HtmlElement) {
    let hovered = card.clone();
    dom::attach(card, "mouseenter", move |_| {
        dom::set_style(&hovered, "transform", TILT_HOVER_TRANSFORM);
        dom::set_style(&hovered, "transform-style", "preserve-3d");
    });

    let left = card.clone();
    dom::attach(card, "mouseleave", move |_| {
        dom::set_style(&left, "transform", TILT_RESTING_TRANSFORM);
    });

    let tilted = card.clone();
    dom::attach(card, "mousemove", move |event| {
        let Some(pointer) = event.dyn_ref::<MouseEvent>() else {
            return;
        };

        let rect = tilted.get_bounding_client_rect();
        let transform = tilt_transform(
            f64::from(pointer.client_x()),
            f64::from(pointer.client_y()),
            CardRect {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            },
        );
        dom::set_style(&tilted, "transform", &transform);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::Event;

    fn mounted_card() -> HtmlElement {
        let document = dom::document().expect("document available");
        let card: HtmlElement = document
            .create_element("div")
            .expect("create card")
            .dyn_into()
            .expect("div is an HtmlElement");
        card.set_class_name("project-card");
        document
            .body()
            .expect("body available")
            .append_child(&card)
            .expect("append card");
        card
    }

    #[wasm_bindgen_test]
    fn entering_card_lifts_it_in_3d() {
        let card = mounted_card();
        bind(&card);

        card.dispatch_event(&Event::new("mouseenter").expect("event"))
            .expect("dispatch mouseenter");

        let style = card.style();
        assert_eq!(
            style.get_property_value("transform-style").expect("read style"),
            "preserve-3d"
        );
        assert!(style
            .get_property_value("transform")
            .expect("read style")
            .starts_with("translateY(-10px)"));
    }

    #[wasm_bindgen_test]
    fn leaving_card_drops_the_lift() {
        let card = mounted_card();
        bind(&card);

        card.dispatch_event(&Event::new("mouseenter").expect("event"))
            .expect("dispatch mouseenter");
        card.dispatch_event(&Event::new("mouseleave").expect("event"))
            .expect("dispatch mouseleave");

        assert!(!card
            .style()
            .get_property_value("transform")
            .expect("read style")
            .contains("-10px"));
    }
}
