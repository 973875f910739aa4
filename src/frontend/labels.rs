use super::dom;
use crate::effects::{
    markup::{FORM_FIELD_SELECTOR, FORM_GROUP_SELECTOR, FORM_LABEL_SELECTOR},
    motion::{blurred_label_style, focused_label_style, LabelStyle},
};
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

pub fn init() {
    for group in dom::query_all(FORM_GROUP_SELECTOR) {
        bind(&group);
    }
}

fn bind(group: &Element) {
    let field = group.query_selector(FORM_FIELD_SELECTOR).ok().flatten();
    let label = group
        .query_selector(FORM_LABEL_SELECTOR)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());
    let (Some(field), Some(label)) = (field, label) else {
        return;
    };

    let focused = label.clone();
    dom::attach(&field, "focus", move |_| apply(&focused, focused_label_style()));

    let blurred = field.clone();
    dom::attach(&field, "blur", move |_| {
        if let Some(style) = blurred_label_style(&field_value(&blurred)) {
            apply(&label, style);
        }
    });
}

fn apply(label: &HtmlElement, style: LabelStyle) {
    dom::set_style(label, "color", style.color);
    dom::set_style(label, "transform", style.transform);
}

fn field_value(field: &Element) -> String {
    Reflect::get(field, &JsValue::from_str("value"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::Event;

    fn mounted_group() -> Element {
        let document = dom::document().expect("document available");
        let group = document.create_element("div").expect("create group");
        group.set_class_name("form-group");
        group.set_inner_html(r#"<input id="visitor-name" name="name"><label for="visitor-name">Name</label>"#);
        document
            .body()
            .expect("body available")
            .append_child(&group)
            .expect("append group");
        group
    }

    fn label_transform(group: &Element) -> String {
        group
            .query_selector("label")
            .expect("query label")
            .expect("label present")
            .dyn_into::<HtmlElement>()
            .expect("label is an HtmlElement")
            .style()
            .get_property_value("transform")
            .expect("read transform")
    }

    fn dispatch(target: &Element, event_type: &str) {
        target
            .dispatch_event(&Event::new(event_type).expect("event"))
            .expect("dispatch");
    }

    #[wasm_bindgen_test]
    fn focus_lifts_label_and_blur_with_text_keeps_it_lifted() {
        let group = mounted_group();
        bind(&group);
        let input = group.query_selector("input").expect("query").expect("input present");

        dispatch(&input, "focus");
        assert_eq!(label_transform(&group), "translateY(-5px)");

        Reflect::set(&input, &JsValue::from_str("value"), &JsValue::from_str("Jane"))
            .expect("set value");
        dispatch(&input, "blur");
        assert_eq!(label_transform(&group), "translateY(-5px)");
    }

    #[wasm_bindgen_test]
    fn blur_on_empty_field_settles_label() {
        let group = mounted_group();
        bind(&group);
        let input = group.query_selector("input").expect("query").expect("input present");

        dispatch(&input, "focus");
        dispatch(&input, "blur");

        assert_ne!(label_transform(&group), "translateY(-5px)");
    }
}
