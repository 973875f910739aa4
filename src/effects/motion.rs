use super::css_number;

pub const LOADING_FADE_DELAY_MS: i32 = 1_000;
pub const LOADING_HIDE_DELAY_MS: i32 = 500;
pub const DEFERRED_INIT_DELAY_MS: i32 = 500;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const SKILL_TAG_STAGGER_MS: i32 = 100;

pub const TILT_HOVER_TRANSFORM: &str = "translateY(-10px) rotateX(5deg)";
pub const TILT_RESTING_TRANSFORM: &str = "translateY(0) rotateX(0deg)";
const TILT_DAMPING: f64 = 10.0;

pub const CURSOR_TRAIL_CLASS: &str = "cursor-trail";
pub const CURSOR_TRAIL_STYLE: &str = "position: fixed; width: 20px; height: 20px; \
background: radial-gradient(circle, rgba(99, 102, 241, 0.8) 0%, transparent 70%); \
border-radius: 50%; pointer-events: none; z-index: 9999; transition: transform 0.1s ease;";
const CURSOR_TRAIL_RADIUS_PX: f64 = 10.0;

const LABEL_FOCUS_COLOR: &str = "#6366f1";
const LABEL_REST_COLOR: &str = "#ffffff";

pub fn skill_tag_delay_ms(index: usize) -> i32 {
    i32::try_from(index)
        .unwrap_or(i32::MAX)
        .saturating_mul(SKILL_TAG_STAGGER_MS)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Rotation that tips the card toward the pointer, relative to its centre.
pub fn tilt_transform(client_x: f64, client_y: f64, rect: CardRect) -> String {
    let x = client_x - rect.left;
    let y = client_y - rect.top;
    let rotate_x = (y - rect.height / 2.0) / TILT_DAMPING;
    let rotate_y = (rect.width / 2.0 - x) / TILT_DAMPING;

    format!(
        "translateY(-10px) rotateX({}deg) rotateY({}deg)",
        css_number(rotate_x),
        css_number(rotate_y)
    )
}

pub fn cursor_trail_position(client_x: f64, client_y: f64) -> (String, String) {
    (
        format!("{}px", css_number(client_x - CURSOR_TRAIL_RADIUS_PX)),
        format!("{}px", css_number(client_y - CURSOR_TRAIL_RADIUS_PX)),
    )
}

pub fn cursor_trail_hidden(viewport_width: f64, mobile_breakpoint_px: f64) -> bool {
    viewport_width <= mobile_breakpoint_px
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelStyle {
    pub color: &'static str,
    pub transform: &'static str,
}

pub fn focused_label_style() -> LabelStyle {
    LabelStyle {
        color: LABEL_FOCUS_COLOR,
        transform: "translateY(-5px)",
    }
}

/// A label only drops back when its field was left empty.
pub fn blurred_label_style(field_value: &str) -> Option<LabelStyle> {
    field_value.is_empty().then_some(LabelStyle {
        color: LABEL_REST_COLOR,
        transform: "translateY(0)",
    })
}
