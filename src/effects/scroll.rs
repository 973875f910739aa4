use super::css_number;

pub const NAVBAR_SOLID_THRESHOLD_PX: f64 = 100.0;
pub const NAVBAR_SOLID_BACKGROUND: &str = "rgba(10, 10, 15, 0.95)";
pub const NAVBAR_RESTING_BACKGROUND: &str = "rgba(10, 10, 15, 0.9)";
pub const NAVBAR_BACKDROP_FILTER: &str = "blur(20px)";
pub const ACTIVE_SECTION_PROBE_PX: f64 = 100.0;

pub const PARALLAX_RATE: f64 = -0.5;
pub const PARALLAX_SPEED_STEP: f64 = 0.3;
pub const PARALLAX_ROTATION_PER_PX: f64 = 0.05;

pub const SCROLL_SETTLE_DEBOUNCE_MS: i32 = 10;

const SCROLL_TOP_BASE_STYLE: &str = "position: fixed; bottom: 30px; right: 30px; width: 50px; \
height: 50px; background: linear-gradient(135deg, #6366f1 0%, #8b5cf6 50%, #a855f7 100%); \
color: white; border: none; border-radius: 50%; cursor: pointer; z-index: 1000; \
transition: all 0.3s ease;";

/// Width of the progress bar, in percent of the scrollable distance.
///
/// A page without overflow (`scroll_height <= client_height`) reports `0`
/// rather than dividing by zero, and overscroll is clamped into `0..=100`.
pub fn scroll_progress_percent(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if !(scrollable > 0.0) || !scroll_y.is_finite() {
        return 0.0;
    }

    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn scroll_progress_width(scroll_y: f64, scroll_height: f64, client_height: f64) -> String {
    format!(
        "{}%",
        css_number(scroll_progress_percent(scroll_y, scroll_height, client_height))
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub backdrop_filter: &'static str,
}

pub fn navbar_style(scroll_y: f64) -> NavbarStyle {
    let background = if scroll_y > NAVBAR_SOLID_THRESHOLD_PX {
        NAVBAR_SOLID_BACKGROUND
    } else {
        NAVBAR_RESTING_BACKGROUND
    };

    NavbarStyle {
        background,
        backdrop_filter: NAVBAR_BACKDROP_FILTER,
    }
}

/// Document position to scroll to so `target_offset_top` lands just below the
/// fixed navigation bar.
pub fn anchor_scroll_top(target_offset_top: f64, nav_offset_px: f64) -> f64 {
    target_offset_top - nav_offset_px
}

/// Only in-page fragment links (`#id`) are intercepted.
pub fn in_page_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: Option<String>,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }

    pub fn link_href(&self) -> Option<String> {
        self.id.as_deref().map(|id| format!("#{id}"))
    }
}

/// The section whose link should be highlighted. Every section containing the
/// probe resets the highlight in document order, so the last one wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&SectionBounds> {
    let probe = scroll_y + ACTIVE_SECTION_PROBE_PX;
    sections.iter().rev().find(|section| section.contains(probe))
}

pub fn scroll_top_visible(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

pub fn scroll_top_button_style(visible: bool, hovered: bool) -> String {
    let (opacity, visibility) = if visible {
        ("1", "visible")
    } else {
        ("0", "hidden")
    };
    let (transform, shadow) = if hovered {
        ("translateY(-3px) scale(1.1)", "0 6px 20px rgba(99, 102, 241, 0.5)")
    } else {
        ("translateY(0) scale(1)", "0 4px 15px rgba(99, 102, 241, 0.3)")
    };

    format!(
        "{SCROLL_TOP_BASE_STYLE} opacity: {opacity}; visibility: {visibility}; \
transform: {transform}; box-shadow: {shadow};"
    )
}

pub fn parallax_transform(scroll_y: f64, index: usize) -> String {
    let rate = scroll_y * PARALLAX_RATE;
    let speed = (index + 1) as f64 * PARALLAX_SPEED_STEP;

    format!(
        "translateY({}px) rotate({}deg)",
        css_number(rate * speed),
        css_number(scroll_y * PARALLAX_ROTATION_PER_PX)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn section(id: Option<&str>, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.map(ToString::to_string),
            top,
            height,
        }
    }

    #[test]
    fn progress_is_zero_at_top_of_page() {
        assert_eq!(scroll_progress_width(0.0, 3000.0, 1000.0), "0%");
    }

    #[test]
    fn progress_is_ratio_of_scrollable_distance() {
        assert_eq!(scroll_progress_percent(500.0, 3000.0, 1000.0), 25.0);
        assert_eq!(scroll_progress_width(2000.0, 3000.0, 1000.0), "100%");
        assert_eq!(scroll_progress_width(1.0, 301.0, 1.0), format!("{}%", 1.0 / 300.0 * 100.0));
    }

    #[test]
    fn page_without_overflow_reports_zero_instead_of_nan() {
        assert_eq!(scroll_progress_width(0.0, 800.0, 800.0), "0%");
        assert_eq!(scroll_progress_width(0.0, 600.0, 800.0), "0%");
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(scroll_progress_percent(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress_percent(2100.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn navbar_turns_solid_only_past_threshold() {
        assert_eq!(navbar_style(100.0).background, NAVBAR_RESTING_BACKGROUND);
        assert_eq!(navbar_style(100.5).background, NAVBAR_SOLID_BACKGROUND);
        assert_eq!(navbar_style(0.0).backdrop_filter, "blur(20px)");
        assert_eq!(navbar_style(900.0).backdrop_filter, "blur(20px)");
    }

    #[test]
    fn anchor_target_sits_below_navbar() {
        assert_eq!(anchor_scroll_top(1200.0, 80.0), 1120.0);
        assert_eq!(anchor_scroll_top(40.0, 80.0), -40.0);
    }

    #[test]
    fn only_fragment_links_are_intercepted() {
        assert_eq!(in_page_selector("#projects"), Some("#projects"));
        assert_eq!(in_page_selector("#"), None);
        assert_eq!(in_page_selector("https://example.org/#projects"), None);
        assert_eq!(in_page_selector("/resume.pdf"), None);
    }

    #[test]
    fn active_section_is_measured_below_scroll_position() {
        let sections = vec![
            section(Some("home"), 0.0, 600.0),
            section(Some("about"), 600.0, 800.0),
            section(Some("projects"), 1400.0, 900.0),
        ];

        assert_eq!(
            active_section(&sections, 0.0).and_then(SectionBounds::link_href),
            Some("#home".to_string())
        );
        assert_eq!(
            active_section(&sections, 500.0).and_then(SectionBounds::link_href),
            Some("#about".to_string())
        );
        assert_eq!(
            active_section(&sections, 1299.0).and_then(SectionBounds::link_href),
            Some("#about".to_string())
        );
        assert_eq!(
            active_section(&sections, 1300.0).and_then(SectionBounds::link_href),
            Some("#projects".to_string())
        );
        assert_eq!(active_section(&sections, 2300.0), None);
    }

    #[test]
    fn overlapping_sections_resolve_to_the_last_match() {
        let sections = vec![
            section(Some("outer"), 0.0, 2000.0),
            section(None, 200.0, 200.0),
        ];

        let active = active_section(&sections, 150.0).expect("probe inside both sections");
        assert_eq!(active.link_href(), None);
    }

    #[test]
    fn scroll_top_toggles_strictly_above_threshold() {
        assert!(!scroll_top_visible(500.0, 500.0));
        assert!(scroll_top_visible(501.0, 500.0));

        let hidden = scroll_top_button_style(false, false);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("visibility: hidden;"));

        let shown = scroll_top_button_style(true, false);
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("visibility: visible;"));
    }

    #[test]
    fn scroll_top_hover_lifts_button() {
        let hovered = scroll_top_button_style(true, true);
        assert!(hovered.contains("transform: translateY(-3px) scale(1.1);"));
        assert!(hovered.contains("box-shadow: 0 6px 20px rgba(99, 102, 241, 0.5);"));

        let resting = scroll_top_button_style(true, false);
        assert!(resting.contains("transform: translateY(0) scale(1);"));
        assert!(resting.contains("box-shadow: 0 4px 15px rgba(99, 102, 241, 0.3);"));
    }

    #[test]
    fn parallax_speed_grows_with_index() {
        assert_eq!(parallax_transform(0.0, 0), "translateY(0px) rotate(0deg)");
        assert_eq!(parallax_transform(200.0, 0), "translateY(-30px) rotate(10deg)");
        assert_eq!(parallax_transform(200.0, 1), "translateY(-60px) rotate(10deg)");
    }
}
