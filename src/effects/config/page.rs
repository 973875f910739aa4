use super::parse_non_empty_string;
use crate::effects::log::{LogLevel, DEFAULT_LOG_LEVEL};

pub const DEFAULT_CONTACT_RECIPIENT: &str = "sayedibrahim4u@gmail.com";
pub const DEFAULT_NAV_OFFSET_PX: f64 = 80.0;
pub const DEFAULT_SCROLL_TOP_THRESHOLD_PX: f64 = 500.0;
pub const DEFAULT_MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const DEFAULT_NOTIFICATION_DISPLAY_MS: u32 = 5_000;

const NAV_OFFSET_PX_BOUNDS: (f64, f64) = (0.0, 400.0);
const SCROLL_TOP_THRESHOLD_PX_BOUNDS: (f64, f64) = (0.0, 100_000.0);
const MOBILE_BREAKPOINT_PX_BOUNDS: (f64, f64) = (0.0, 4_096.0);
const NOTIFICATION_DISPLAY_MS_BOUNDS: (u32, u32) = (1_000, 60_000);

/// Per-page settings, read once from `data-*` attributes on `<body>`.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub contact_recipient: String,
    pub nav_offset_px: f64,
    pub scroll_top_threshold_px: f64,
    pub mobile_breakpoint_px: f64,
    pub notification_display_ms: u32,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            contact_recipient: DEFAULT_CONTACT_RECIPIENT.to_string(),
            nav_offset_px: DEFAULT_NAV_OFFSET_PX,
            scroll_top_threshold_px: DEFAULT_SCROLL_TOP_THRESHOLD_PX,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            notification_display_ms: DEFAULT_NOTIFICATION_DISPLAY_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl PageConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let contact_recipient = parse_non_empty_string(lookup("data-contact-recipient"))
            .filter(|value| value.contains('@'))
            .unwrap_or_else(|| DEFAULT_CONTACT_RECIPIENT.to_string());
        let nav_offset_px = parse_f64_with_bounds(
            lookup("data-nav-offset"),
            DEFAULT_NAV_OFFSET_PX,
            NAV_OFFSET_PX_BOUNDS,
        );
        let scroll_top_threshold_px = parse_f64_with_bounds(
            lookup("data-scroll-top-threshold"),
            DEFAULT_SCROLL_TOP_THRESHOLD_PX,
            SCROLL_TOP_THRESHOLD_PX_BOUNDS,
        );
        let mobile_breakpoint_px = parse_f64_with_bounds(
            lookup("data-mobile-breakpoint"),
            DEFAULT_MOBILE_BREAKPOINT_PX,
            MOBILE_BREAKPOINT_PX_BOUNDS,
        );
        let notification_display_ms = parse_u32_with_bounds(
            lookup("data-notification-ms"),
            DEFAULT_NOTIFICATION_DISPLAY_MS,
            NOTIFICATION_DISPLAY_MS_BOUNDS,
        );
        let log_level = parse_non_empty_string(lookup("data-log-level"))
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            contact_recipient,
            nav_offset_px,
            scroll_top_threshold_px,
            mobile_breakpoint_px,
            notification_display_ms,
            log_level,
        }
    }
}

fn parse_f64_with_bounds(raw: Option<String>, default: f64, bounds: (f64, f64)) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_u32_with_bounds(raw: Option<String>, default: u32, bounds: (u32, u32)) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}
