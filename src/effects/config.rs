// Per-page settings exist only where the page behaviors run.
#[cfg(any(target_arch = "wasm32", test))]
mod page;

#[cfg(any(target_arch = "wasm32", test))]
pub use page::PageConfig;

pub fn parse_non_empty_string(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn parse_u16_with_bounds(raw: Option<String>, default: u16, bounds: (u16, u16)) -> u16 {
    raw.and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn port_parser_respects_inclusive_edges() {
        assert_eq!(parse_u16_with_bounds(Some("65535".into()), 8080, (1, 65535)), 65535);
        assert_eq!(parse_u16_with_bounds(Some("0".into()), 8080, (1, 65535)), 8080);
        assert_eq!(parse_u16_with_bounds(Some("70000".into()), 8080, (1, 65535)), 8080);
    }

    #[test]
    fn blank_strings_are_treated_as_absent() {
        assert_eq!(parse_non_empty_string(Some("   ".into())), None);
        assert_eq!(parse_non_empty_string(None), None);
        assert_eq!(parse_non_empty_string(Some(" dist ".into())), Some("dist".into()));
    }
}
