pub const LOADING_ID: &str = "loading";
pub const SCROLL_PROGRESS_ID: &str = "scrollProgress";
pub const NAVBAR_ID: &str = "navbar";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const EMAIL_LINK_ID: &str = "email-link";

pub const NAV_LINKS_SELECTOR: &str = ".nav-links a";
pub const SECTION_SELECTOR: &str = "section";
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const SKILL_CARD_SELECTOR: &str = ".skill-card";
pub const SKILL_TAG_SELECTOR: &str = ".skill-tag";
pub const FLOATING_ELEMENT_SELECTOR: &str = ".floating-element";
pub const TYPING_SELECTOR: &str = "[data-typing]";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const FORM_GROUP_SELECTOR: &str = ".form-group";
pub const FORM_FIELD_SELECTOR: &str = "input, textarea, select";
pub const FORM_LABEL_SELECTOR: &str = "label";

#[cfg(target_arch = "wasm32")]
pub const ACTIVE_CLASS: &str = "active";

/// Where a piece of host markup is found: by element id or by CSS selector.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookTarget {
    Id(&'static str),
    Selector(&'static str),
}

/// A piece of host markup one of the page behaviors binds to.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DomHook {
    pub behavior: &'static str,
    pub target: HookTarget,
}

#[cfg(not(target_arch = "wasm32"))]
impl DomHook {
    const fn id(behavior: &'static str, id: &'static str) -> Self {
        Self {
            behavior,
            target: HookTarget::Id(id),
        }
    }

    const fn selector(behavior: &'static str, selector: &'static str) -> Self {
        Self {
            behavior,
            target: HookTarget::Selector(selector),
        }
    }

    pub fn css_selector(&self) -> String {
        match self.target {
            HookTarget::Id(id) => format!("#{id}"),
            HookTarget::Selector(selector) => selector.to_string(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub const DOM_HOOKS: &[DomHook] = &[
    DomHook::id("loading", LOADING_ID),
    DomHook::id("scroll-progress", SCROLL_PROGRESS_ID),
    DomHook::id("navigation", NAVBAR_ID),
    DomHook::selector("navigation", NAV_LINKS_SELECTOR),
    DomHook::selector("navigation", SECTION_SELECTOR),
    DomHook::selector("reveal", REVEAL_SELECTOR),
    DomHook::selector("reveal", SKILL_CARD_SELECTOR),
    DomHook::selector("reveal", SKILL_TAG_SELECTOR),
    DomHook::id("contact", CONTACT_FORM_ID),
    DomHook::id("contact", EMAIL_LINK_ID),
    DomHook::selector("parallax", FLOATING_ELEMENT_SELECTOR),
    DomHook::selector("typing", TYPING_SELECTOR),
    DomHook::selector("tilt", PROJECT_CARD_SELECTOR),
    DomHook::selector("labels", FORM_GROUP_SELECTOR),
    DomHook::selector("labels", FORM_FIELD_SELECTOR),
    DomHook::selector("labels", FORM_LABEL_SELECTOR),
];

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn id_hooks_render_as_id_selectors() {
        for (id, selector) in [
            (LOADING_ID, "#loading"),
            (SCROLL_PROGRESS_ID, "#scrollProgress"),
            (NAVBAR_ID, "#navbar"),
            (CONTACT_FORM_ID, "#contactForm"),
            (EMAIL_LINK_ID, "#email-link"),
        ] {
            let hook = DOM_HOOKS
                .iter()
                .find(|hook| hook.target == HookTarget::Id(id))
                .unwrap_or_else(|| panic!("{id} is not audited"));
            assert_eq!(hook.css_selector(), selector);
        }
    }

    #[test]
    fn hook_selectors_are_unique() {
        for (index, hook) in DOM_HOOKS.iter().enumerate() {
            assert!(!DOM_HOOKS[index + 1..]
                .iter()
                .any(|other| other.css_selector() == hook.css_selector()));
        }
    }
}
