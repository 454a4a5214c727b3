//! Scroll-position navigation highlighting and the mobile menu state.

/// Pixels before a section's top at which it becomes the active one.
pub const SCROLL_OFFSET: i64 = 100;

/// A page section the nav can point at: its anchor id and vertical offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionAnchor {
    pub id: String,
    pub top: i64,
}

impl SectionAnchor {
    pub fn new(id: impl Into<String>, top: i64) -> Self {
        Self { id: id.into(), top }
    }
}

/// The section the nav should highlight for a scroll position.
///
/// Sections are scanned in document order; the last one whose activation
/// threshold has been scrolled past wins. Before the first threshold nothing
/// is active.
#[must_use]
pub fn active_section(scroll_y: i64, sections: &[SectionAnchor]) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if scroll_y >= section.top - SCROLL_OFFSET {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Whether a nav link's href targets the active section.
#[must_use]
pub fn is_active_link(href: &str, active: Option<&str>) -> bool {
    match active {
        Some(id) => href.strip_prefix('#') == Some(id),
        None => false,
    }
}

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Collapse the menu, e.g. after a nav link is followed.
    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionAnchor> {
        vec![
            SectionAnchor::new("about", 400),
            SectionAnchor::new("install", 900),
            SectionAnchor::new("changelog", 1600),
        ]
    }

    #[test]
    fn nothing_is_active_above_the_first_section() {
        assert_eq!(active_section(0, &page()), None);
        assert_eq!(active_section(299, &page()), None);
    }

    #[test]
    fn a_section_activates_at_its_offset_threshold() {
        assert_eq!(active_section(300, &page()), Some("about"));
        assert_eq!(active_section(799, &page()), Some("about"));
        assert_eq!(active_section(800, &page()), Some("install"));
    }

    #[test]
    fn the_last_qualifying_section_wins() {
        assert_eq!(active_section(5000, &page()), Some("changelog"));
    }

    #[test]
    fn no_sections_means_nothing_active() {
        assert_eq!(active_section(5000, &[]), None);
    }

    #[test]
    fn links_match_the_active_anchor() {
        assert!(is_active_link("#about", Some("about")));
        assert!(!is_active_link("#install", Some("about")));
        assert!(!is_active_link("#about", None));
        assert!(!is_active_link("about", Some("about")));
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut menu = MenuState::new();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }
}
