use log::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Scroll targets on the page, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Testimonials,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Testimonials => "Testimonials",
            Section::Contact => "Contact",
        }
    }
}

/// Smooth-scrolls to the section. A missing anchor is a no-op.
pub fn scroll_to(section: Section) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section.anchor()))
    else {
        warn!("No #{} anchor to scroll to", section.anchor());
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Opens an external link in a new browsing context.
pub fn open_external(url: &str) {
    if let Some(window) = web_sys::window() {
        if window
            .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
            .is_err()
        {
            warn!("Could not open {}", url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_unique_and_in_page_order() {
        let anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["home", "about", "projects", "testimonials", "contact"]);
    }

    #[test]
    fn labels_capitalize_anchor() {
        for section in Section::ALL {
            let anchor = section.anchor();
            let mut expected = anchor[..1].to_uppercase();
            expected.push_str(&anchor[1..]);
            assert_eq!(section.label(), expected);
        }
    }
}
