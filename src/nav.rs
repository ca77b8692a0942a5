use crate::section::Section;

/// Classes of the fixed navigation bar. Horizontal centring lives here, so the
/// entrance animation must only move it vertically.
pub const NAV_BAR_CLASS: &str = "fixed top-8 left-1/2 -translate-x-1/2 z-50 drop-in";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub section: Section,
    pub active: bool,
}

/// Entries of the navigation bar, in page order, with the active bucket marked.
pub fn nav_entries(active: Section) -> [NavEntry; 4] {
    Section::ALL.map(|section| NavEntry {
        section,
        active: section == active,
    })
}

/// Something that can bring an element into view by id.
///
/// The browser implementation wraps `Element::scroll_into_view`; a missing
/// element is not an error.
pub trait ScrollTarget {
    fn scroll_to_anchor(&self, anchor_id: &str) -> bool;
}

/// Requests a smooth scroll to `section`. Returns whether a target was found.
pub fn scroll_to_section<T: ScrollTarget + ?Sized>(target: &T, section: Section) -> bool {
    let found = target.scroll_to_anchor(section.anchor_id());
    if !found {
        log::debug!("no element for section {section}, ignoring nav click");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeDocument {
        present: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl ScrollTarget for FakeDocument {
        fn scroll_to_anchor(&self, anchor_id: &str) -> bool {
            if self.present.contains(&anchor_id) {
                self.scrolled.borrow_mut().push(anchor_id.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn test_exactly_one_entry_active() {
        for active in Section::ALL {
            let entries = nav_entries(active);
            let highlighted: Vec<_> = entries.iter().filter(|e| e.active).collect();
            assert_eq!(highlighted.len(), 1);
            assert_eq!(highlighted[0].section, active);
        }
    }

    #[test]
    fn test_entries_keep_page_order() {
        let labels: Vec<_> = nav_entries(Section::Hero)
            .iter()
            .map(|e| e.section.label())
            .collect();
        assert_eq!(labels, vec!["Hero", "Skills", "Experience", "Projects"]);
    }

    #[test]
    fn test_click_scrolls_to_matching_section() {
        let doc = FakeDocument {
            present: vec!["hero", "skills", "experience", "projects"],
            scrolled: RefCell::new(vec![]),
        };
        assert!(scroll_to_section(&doc, Section::Experience));
        assert_eq!(*doc.scrolled.borrow(), vec!["experience".to_string()]);
    }

    #[test]
    fn test_click_on_missing_section_is_noop() {
        let doc = FakeDocument {
            present: vec!["hero"],
            scrolled: RefCell::new(vec![]),
        };
        assert!(!scroll_to_section(&doc, Section::Projects));
        assert!(doc.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_drop_in_keeps_bar_centred() {
        let css = include_str!("../input.css");
        let start = css.find("@keyframes drop-in").expect("drop-in keyframes");
        let end = start + css[start..].find("\n}").expect("keyframes end");
        let keyframes = &css[start..end];
        assert!(NAV_BAR_CLASS.contains("-translate-x-1/2"));
        // the utility's translate and the keyframe transform would add up
        assert!(!keyframes.contains("translate(-50%"));
        assert!(!keyframes.contains("translateX"));
    }
}
