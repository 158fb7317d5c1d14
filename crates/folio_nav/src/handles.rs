//! Resolved navigation elements
//!
//! One resolution pass at page init, so event handlers never repeat
//! selector lookups. Each handle is optional: a page without a navbar
//! still scrolls, it just skips the navbar behaviors.

use folio_core::dom::{Document, NodeId};
use folio_core::resolve;

#[derive(Debug, Clone)]
pub struct NavHandles {
    pub navbar: Option<NodeId>,
    pub hamburger: Option<NodeId>,
    pub nav_menu: Option<NodeId>,
    pub nav_links: Vec<NodeId>,
    pub scroll_indicator: Option<NodeId>,
}

impl NavHandles {
    pub fn resolve(doc: &Document) -> Self {
        Self {
            navbar: resolve::by_id(doc, "navbar"),
            hamburger: resolve::by_id(doc, "hamburger"),
            nav_menu: resolve::by_id(doc, "nav-menu"),
            nav_links: resolve::all_matches(doc, ".nav-link"),
            scroll_indicator: resolve::first_match(doc, ".scroll-indicator"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_what_exists_and_tolerates_the_rest() {
        let mut doc = Document::new();
        let root = doc.root();
        let nav = doc.create_element("nav");
        doc.set_id(nav, "navbar");
        doc.append_child(root, nav).unwrap();
        for href in ["#home", "#about"] {
            let link = doc.create_element("a");
            doc.add_class(link, "nav-link");
            doc.set_attr(link, "href", href);
            doc.append_child(nav, link).unwrap();
        }

        let handles = NavHandles::resolve(&doc);
        assert!(handles.navbar.is_some());
        assert_eq!(handles.nav_links.len(), 2);
        assert!(handles.hamburger.is_none());
        assert!(handles.nav_menu.is_none());
        assert!(handles.scroll_indicator.is_none());
    }
}
