//! Mobile menu state
//!
//! The open state lives in the `active` class on the menu and hamburger
//! elements, not here. Toggling needs both elements; closing clears
//! whichever of the two exists, so a half-built page degrades instead of
//! breaking.

use folio_core::dom::{Document, NodeId};

#[derive(Debug, Clone, Copy)]
pub struct MobileMenu {
    hamburger: Option<NodeId>,
    nav_menu: Option<NodeId>,
}

impl MobileMenu {
    pub fn new(hamburger: Option<NodeId>, nav_menu: Option<NodeId>) -> Self {
        Self {
            hamburger,
            nav_menu,
        }
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        self.nav_menu
            .map(|menu| doc.has_class(menu, "active"))
            .unwrap_or(false)
    }

    /// Flip the menu and its control together. Without both elements the
    /// toggle is disabled entirely, so the pair never drifts apart.
    pub fn toggle(&self, doc: &mut Document) {
        let (Some(hamburger), Some(nav_menu)) = (self.hamburger, self.nav_menu) else {
            return;
        };
        doc.toggle_class(nav_menu, "active");
        doc.toggle_class(hamburger, "active");
    }

    pub fn close(&self, doc: &mut Document) {
        if let Some(nav_menu) = self.nav_menu {
            doc.remove_class(nav_menu, "active");
        }
        if let Some(hamburger) = self.hamburger {
            doc.remove_class(hamburger, "active");
        }
    }
}
