//! Navigation controller
//!
//! Routes user input to the navigation behaviors. A click runs three
//! checks in order, mirroring the page's listener stack: nav-link
//! navigation, hamburger toggle, then close-on-outside-click. Escape and
//! a resize past the mobile breakpoint close the menu; the resize close
//! sits behind a 250ms debounce.

use std::time::Duration;

use folio_core::dom::{Document, NodeId};
use folio_core::events::Key;
use folio_core::time::Debounce;
use tracing::debug;

use crate::handles::NavHandles;
use crate::menu::MobileMenu;
use crate::smooth::SmoothScroller;

/// Sticky header height; scroll targets stop this far above the section.
const HEADER_OFFSET: f32 = 70.0;
const MOBILE_BREAKPOINT: f32 = 768.0;
const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

pub struct NavigationController {
    navbar: Option<NodeId>,
    hamburger: Option<NodeId>,
    nav_links: Vec<NodeId>,
    menu: MobileMenu,
    scroller: SmoothScroller,
    resize_close: Debounce<f32>,
}

impl NavigationController {
    pub fn new(handles: &NavHandles, native_smooth: bool) -> Self {
        Self {
            navbar: handles.navbar,
            hamburger: handles.hamburger,
            nav_links: handles.nav_links.clone(),
            menu: MobileMenu::new(handles.hamburger, handles.nav_menu),
            scroller: SmoothScroller::new(native_smooth),
            resize_close: Debounce::new(RESIZE_DEBOUNCE),
        }
    }

    pub fn is_menu_open(&self, doc: &Document) -> bool {
        self.menu.is_open(doc)
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroller.is_animating()
    }

    /// Handle a click landing on `target`. Returns a new scroll position
    /// when the click caused an immediate jump; animated positions flow
    /// from `update` instead.
    pub fn on_click(
        &mut self,
        doc: &mut Document,
        target: NodeId,
        scroll_from: f32,
        now: Duration,
    ) -> Option<f32> {
        let mut jump = None;

        // Nav link: scroll to its section, then close the menu.
        let clicked_link = self
            .nav_links
            .iter()
            .copied()
            .find(|&link| doc.contains(link, target));
        if let Some(link) = clicked_link {
            let section = doc
                .attr(link, "href")
                .and_then(|href| href.strip_prefix('#'))
                .and_then(|id| doc.element_by_id(id));
            if let Some(section) = section {
                let target_y = doc.offset_top(section) - HEADER_OFFSET;
                debug!("nav link click, scrolling to {target_y}");
                jump = self.scroller.scroll_to(scroll_from, target_y, now);
            }
            self.menu.close(doc);
        }

        // Hamburger control: toggle the menu pair.
        if let Some(hamburger) = self.hamburger {
            if doc.contains(hamburger, target) {
                self.menu.toggle(doc);
            }
        }

        // Anywhere outside the navbar: close.
        if let Some(navbar) = self.navbar {
            if !doc.contains(navbar, target) {
                self.menu.close(doc);
            }
        }

        jump
    }

    pub fn on_key_down(&mut self, doc: &mut Document, key: Key) {
        if key == Key::Escape {
            self.menu.close(doc);
        }
    }

    pub fn on_resize(&mut self, now: Duration, width: f32) {
        self.resize_close.call(now, width);
    }

    /// Drive the debounced resize close and the scroll animation. Returns
    /// the next animated scroll position, if one is due this tick.
    pub fn update(&mut self, doc: &mut Document, now: Duration) -> Option<f32> {
        if let Some(width) = self.resize_close.fire(now) {
            if width > MOBILE_BREAKPOINT {
                self.menu.close(doc);
            }
        }
        self.scroller.update(now)
    }
}
