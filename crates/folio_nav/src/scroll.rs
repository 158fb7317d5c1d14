//! Scroll coordinator
//!
//! Reacts to every scroll position change: navbar chrome past 50px, the
//! scroll indicator past 100px, and the active nav link derived from
//! section geometry. The active-link pass runs immediately and once more
//! behind a 10ms trailing debounce, as a cheap coalescer for scroll
//! bursts.

use std::time::Duration;

use folio_core::dom::{Document, NodeId};
use folio_core::resolve;
use folio_core::selector::SelectorList;
use folio_core::time::Debounce;

use crate::handles::NavHandles;

const NAVBAR_SCROLLED_PAST: f32 = 50.0;
const INDICATOR_HIDDEN_PAST: f32 = 100.0;
/// Probe line sits this far below the top of the viewport.
const ACTIVE_PROBE_OFFSET: f32 = 100.0;
const ACTIVE_LINK_DEBOUNCE: Duration = Duration::from_millis(10);

pub struct ScrollCoordinator {
    navbar: Option<NodeId>,
    scroll_indicator: Option<NodeId>,
    nav_links: Vec<NodeId>,
    recompute: Debounce<f32>,
}

impl ScrollCoordinator {
    pub fn new(handles: &NavHandles) -> Self {
        Self {
            navbar: handles.navbar,
            scroll_indicator: handles.scroll_indicator,
            nav_links: handles.nav_links.clone(),
            recompute: Debounce::new(ACTIVE_LINK_DEBOUNCE),
        }
    }

    /// Handle one scroll position change.
    pub fn on_scroll(&mut self, doc: &mut Document, scroll_y: f32, now: Duration) {
        if let Some(navbar) = self.navbar {
            if scroll_y > NAVBAR_SCROLLED_PAST {
                doc.add_class(navbar, "scrolled");
            } else {
                doc.remove_class(navbar, "scrolled");
            }
        }

        if let Some(indicator) = self.scroll_indicator {
            if scroll_y > INDICATOR_HIDDEN_PAST {
                doc.add_class(indicator, "hidden");
            } else {
                doc.remove_class(indicator, "hidden");
            }
        }

        self.update_active_link(doc, scroll_y);
        self.recompute.call(now, scroll_y);
    }

    /// Drive the debounced recompute. Call once per tick.
    pub fn update(&mut self, doc: &mut Document, now: Duration) {
        if let Some(scroll_y) = self.recompute.fire(now) {
            self.update_active_link(doc, scroll_y);
        }
    }

    /// Mark the link of the section under the probe line. Sections are
    /// scanned in document order with an unconditional clear-then-set, so
    /// the last overlapping section wins and nothing is cleared when no
    /// section matches.
    fn update_active_link(&self, doc: &mut Document, scroll_y: f32) {
        let probe = scroll_y + ACTIVE_PROBE_OFFSET;
        for section in resolve::all_matches(doc, "section[id]") {
            let top = doc.offset_top(section);
            let height = doc.offset_height(section);
            let link_selector = match doc.id_of(section) {
                Some(id) => format!(".nav-link[href=\"#{id}\"]"),
                None => continue,
            };
            if probe >= top && probe < top + height {
                for &link in &self.nav_links {
                    doc.remove_class(link, "active");
                }
                if let Ok(list) = link_selector.parse::<SelectorList>() {
                    if let Some(link) = doc.query_first(&list) {
                        doc.add_class(link, "active");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        doc: Document,
        coordinator: ScrollCoordinator,
        navbar: NodeId,
        indicator: NodeId,
        link_a: NodeId,
        link_b: NodeId,
    }

    /// Two stacked sections `a` and `b`, each 100 tall, with their links.
    fn fixture() -> Fixture {
        let mut doc = Document::new();
        let root = doc.root();

        let navbar = doc.create_element("nav");
        doc.set_id(navbar, "navbar");
        doc.append_child(root, navbar).unwrap();

        let mut links = Vec::new();
        for href in ["#a", "#b"] {
            let link = doc.create_element("a");
            doc.add_class(link, "nav-link");
            doc.set_attr(link, "href", href);
            doc.append_child(navbar, link).unwrap();
            links.push(link);
        }

        let indicator = doc.create_element("div");
        doc.add_class(indicator, "scroll-indicator");
        doc.append_child(root, indicator).unwrap();

        for (id, top) in [("a", 0.0), ("b", 100.0)] {
            let section = doc.create_element("section");
            doc.set_id(section, id);
            doc.append_child(root, section).unwrap();
            doc.set_offsets(section, top, 100.0);
        }

        let coordinator = ScrollCoordinator::new(&NavHandles::resolve(&doc));
        Fixture {
            doc,
            coordinator,
            navbar,
            indicator,
            link_a: links[0],
            link_b: links[1],
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn navbar_and_indicator_follow_scroll_thresholds() {
        let mut f = fixture();

        f.coordinator.on_scroll(&mut f.doc, 51.0, ms(0));
        assert!(f.doc.has_class(f.navbar, "scrolled"));
        assert!(!f.doc.has_class(f.indicator, "hidden"));

        f.coordinator.on_scroll(&mut f.doc, 101.0, ms(10));
        assert!(f.doc.has_class(f.indicator, "hidden"));

        f.coordinator.on_scroll(&mut f.doc, 50.0, ms(20));
        assert!(!f.doc.has_class(f.navbar, "scrolled"));
        assert!(!f.doc.has_class(f.indicator, "hidden"));
    }

    #[test]
    fn probe_line_selects_the_section_link() {
        let mut f = fixture();
        f.doc.add_class(f.link_a, "active");

        // scroll_y 40 probes at 140, inside section b
        f.coordinator.on_scroll(&mut f.doc, 40.0, ms(0));
        assert!(!f.doc.has_class(f.link_a, "active"));
        assert!(f.doc.has_class(f.link_b, "active"));
    }

    #[test]
    fn later_overlapping_sections_win() {
        let mut f = fixture();
        // Stretch section a over b: the probe at 150 hits both
        let a = f.doc.element_by_id("a").unwrap();
        f.doc.set_offsets(a, 0.0, 300.0);

        f.coordinator.on_scroll(&mut f.doc, 50.0, ms(0));
        assert!(f.doc.has_class(f.link_b, "active"));
        assert!(!f.doc.has_class(f.link_a, "active"));
    }

    #[test]
    fn no_matching_section_leaves_links_alone() {
        let mut f = fixture();
        f.doc.add_class(f.link_b, "active");

        // Probe far past every section
        f.coordinator.on_scroll(&mut f.doc, 10_000.0, ms(0));
        assert!(f.doc.has_class(f.link_b, "active"));
    }

    #[test]
    fn debounced_pass_recomputes_after_the_quiet_period() {
        let mut f = fixture();

        f.coordinator.on_scroll(&mut f.doc, 40.0, ms(0));
        assert!(f.doc.has_class(f.link_b, "active"));

        // Section geometry shifts before the debounce fires; the trailing
        // pass sees the new layout
        let a = f.doc.element_by_id("a").unwrap();
        let b = f.doc.element_by_id("b").unwrap();
        f.doc.set_offsets(a, 100.0, 100.0);
        f.doc.set_offsets(b, 0.0, 100.0);

        f.coordinator.update(&mut f.doc, ms(9));
        assert!(f.doc.has_class(f.link_b, "active"));
        f.coordinator.update(&mut f.doc, ms(10));
        assert!(f.doc.has_class(f.link_a, "active"));
        assert!(!f.doc.has_class(f.link_b, "active"));
    }
}
