//! Scroll-reveal classes
//!
//! Fade/slide elements gain a permanent `visible` class the first time they
//! scroll into view. Targets stay observed for the page's lifetime; the
//! class add is idempotent, so re-entries are harmless.

use folio_core::dom::Document;
use folio_core::resolve;
use folio_core::viewport::Viewport;

use crate::observer::IntersectionObserver;

const REVEAL_SELECTOR: &str = ".fade-in, .slide-in-left, .slide-in-right";
const REVEAL_THRESHOLD: f32 = 0.1;
const REVEAL_BOTTOM_MARGIN: f32 = -50.0;

pub struct RevealAnimator {
    observer: IntersectionObserver,
}

impl RevealAnimator {
    pub fn new(doc: &Document) -> Self {
        let mut observer =
            IntersectionObserver::new(REVEAL_THRESHOLD, REVEAL_BOTTOM_MARGIN, false);
        for node in resolve::all_matches(doc, REVEAL_SELECTOR) {
            observer.observe(node);
        }
        Self { observer }
    }

    pub fn observed_count(&self) -> usize {
        self.observer.observed_count()
    }

    pub fn update(&mut self, doc: &mut Document, viewport: &Viewport) {
        for node in self.observer.poll(doc, viewport) {
            doc.add_class(node, "visible");
        }
    }
}
