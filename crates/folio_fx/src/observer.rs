//! Polled intersection observation
//!
//! Watches element boxes against the viewport's visible band and reports
//! entry transitions. The browser delivers these asynchronously; here the
//! page loop polls once per tick, which keeps triggering deterministic.

use folio_core::dom::{Document, NodeId};
use folio_core::viewport::Viewport;

struct Watched {
    node: NodeId,
    intersecting: bool,
}

/// Reports elements whose visible ratio crosses a threshold.
///
/// An element "enters" when its ratio first reaches the threshold since the
/// previous poll; staying visible does not re-fire. With `once` set, each
/// target is unobserved after its first entry.
pub struct IntersectionObserver {
    threshold: f32,
    bottom_margin: f32,
    once: bool,
    targets: Vec<Watched>,
}

impl IntersectionObserver {
    pub fn new(threshold: f32, bottom_margin: f32, once: bool) -> Self {
        Self {
            threshold,
            bottom_margin,
            once,
            targets: Vec::new(),
        }
    }

    /// Start watching a node. Observing the same node twice is a no-op.
    pub fn observe(&mut self, node: NodeId) {
        if self.targets.iter().any(|t| t.node == node) {
            return;
        }
        self.targets.push(Watched {
            node,
            intersecting: false,
        });
    }

    pub fn unobserve(&mut self, node: NodeId) {
        self.targets.retain(|t| t.node != node);
    }

    pub fn observed_count(&self) -> usize {
        self.targets.len()
    }

    /// Nodes that entered the visible band since the last poll, in
    /// observation order.
    pub fn poll(&mut self, doc: &Document, viewport: &Viewport) -> Vec<NodeId> {
        let (band_top, band_bottom) = viewport.visible_band(self.bottom_margin);
        let mut entered = Vec::new();
        for target in &mut self.targets {
            let ratio = intersection_ratio(doc, target.node, band_top, band_bottom);
            let intersecting = ratio >= self.threshold;
            if intersecting && !target.intersecting {
                entered.push(target.node);
            }
            target.intersecting = intersecting;
        }
        if self.once {
            self.targets.retain(|t| !entered.contains(&t.node));
        }
        entered
    }
}

/// Fraction of the element's height inside the band. Detached nodes and
/// zero-height boxes never intersect.
fn intersection_ratio(doc: &Document, node: NodeId, band_top: f32, band_bottom: f32) -> f32 {
    if !doc.is_attached(node) {
        return 0.0;
    }
    let top = doc.offset_top(node);
    let height = doc.offset_height(node);
    if height <= 0.0 {
        return 0.0;
    }
    let visible = (top + height).min(band_bottom) - top.max(band_top);
    (visible / height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::viewport::ViewportConfig;

    fn doc_with_box(top: f32, height: f32) -> (Document, NodeId) {
        let mut doc = Document::new();
        let root = doc.root();
        let node = doc.create_element("div");
        doc.append_child(root, node).unwrap();
        doc.set_offsets(node, top, height);
        (doc, node)
    }

    fn viewport() -> Viewport {
        // 1280x720, scrolled to the top
        Viewport::new(&ViewportConfig::default())
    }

    #[test]
    fn fires_once_per_entry_transition() {
        let (doc, node) = doc_with_box(100.0, 200.0);
        let viewport = viewport();
        let mut observer = IntersectionObserver::new(0.1, 0.0, false);
        observer.observe(node);

        assert_eq!(observer.poll(&doc, &viewport), vec![node]);
        assert!(observer.poll(&doc, &viewport).is_empty());
        assert!(observer.poll(&doc, &viewport).is_empty());
    }

    #[test]
    fn refires_after_leaving_the_band() {
        let (doc, node) = doc_with_box(100.0, 200.0);
        let mut viewport = viewport();
        let mut observer = IntersectionObserver::new(0.1, 0.0, false);
        observer.observe(node);

        assert_eq!(observer.poll(&doc, &viewport).len(), 1);

        // Scroll far past the element, then back
        viewport.set_scroll_y(5000.0);
        assert!(observer.poll(&doc, &viewport).is_empty());
        viewport.set_scroll_y(0.0);
        assert_eq!(observer.poll(&doc, &viewport), vec![node]);
    }

    #[test]
    fn once_targets_are_unobserved_after_firing() {
        let (doc, node) = doc_with_box(100.0, 200.0);
        let viewport = viewport();
        let mut observer = IntersectionObserver::new(0.5, 0.0, true);
        observer.observe(node);

        assert_eq!(observer.poll(&doc, &viewport), vec![node]);
        assert_eq!(observer.observed_count(), 0);
        assert!(observer.poll(&doc, &viewport).is_empty());
    }

    #[test]
    fn threshold_gates_partial_visibility() {
        // Element of height 1000 whose top 50px peek into a 720px viewport
        // from below: ratio 0.05
        let (doc, node) = doc_with_box(670.0, 1000.0);
        let viewport = viewport();

        let mut strict = IntersectionObserver::new(0.1, 0.0, false);
        strict.observe(node);
        assert!(strict.poll(&doc, &viewport).is_empty());

        let mut loose = IntersectionObserver::new(0.05, 0.0, false);
        loose.observe(node);
        assert_eq!(loose.poll(&doc, &viewport), vec![node]);
    }

    #[test]
    fn negative_bottom_margin_narrows_the_band() {
        // Box occupying exactly the last 50px of the viewport
        let (doc, node) = doc_with_box(670.0, 50.0);
        let viewport = viewport();

        let mut plain = IntersectionObserver::new(0.5, 0.0, false);
        plain.observe(node);
        assert_eq!(plain.poll(&doc, &viewport).len(), 1);

        let mut inset = IntersectionObserver::new(0.5, -50.0, false);
        inset.observe(node);
        assert!(inset.poll(&doc, &viewport).is_empty());
    }

    #[test]
    fn removed_targets_never_fire() {
        let (mut doc, node) = doc_with_box(100.0, 200.0);
        let viewport = viewport();
        let mut observer = IntersectionObserver::new(0.1, 0.0, false);
        observer.observe(node);

        doc.remove(node);
        assert!(observer.poll(&doc, &viewport).is_empty());
    }
}
