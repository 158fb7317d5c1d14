//! Skill bar fills
//!
//! Sets each `.skill-progress` bar's width to its `data-progress`
//! percentage the first time it is half visible. No stepping here: the
//! width is written once and a CSS transition owns the interpolation.
//! The attribute value passes through verbatim.

use folio_core::dom::Document;
use folio_core::resolve;
use folio_core::viewport::Viewport;
use tracing::warn;

use crate::observer::IntersectionObserver;

const SKILL_BAR_SELECTOR: &str = ".skill-progress";
const SKILL_BAR_THRESHOLD: f32 = 0.5;

pub struct SkillBarAnimator {
    observer: IntersectionObserver,
}

impl SkillBarAnimator {
    pub fn new(doc: &Document) -> Self {
        let mut observer = IntersectionObserver::new(SKILL_BAR_THRESHOLD, 0.0, true);
        for node in resolve::all_matches(doc, SKILL_BAR_SELECTOR) {
            observer.observe(node);
        }
        Self { observer }
    }

    pub fn pending_count(&self) -> usize {
        self.observer.observed_count()
    }

    pub fn update(&mut self, doc: &mut Document, viewport: &Viewport) {
        for node in self.observer.poll(doc, viewport) {
            let Some(progress) = doc.attr(node, "data-progress") else {
                warn!("skill bar without data-progress, skipping");
                continue;
            };
            let width = format!("{progress}%");
            doc.set_style(node, "width", width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::viewport::{Viewport, ViewportConfig};

    fn skills_doc() -> Document {
        let mut doc = Document::new();
        let root = doc.root();
        for (progress, top) in [(Some("92"), 1000.0), (Some("85"), 1100.0), (None, 1200.0)] {
            let bar = doc.create_element("div");
            doc.add_class(bar, "skill-progress");
            if let Some(value) = progress {
                doc.set_attr(bar, "data-progress", value);
            }
            doc.append_child(root, bar).unwrap();
            doc.set_offsets(bar, top, 20.0);
        }
        doc
    }

    #[test]
    fn widths_fill_once_on_first_visibility() {
        let mut doc = skills_doc();
        let bars = resolve::all_matches(&doc, ".skill-progress");
        let mut viewport = Viewport::new(&ViewportConfig::default());
        let mut animator = SkillBarAnimator::new(&doc);
        assert_eq!(animator.pending_count(), 3);

        animator.update(&mut doc, &viewport);
        assert!(doc.style(bars[0], "width").is_none());

        viewport.set_scroll_y(600.0);
        animator.update(&mut doc, &viewport);
        assert_eq!(doc.style(bars[0], "width"), Some("92%"));
        assert_eq!(doc.style(bars[1], "width"), Some("85%"));
        // Bar without the attribute is consumed but left unstyled
        assert!(doc.style(bars[2], "width").is_none());
        assert_eq!(animator.pending_count(), 0);

        // Triggered bars never re-fire
        doc.set_style(bars[0], "width", "1%");
        viewport.set_scroll_y(0.0);
        animator.update(&mut doc, &viewport);
        viewport.set_scroll_y(600.0);
        animator.update(&mut doc, &viewport);
        assert_eq!(doc.style(bars[0], "width"), Some("1%"));
    }
}
