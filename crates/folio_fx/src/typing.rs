//! Typed-text hero effect
//!
//! Captures the hero element's text, clears it, then re-types it one
//! character per 100ms after a 1s warmup. Once the text is back in full, a
//! caret blink toggles the border color every 750ms for the rest of the
//! session.

use std::time::Duration;

use folio_core::dom::{Document, NodeId};
use folio_core::resolve;
use folio_core::time::{Interval, Timeout};

const WARMUP_DELAY: Duration = Duration::from_millis(1000);
const TYPE_PERIOD: Duration = Duration::from_millis(100);
const BLINK_PERIOD: Duration = Duration::from_millis(750);
const CARET_STYLE: &str = "3px solid var(--primary-color)";
const CARET_COLOR: &str = "var(--primary-color)";

#[derive(Clone, Copy)]
enum Phase {
    Warmup { start: Timeout },
    Typing { next: Timeout },
    Blinking { blink: Interval },
}

pub struct TypingEffect {
    node: NodeId,
    chars: Vec<char>,
    cursor: usize,
    phase: Phase,
}

impl TypingEffect {
    /// Capture and clear the hero text, paint the caret, and schedule the
    /// warmup. Skipped when no `.typing-text` element exists.
    pub fn new(doc: &mut Document, start: Duration) -> Option<Self> {
        let node = resolve::first_match(doc, ".typing-text")?;
        let chars: Vec<char> = doc.text(node).unwrap_or_default().chars().collect();
        doc.set_text(node, "");
        doc.set_style(node, "border-right", CARET_STYLE);
        Some(Self {
            node,
            chars,
            cursor: 0,
            phase: Phase::Warmup {
                start: Timeout::at(start + WARMUP_DELAY),
            },
        })
    }

    pub fn is_blinking(&self) -> bool {
        matches!(self.phase, Phase::Blinking { .. })
    }

    pub fn update(&mut self, doc: &mut Document, now: Duration) {
        loop {
            let (next, advanced) = match self.phase {
                // The first character appears at the warmup deadline itself,
                // so hand Typing an already-due timeout.
                Phase::Warmup { mut start } => match start.fire(now) {
                    Some(at) => (
                        Phase::Typing {
                            next: Timeout::at(at),
                        },
                        true,
                    ),
                    None => (Phase::Warmup { start }, false),
                },
                Phase::Typing { mut next } => match next.fire(now) {
                    Some(at) => {
                        if self.cursor < self.chars.len() {
                            let ch = self.chars[self.cursor];
                            self.cursor += 1;
                            doc.append_text(self.node, &ch.to_string());
                            (
                                Phase::Typing {
                                    next: Timeout::at(at + TYPE_PERIOD),
                                },
                                true,
                            )
                        } else {
                            (
                                Phase::Blinking {
                                    blink: Interval::starting_at(at, BLINK_PERIOD),
                                },
                                true,
                            )
                        }
                    }
                    None => (Phase::Typing { next }, false),
                },
                Phase::Blinking { mut blink } => {
                    while blink.fire(now).is_some() {
                        self.toggle_caret(doc);
                    }
                    (Phase::Blinking { blink }, false)
                }
            };
            self.phase = next;
            if !advanced {
                break;
            }
        }
    }

    /// The first toggle always lands on `transparent`: the caret starts as
    /// a border-right shorthand, so the color property reads as unset.
    fn toggle_caret(&self, doc: &mut Document) {
        if doc.style(self.node, "border-color") == Some("transparent") {
            doc.set_style(self.node, "border-color", CARET_COLOR);
        } else {
            doc.set_style(self.node, "border-color", "transparent");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero_doc(text: &str) -> (Document, NodeId) {
        let mut doc = Document::new();
        let root = doc.root();
        let hero = doc.create_element("h1");
        doc.add_class(hero, "typing-text");
        doc.set_text(hero, text);
        doc.append_child(root, hero).unwrap();
        (doc, hero)
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn retypes_text_one_character_per_tick() {
        let (mut doc, hero) = hero_doc("Hi");
        let mut typing = TypingEffect::new(&mut doc, Duration::ZERO).unwrap();

        assert_eq!(doc.text(hero), Some(""));
        assert_eq!(doc.style(hero, "border-right"), Some(CARET_STYLE));

        typing.update(&mut doc, ms(999));
        assert_eq!(doc.text(hero), Some(""));

        typing.update(&mut doc, ms(1000));
        assert_eq!(doc.text(hero), Some("H"));
        typing.update(&mut doc, ms(1050));
        assert_eq!(doc.text(hero), Some("H"));
        typing.update(&mut doc, ms(1100));
        assert_eq!(doc.text(hero), Some("Hi"));
        assert!(!typing.is_blinking());

        // One idle typing period later the blink takes over
        typing.update(&mut doc, ms(1200));
        assert!(typing.is_blinking());
        assert!(doc.style(hero, "border-color").is_none());

        typing.update(&mut doc, ms(1950));
        assert_eq!(doc.style(hero, "border-color"), Some("transparent"));
        typing.update(&mut doc, ms(2700));
        assert_eq!(doc.style(hero, "border-color"), Some(CARET_COLOR));
    }

    #[test]
    fn empty_text_blinks_straight_away() {
        let (mut doc, hero) = hero_doc("");
        let mut typing = TypingEffect::new(&mut doc, Duration::ZERO).unwrap();

        typing.update(&mut doc, ms(1000));
        assert!(typing.is_blinking());
        typing.update(&mut doc, ms(1750));
        assert_eq!(doc.style(hero, "border-color"), Some("transparent"));
    }

    #[test]
    fn coarse_tick_catches_up_typing_and_blinks() {
        let (mut doc, hero) = hero_doc("Hi");
        let mut typing = TypingEffect::new(&mut doc, Duration::ZERO).unwrap();

        // Blink starts at 1200; toggles at 1950, 2700, 3450, 4200, 4950
        typing.update(&mut doc, ms(5000));
        assert_eq!(doc.text(hero), Some("Hi"));
        assert!(typing.is_blinking());
        assert_eq!(doc.style(hero, "border-color"), Some("transparent"));
    }

    #[test]
    fn missing_hero_element_skips_the_effect() {
        let mut doc = Document::new();
        assert!(TypingEffect::new(&mut doc, Duration::ZERO).is_none());
    }
}
