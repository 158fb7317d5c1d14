//! Scripted visitor session
//!
//! Replays a fixed timeline of scrolls, clicks, key presses and resizes
//! against the page, then summarizes what the subsystems did. With the
//! virtual clock and seeded RNG the whole run is reproducible.

use std::time::Duration;

use folio_core::dom::{Document, NodeId};
use folio_core::events::{InputEvent, Key};
use folio_core::selector::SelectorList;
use tracing::info;

use crate::config::RuntimeConfig;
use crate::page::Page;

pub struct SessionReport {
    pub ticks: u64,
    pub events_delivered: usize,
    pub final_scroll: f32,
    pub active_section: Option<String>,
    pub counters: Vec<(String, usize)>,
    pub tick_time_ms: f64,
}

impl SessionReport {
    pub fn log(&self) {
        info!(
            "session complete: {} ticks, {} events delivered",
            self.ticks, self.events_delivered
        );
        info!(
            "final scroll {:.0}, active link {}",
            self.final_scroll,
            self.active_section.as_deref().unwrap_or("none")
        );
        for (name, value) in &self.counters {
            info!("  {name}: {value}");
        }
        info!("avg tick {:.3}ms", self.tick_time_ms);
    }
}

/// Drive the page through the scripted session.
///
/// Each tick advances the clock first; any scripted events that have
/// come due are then delivered before the next tick.
pub fn run(page: &mut Page, config: &RuntimeConfig) -> SessionReport {
    // A zero step could never advance the clock; hold it at 1ms.
    let tick_ms = config.tick_ms.max(1);
    let step = Duration::from_millis(tick_ms);
    let total_ticks = config.session_ms / tick_ms;
    let timeline = script(page);
    let mut delivered = 0;

    info!(
        "session start: {}ms at {}ms per tick, {} scripted events",
        config.session_ms,
        tick_ms,
        timeline.len()
    );

    for _ in 0..total_ticks {
        page.tick(step);
        while delivered < timeline.len() && timeline[delivered].0 <= page.now() {
            page.dispatch(timeline[delivered].1);
            delivered += 1;
        }
    }

    SessionReport {
        ticks: total_ticks,
        events_delivered: delivered,
        final_scroll: page.viewport().scroll_y(),
        active_section: active_link_target(page),
        counters: page
            .stats()
            .iter()
            .map(|(name, &value)| (name.clone(), value))
            .collect(),
        tick_time_ms: page.tick_timer().tick_time_ms(),
    }
}

/// A visitor who waits out the loading screen, reads the about section,
/// opens the mobile menu to jump to skills, then scrolls the rest of the
/// way down.
fn script(page: &Page) -> Vec<(Duration, InputEvent)> {
    let doc = page.doc();
    let at = Duration::from_millis;
    let mut events = vec![
        (at(2500), InputEvent::Scroll { y: 120.0 }),
        (at(3000), InputEvent::Scroll { y: 850.0 }),
        (at(9000), InputEvent::Resize { width: 1024.0 }),
        (at(10_000), InputEvent::Scroll { y: 2200.0 }),
        (at(12_500), InputEvent::KeyDown { key: Key::Escape }),
        (at(15_000), InputEvent::Scroll { y: 3100.0 }),
    ];
    if let Some(hamburger) = doc.element_by_id("hamburger") {
        events.push((at(6000), InputEvent::Click { target: hamburger }));
        events.push((at(12_000), InputEvent::Click { target: hamburger }));
    }
    if let Some(link) = query(doc, ".nav-link[href=\"#skills\"]") {
        events.push((at(6500), InputEvent::Click { target: link }));
    }
    events.sort_by_key(|&(when, _)| when);
    events
}

fn query(doc: &Document, selector: &str) -> Option<NodeId> {
    let selectors: SelectorList = selector.parse().ok()?;
    doc.query_first(&selectors)
}

fn active_link_target(page: &Page) -> Option<String> {
    let link = query(page.doc(), ".nav-link.active")?;
    page.doc().attr(link, "href").map(str::to_string)
}
