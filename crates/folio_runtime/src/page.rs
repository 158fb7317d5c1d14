//! Page assembly
//!
//! Owns the document plus every effect and navigation subsystem, and
//! drives them from one virtual clock. External input arrives through
//! `dispatch`; everything timed or visibility-triggered advances in
//! `tick`, in the same order the subsystems were wired up.

use std::time::Duration;

use folio_core::dom::{Document, NodeId};
use folio_core::events::InputEvent;
use folio_core::resolve;
use folio_core::rng::DeterministicRng;
use folio_core::time::{SessionClock, Timeout};
use folio_core::viewport::Viewport;
use folio_fx::{
    CounterAnimator, EmitterConfig, LoadingSequencer, ParticleEmitter, RevealAnimator,
    SkillBarAnimator, TypingEffect,
};
use folio_metrics::{Counter, TickTimer};
use folio_nav::{NavHandles, NavigationController, ScrollCoordinator};

use crate::config::RuntimeConfig;

/// Delay between one section's entrance class and the next.
const SECTION_STAGGER: Duration = Duration::from_millis(100);
/// Rolling window of tick-cost samples.
const TICK_SAMPLE_WINDOW: usize = 100;

pub struct Page {
    doc: Document,
    viewport: Viewport,
    clock: SessionClock,
    rng: DeterministicRng,

    loading: Option<LoadingSequencer>,
    particles: Option<ParticleEmitter>,
    reveal: RevealAnimator,
    counters: CounterAnimator,
    skill_bars: SkillBarAnimator,
    typing: Option<TypingEffect>,

    scroll: ScrollCoordinator,
    nav: NavigationController,

    /// Each `section` element gets its entrance class on a staggered timeout.
    section_stagger: Vec<(NodeId, Timeout)>,

    stats: Counter,
    tick_timer: TickTimer,
}

impl Page {
    pub fn new(mut doc: Document, config: &RuntimeConfig) -> Self {
        let clock = SessionClock::new();
        let start = clock.now();
        let viewport = Viewport::new(&config.viewport);
        let rng = DeterministicRng::new(config.seed);

        let loading = LoadingSequencer::new(&doc, start);
        let particles = ParticleEmitter::new(&doc, start, EmitterConfig::default());
        let reveal = RevealAnimator::new(&doc);
        let counters = CounterAnimator::new(&doc);
        let skill_bars = SkillBarAnimator::new(&doc);

        let handles = NavHandles::resolve(&doc);
        let scroll = ScrollCoordinator::new(&handles);
        let nav = NavigationController::new(&handles, config.viewport.smooth_scroll_native);

        let section_stagger = resolve::all_matches(&doc, "section")
            .into_iter()
            .enumerate()
            .map(|(index, section)| (section, Timeout::at(start + SECTION_STAGGER * index as u32)))
            .collect();

        // Last so the hero text is captured before it is cleared for typing.
        let typing = TypingEffect::new(&mut doc, start);

        Self {
            doc,
            viewport,
            clock,
            rng,
            loading,
            particles,
            reveal,
            counters,
            skill_bars,
            typing,
            scroll,
            nav,
            section_stagger,
            stats: Counter::new(),
            tick_timer: TickTimer::new(TICK_SAMPLE_WINDOW),
        }
    }

    pub fn doc(&self) -> &Document {
        &self.doc
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    pub fn stats(&self) -> &Counter {
        &self.stats
    }

    pub fn tick_timer(&self) -> &TickTimer {
        &self.tick_timer
    }

    pub fn is_menu_open(&self) -> bool {
        self.nav.is_menu_open(&self.doc)
    }

    pub fn is_scrolling(&self) -> bool {
        self.nav.is_scrolling()
    }

    /// Route one input event to the subsystems listening for it.
    pub fn dispatch(&mut self, event: InputEvent) {
        let now = self.clock.now();
        match event {
            InputEvent::Scroll { y } => {
                self.stats.increment("events.scroll", 1);
                self.viewport.set_scroll_y(y);
                self.scroll
                    .on_scroll(&mut self.doc, self.viewport.scroll_y(), now);
            }
            InputEvent::Click { target } => {
                self.stats.increment("events.click", 1);
                let from = self.viewport.scroll_y();
                if let Some(position) = self.nav.on_click(&mut self.doc, target, from, now) {
                    self.apply_nav_scroll(position, now);
                }
            }
            InputEvent::KeyDown { key } => {
                self.stats.increment("events.key", 1);
                self.nav.on_key_down(&mut self.doc, key);
            }
            InputEvent::Resize { width } => {
                self.stats.increment("events.resize", 1);
                self.viewport.set_width(width);
                self.nav.on_resize(now, width);
            }
        }
    }

    /// Advance the page by one fixed step.
    pub fn tick(&mut self, step: Duration) {
        self.tick_timer.begin();
        let now = self.clock.advance(step);

        for (section, entrance) in &mut self.section_stagger {
            if entrance.fire(now).is_some() {
                self.doc.add_class(*section, "loading");
            }
        }

        if let Some(loading) = &mut self.loading {
            loading.update(&mut self.doc, now);
        }
        if self.loading.as_ref().is_some_and(|l| l.is_hidden()) {
            // Overlay hidden; the sequencer has nothing left to drive.
            self.loading = None;
        }

        if let Some(particles) = &mut self.particles {
            particles.update(&mut self.doc, &mut self.rng, now);
        }

        self.scroll.update(&mut self.doc, now);
        if let Some(position) = self.nav.update(&mut self.doc, now) {
            self.apply_nav_scroll(position, now);
        }

        self.reveal.update(&mut self.doc, &self.viewport);
        self.counters.update(&mut self.doc, &self.viewport, now);
        self.skill_bars.update(&mut self.doc, &self.viewport);

        if let Some(typing) = &mut self.typing {
            typing.update(&mut self.doc, now);
        }

        if let Some(particles) = &self.particles {
            self.stats.set("particles.spawned", particles.spawned());
            self.stats.set("particles.removed", particles.removed());
            self.stats.set("particles.live", particles.live_count());
        }
        self.tick_timer.end();
    }

    fn apply_nav_scroll(&mut self, position: f32, now: Duration) {
        self.stats.increment("nav.scroll_frames", 1);
        self.viewport.set_scroll_y(position);
        self.scroll
            .on_scroll(&mut self.doc, self.viewport.scroll_y(), now);
    }
}

#[cfg(test)]
mod tests {
    use folio_core::events::Key;
    use folio_core::selector::SelectorList;

    use super::*;
    use crate::demo::build_portfolio;

    const STEP: Duration = Duration::from_millis(10);

    fn page() -> Page {
        Page::new(build_portfolio(), &RuntimeConfig::default())
    }

    fn run_for(page: &mut Page, ms: u64) {
        for _ in 0..ms / 10 {
            page.tick(STEP);
        }
    }

    fn node(page: &Page, selector: &str) -> NodeId {
        let selectors: SelectorList = selector.parse().expect("valid selector");
        page.doc().query_first(&selectors).expect("node present")
    }

    #[test]
    fn loading_overlay_and_section_entrances_complete() {
        let mut page = page();
        run_for(&mut page, 3000);

        let doc = page.doc();
        let screen = doc.element_by_id("loadingScreen").unwrap();
        assert_eq!(doc.style(screen, "display"), Some("none"));
        assert!(doc.has_class(screen, "fade-out"));
        let main = doc.element_by_id("mainContent").unwrap();
        assert!(doc.has_class(main, "loaded"));

        for id in ["home", "about", "skills", "projects", "contact"] {
            let section = doc.element_by_id(id).unwrap();
            assert!(doc.has_class(section, "loading"), "#{id} missing entrance");
        }
    }

    #[test]
    fn hero_types_out_and_stats_count_up_when_scrolled_to() {
        let mut page = page();
        run_for(&mut page, 4000);

        let headline = node(&page, ".typing-text");
        assert_eq!(page.doc().text(headline), Some("Hello, I'm Jordan Reyes"));
        assert!(page.doc().style(headline, "border-right").is_some());

        // Stats only start once the about section scrolls into view.
        let stats = resolve::all_matches(page.doc(), ".stat-number");
        assert_eq!(page.doc().text(stats[0]), Some("0"));

        page.dispatch(InputEvent::Scroll { y: 850.0 });
        run_for(&mut page, 2200);
        let texts: Vec<&str> = stats
            .iter()
            .filter_map(|&stat| page.doc().text(stat))
            .collect();
        assert_eq!(texts, ["42", "12", "150"]);
    }

    #[test]
    fn nav_click_scrolls_to_section_and_closes_menu() {
        let mut page = page();
        let hamburger = page.doc().element_by_id("hamburger").unwrap();
        page.dispatch(InputEvent::Click { target: hamburger });
        assert!(page.is_menu_open());

        let skills_link = node(&page, ".nav-link[href=\"#skills\"]");
        page.dispatch(InputEvent::Click { target: skills_link });
        assert!(!page.is_menu_open());
        assert!(page.is_scrolling());

        run_for(&mut page, 1000);
        assert!(!page.is_scrolling());
        // Skills section top minus the fixed header.
        assert_eq!(page.viewport().scroll_y(), 1430.0);

        let doc = page.doc();
        let navbar = doc.element_by_id("navbar").unwrap();
        assert!(doc.has_class(navbar, "scrolled"));
        let indicator = node(&page, ".scroll-indicator");
        assert!(doc.has_class(indicator, "hidden"));
        let active = node(&page, ".nav-link.active");
        assert_eq!(doc.attr(active, "href"), Some("#skills"));
    }

    #[test]
    fn resize_closes_menu_only_past_breakpoint() {
        let mut page = page();
        let hamburger = page.doc().element_by_id("hamburger").unwrap();

        page.dispatch(InputEvent::Click { target: hamburger });
        page.dispatch(InputEvent::Resize { width: 1024.0 });
        run_for(&mut page, 300);
        assert!(!page.is_menu_open());

        page.dispatch(InputEvent::Click { target: hamburger });
        page.dispatch(InputEvent::Resize { width: 500.0 });
        run_for(&mut page, 300);
        assert!(page.is_menu_open());

        page.dispatch(InputEvent::KeyDown { key: Key::Escape });
        assert!(!page.is_menu_open());
    }

    #[test]
    fn identical_seeds_replay_identically() {
        let script = |page: &mut Page| {
            run_for(page, 500);
            page.dispatch(InputEvent::Scroll { y: 850.0 });
            run_for(page, 1500);
        };

        let mut first = page();
        let mut second = page();
        script(&mut first);
        script(&mut second);

        assert_eq!(first.doc().node_count(), second.doc().node_count());
        let particle = node(&first, ".particle");
        let twin = node(&second, ".particle");
        assert_eq!(
            first.doc().style(particle, "animation-duration"),
            second.doc().style(twin, "animation-duration")
        );
        assert_eq!(
            first.doc().classes(particle),
            second.doc().classes(twin)
        );
        for ((name, value), (other_name, other_value)) in
            first.stats().iter().zip(second.stats().iter())
        {
            assert_eq!(name, other_name);
            assert_eq!(value, other_value);
        }
    }
}
