//! Loading screen sequencer
//!
//! Drives the boot overlay from 0 to 100% on a fixed 50ms cadence, then
//! fades it out and reveals the main content. Running → Completing →
//! FadingOut → Hidden; the progress ticker is dropped on completion.

use std::time::Duration;

use folio_core::dom::{Document, NodeId};
use folio_core::resolve;
use folio_core::time::{Interval, Timeout};
use tracing::{debug, warn};

const UPDATE_PERIOD: Duration = Duration::from_millis(50);
const LOADING_DURATION_MS: f32 = 2000.0;
const PROGRESS_INCREMENT: f32 = 100.0 / (LOADING_DURATION_MS / 50.0);
/// Pause between hitting 100% and starting the fade.
const FADE_DELAY: Duration = Duration::from_millis(200);
/// Fade transition length; the overlay leaves layout once it ends.
const HIDE_DELAY: Duration = Duration::from_millis(800);

/// Timer values are Copy, so phases are dispatched by value and the
/// successor phase is stored back after each step.
#[derive(Clone, Copy)]
enum Phase {
    Running { ticker: Interval },
    Completing { fade: Timeout },
    FadingOut { hide: Timeout },
    Hidden,
}

pub struct LoadingSequencer {
    screen: NodeId,
    bar: NodeId,
    label: NodeId,
    main_content: NodeId,
    progress: f32,
    phase: Phase,
}

impl LoadingSequencer {
    /// Resolve the overlay elements and start the progress ticker. When any
    /// of them is missing the whole animation is skipped and main content
    /// stays in its default visible state.
    pub fn new(doc: &Document, start: Duration) -> Option<Self> {
        let screen = resolve::by_id(doc, "loadingScreen");
        let bar = resolve::by_id(doc, "loadingProgress");
        let label = resolve::by_id(doc, "loadingPercentage");
        let main_content = resolve::by_id(doc, "mainContent");

        let (Some(screen), Some(bar), Some(label), Some(main_content)) =
            (screen, bar, label, main_content)
        else {
            warn!("loading screen elements missing, skipping loading animation");
            return None;
        };

        Some(Self {
            screen,
            bar,
            label,
            main_content,
            progress: 0.0,
            phase: Phase::Running {
                ticker: Interval::starting_at(start, UPDATE_PERIOD),
            },
        })
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self.phase, Phase::Hidden)
    }

    /// Advance to `now`, settling every elapsed transition. Delays chain off
    /// scheduled fire times, so a coarse tick lands on the same timeline as
    /// a fine one.
    pub fn update(&mut self, doc: &mut Document, now: Duration) {
        loop {
            let (next, advanced) = match self.phase {
                Phase::Running { mut ticker } => {
                    let mut completed_at = None;
                    while let Some(at) = ticker.fire(now) {
                        self.progress += PROGRESS_INCREMENT;
                        if self.progress >= 100.0 {
                            self.progress = 100.0;
                            self.write_progress(doc);
                            completed_at = Some(at);
                            break;
                        }
                        self.write_progress(doc);
                    }
                    match completed_at {
                        Some(at) => {
                            debug!("loading progress complete");
                            let fade = Timeout::at(at + FADE_DELAY);
                            (Phase::Completing { fade }, true)
                        }
                        None => (Phase::Running { ticker }, false),
                    }
                }
                Phase::Completing { mut fade } => match fade.fire(now) {
                    Some(at) => {
                        doc.add_class(self.screen, "fade-out");
                        doc.add_class(self.main_content, "loaded");
                        let hide = Timeout::at(at + HIDE_DELAY);
                        (Phase::FadingOut { hide }, true)
                    }
                    None => (Phase::Completing { fade }, false),
                },
                Phase::FadingOut { mut hide } => match hide.fire(now) {
                    Some(_) => {
                        doc.set_style(self.screen, "display", "none");
                        debug!("loading screen hidden");
                        (Phase::Hidden, true)
                    }
                    None => (Phase::FadingOut { hide }, false),
                },
                Phase::Hidden => (Phase::Hidden, false),
            };
            self.phase = next;
            if !advanced {
                break;
            }
        }
    }

    /// The clamped value renders as `100%`, so the bar never overshoots.
    fn write_progress(&self, doc: &mut Document) {
        doc.set_style(self.bar, "width", format!("{}%", self.progress));
        doc.set_text(self.label, format!("{}%", self.progress.round() as u32));
    }
}
