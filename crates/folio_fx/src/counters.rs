//! Stat counter animation
//!
//! Counts each `.stat-number` element up from 0 to its `data-target` over
//! 2s in 100 steps, starting the first time the element is half visible.
//! Each target animates exactly once. Accumulation runs in f64, truncated
//! to an integer for display, with the final step forced to the exact
//! target so rounding drift never shows.

use std::time::Duration;

use folio_core::dom::{Document, NodeId};
use folio_core::resolve;
use folio_core::time::Interval;
use folio_core::viewport::Viewport;
use tracing::warn;

use crate::observer::IntersectionObserver;

const COUNTER_SELECTOR: &str = ".stat-number";
const COUNTER_THRESHOLD: f32 = 0.5;
const COUNTER_STEPS: f64 = 100.0;
/// 2000ms total over 100 steps.
const STEP_PERIOD: Duration = Duration::from_millis(20);

struct CounterRun {
    node: NodeId,
    target: f64,
    current: f64,
    increment: f64,
    ticker: Interval,
}

pub struct CounterAnimator {
    observer: IntersectionObserver,
    runs: Vec<CounterRun>,
}

impl CounterAnimator {
    pub fn new(doc: &Document) -> Self {
        let mut observer = IntersectionObserver::new(COUNTER_THRESHOLD, 0.0, true);
        for node in resolve::all_matches(doc, COUNTER_SELECTOR) {
            observer.observe(node);
        }
        Self {
            observer,
            runs: Vec::new(),
        }
    }

    pub fn runs_in_flight(&self) -> usize {
        self.runs.len()
    }

    pub fn update(&mut self, doc: &mut Document, viewport: &Viewport, now: Duration) {
        for node in self.observer.poll(doc, viewport) {
            let Some(raw) = doc.attr(node, "data-target") else {
                warn!("stat counter without data-target, skipping");
                continue;
            };
            let target = match raw.parse::<i64>() {
                Ok(value) => value as f64,
                Err(_) => {
                    warn!("stat counter target '{raw}' is not an integer, skipping");
                    continue;
                }
            };
            self.runs.push(CounterRun {
                node,
                target,
                current: 0.0,
                increment: target / COUNTER_STEPS,
                ticker: Interval::starting_at(now, STEP_PERIOD),
            });
        }

        let mut index = 0;
        while index < self.runs.len() {
            let run = &mut self.runs[index];
            let mut finished = false;
            while run.ticker.fire(now).is_some() {
                run.current += run.increment;
                if run.current >= run.target {
                    run.current = run.target;
                    finished = true;
                }
                doc.set_text(run.node, format!("{}", run.current.floor() as i64));
                if finished {
                    break;
                }
            }
            if finished {
                self.runs.swap_remove(index);
            } else {
                index += 1;
            }
        }
    }
}
