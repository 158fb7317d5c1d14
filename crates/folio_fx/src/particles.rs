//! Decorative particle emitter
//!
//! Fire-and-forget background particles: a 20-node staggered burst at
//! startup plus a steady producer every 200ms, each node carrying random
//! styling and a 12s self-removal deadline. There is no cap on live
//! particles beyond lifetime versus production rate (about 60 at steady
//! state).

use std::time::Duration;

use folio_core::dom::{Document, NodeId};
use folio_core::resolve;
use folio_core::rng::DeterministicRng;
use folio_core::time::{Interval, Timeout};
use tracing::warn;

const SIZE_CLASSES: [&str; 3] = ["small", "medium", "large"];
const COLOR_CLASSES: [&str; 2] = ["blue", "white"];

/// Spawn tuning. Defaults reproduce the page's shipped constants.
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    pub burst_count: usize,
    pub burst_stagger: Duration,
    pub spawn_period: Duration,
    pub lifetime: Duration,
    /// Animation duration range, seconds.
    pub duration_range: (f32, f32),
    /// Animation delay range, seconds.
    pub delay_range: (f32, f32),
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            burst_count: 20,
            burst_stagger: Duration::from_millis(100),
            spawn_period: Duration::from_millis(200),
            lifetime: Duration::from_millis(12_000),
            duration_range: (8.0, 18.0),
            delay_range: (0.0, 2.0),
        }
    }
}

struct LiveParticle {
    node: NodeId,
    expiry: Timeout,
}

pub struct ParticleEmitter {
    container: NodeId,
    config: EmitterConfig,
    producer: Interval,
    burst: Vec<Timeout>,
    live: Vec<LiveParticle>,
    spawned: usize,
    removed: usize,
}

impl ParticleEmitter {
    /// Resolve the container and schedule the burst plus the steady
    /// producer. A missing container skips the whole effect.
    pub fn new(doc: &Document, start: Duration, config: EmitterConfig) -> Option<Self> {
        let container = resolve::by_id(doc, "asciiBackground")?;
        let producer = Interval::starting_at(start, config.spawn_period);
        let burst = (0..config.burst_count)
            .map(|i| Timeout::at(start + config.burst_stagger * i as u32))
            .collect();
        Some(Self {
            container,
            config,
            producer,
            burst,
            live: Vec::new(),
            spawned: 0,
            removed: 0,
        })
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn spawned(&self) -> usize {
        self.spawned
    }

    pub fn removed(&self) -> usize {
        self.removed
    }

    pub fn update(&mut self, doc: &mut Document, rng: &mut DeterministicRng, now: Duration) {
        // Gather due spawns in deadline order. The producer was registered
        // before the burst timeouts, so it wins ties.
        let mut due: Vec<(Duration, u8)> = Vec::new();
        while let Some(at) = self.producer.fire(now) {
            due.push((at, 0));
        }
        for slot in &mut self.burst {
            if let Some(at) = slot.fire(now) {
                due.push((at, 1));
            }
        }
        due.sort_by_key(|&event| event);
        for (at, _) in due {
            self.spawn(doc, rng, at);
        }

        // Expire particles whose deadline passed. Removal tolerates nodes
        // someone else already detached.
        let mut index = 0;
        while index < self.live.len() {
            if self.live[index].expiry.fire(now).is_some() {
                let particle = self.live.swap_remove(index);
                if doc.remove(particle.node) {
                    self.removed += 1;
                }
            } else {
                index += 1;
            }
        }
    }

    fn spawn(&mut self, doc: &mut Document, rng: &mut DeterministicRng, at: Duration) {
        let node = doc.create_element("div");
        let size = *rng.pick(&SIZE_CLASSES);
        let color = *rng.pick(&COLOR_CLASSES);
        doc.add_class(node, "particle");
        doc.add_class(node, size);
        doc.add_class(node, color);
        doc.set_style(node, "left", format!("{}vw", rng.range_f32(0.0, 100.0)));
        let (lo, hi) = self.config.duration_range;
        doc.set_style(node, "animation-duration", format!("{}s", rng.range_f32(lo, hi)));
        let (lo, hi) = self.config.delay_range;
        doc.set_style(node, "animation-delay", format!("{}s", rng.range_f32(lo, hi)));

        if let Err(error) = doc.append_child(self.container, node) {
            warn!("particle container is gone, dropping spawn: {error}");
            doc.remove(node);
            return;
        }
        self.live.push(LiveParticle {
            node,
            expiry: Timeout::at(at + self.config.lifetime),
        });
        self.spawned += 1;
    }
}
