//! Folio FX
//!
//! Timed and visibility-triggered page effects:
//! - Loading screen sequencer
//! - Decorative particle emitter
//! - Polled intersection observation
//! - Reveal classes, stat counters, skill bars
//! - Typed-text hero effect

pub mod counters;
pub mod loading;
pub mod observer;
pub mod particles;
pub mod reveal;
pub mod skill_bars;
pub mod typing;

pub use counters::CounterAnimator;
pub use loading::LoadingSequencer;
pub use observer::IntersectionObserver;
pub use particles::{EmitterConfig, ParticleEmitter};
pub use reveal::RevealAnimator;
pub use skill_bars::SkillBarAnimator;
pub use typing::TypingEffect;
