//! Folio Metrics - Session statistics for the page runtime
//!
//! Provides zero-cost instrumentation that completely vanishes in
//! production builds via feature flags.
//!
//! # Feature Flags
//!
//! - `metrics` - Enable statistics collection (default: disabled)
//!
//! # Usage
//!
//! ```ignore
//! use folio_metrics::{Counter, TickTimer};
//!
//! let mut timer = TickTimer::new(100); // Track last 100 ticks
//! let mut counter = Counter::new();
//! timer.begin();
//! // ... advance the page ...
//! timer.end();
//! counter.increment("particles.spawned", 1);
//! println!("tick: {:.3}ms", timer.tick_time_ms());
//! ```
//!
//! In production builds (without the `metrics` feature), all
//! instrumentation is compiled out to zero overhead.

#[cfg(feature = "metrics")]
mod tick_timer;
#[cfg(feature = "metrics")]
mod ring_buffer;
#[cfg(feature = "metrics")]
mod counter;

#[cfg(feature = "metrics")]
pub use tick_timer::TickTimer;
#[cfg(feature = "metrics")]
pub use ring_buffer::RingBuffer;
#[cfg(feature = "metrics")]
pub use counter::Counter;

// ============================================================================
// Macros for conditional compilation
// ============================================================================

/// Execute code only when metrics are enabled
#[macro_export]
macro_rules! metrics {
    ($($tt:tt)*) => {
        #[cfg(feature = "metrics")]
        {
            $($tt)*
        }
    };
}

// ============================================================================
// No-op stubs when metrics disabled
// ============================================================================

#[cfg(not(feature = "metrics"))]
pub struct TickTimer;

#[cfg(not(feature = "metrics"))]
impl TickTimer {
    pub fn new(_capacity: usize) -> Self { Self }
    pub fn begin(&mut self) {}
    pub fn end(&mut self) {}
    pub fn tick_time_ms(&self) -> f64 { 0.0 }
    pub fn tick_range_ms(&self) -> (f64, f64) { (0.0, 0.0) }
}

#[cfg(not(feature = "metrics"))]
pub struct RingBuffer<T>(std::marker::PhantomData<T>);

#[cfg(not(feature = "metrics"))]
impl<T> RingBuffer<T> {
    pub fn new(_capacity: usize) -> Self { Self(std::marker::PhantomData) }
    pub fn push(&mut self, _value: T) {}
    pub fn average(&self) -> T where T: Default { T::default() }
}

#[cfg(not(feature = "metrics"))]
pub struct Counter;

#[cfg(not(feature = "metrics"))]
impl Counter {
    pub fn new() -> Self { Self }
    pub fn increment(&mut self, _name: &str, _value: usize) {}
    pub fn set(&mut self, _name: &str, _value: usize) {}
    pub fn get(&self, _name: &str) -> usize { 0 }
    pub fn reset_all(&mut self) {}
    pub fn iter(&self) -> std::iter::Empty<(&String, &usize)> { std::iter::empty() }
}
