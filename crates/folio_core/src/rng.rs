//! Deterministic randomness
//!
//! Seeded xorshift64* generator. Particle styling is the only random
//! consumer, and routing it through a seeded generator means a session
//! replays bit-identically, the same property the fixed-step clock gives
//! the timers. Good enough statistically for decoration; not for anything
//! security-shaped.

/// Deterministic pseudo-random number generator (xorshift64* variant).
#[derive(Debug, Clone)]
pub struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    /// A zero seed would lock the generator at zero, so it is remapped.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits give a full-precision f32 mantissa.
        (self.next_u64() >> 40) as f32 / (1u32 << 24) as f32
    }

    /// Uniform in `[low, high)`.
    pub fn range_f32(&mut self, low: f32, high: f32) -> f32 {
        low + (high - low) * self.next_f32()
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        debug_assert!(!items.is_empty());
        let index = (self.next_u64() % items.len() as u64) as usize;
        &items[index]
    }
}
