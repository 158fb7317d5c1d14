//! Folio Core
//!
//! Contains the fundamental page-runtime systems:
//! - Transient document model (elements, classes, styles, geometry)
//! - Selector parsing and warn-and-skip element resolution
//! - Virtual clock and polled timer primitives
//! - Deterministic randomness, input events, viewport state

pub mod dom;
pub mod events;
pub mod resolve;
pub mod rng;
pub mod selector;
pub mod time;
pub mod viewport;

/// Runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
