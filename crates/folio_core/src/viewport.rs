//! Viewport state
//!
//! Scroll offset and window dimensions, plus the visibility band the
//! intersection machinery tests element boxes against.

use serde::{Deserialize, Serialize};

/// Initial viewport dimensions and scroll behavior, loaded from config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
    /// When set, anchor jumps land instantly instead of animating.
    pub smooth_scroll_native: bool,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            smooth_scroll_native: false,
        }
    }
}

/// Live viewport state for one session.
#[derive(Debug, Clone)]
pub struct Viewport {
    width: f32,
    height: f32,
    scroll_y: f32,
}

impl Viewport {
    pub fn new(config: &ViewportConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            scroll_y: 0.0,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Scrolling above the document top clamps to zero.
    pub fn set_scroll_y(&mut self, y: f32) {
        self.scroll_y = y.max(0.0);
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Document-space band considered visible, widened (or narrowed, for a
    /// negative margin) at the bottom edge.
    pub fn visible_band(&self, bottom_margin: f32) -> (f32, f32) {
        (self.scroll_y, self.scroll_y + self.height + bottom_margin)
    }
}
