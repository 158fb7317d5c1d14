//! Input events
//!
//! The small set of user inputs the page reacts to. Events are plain data;
//! the runtime routes them to whichever behaviors care.

use crate::dom::NodeId;

/// Keys the page distinguishes. Everything else is ignored at dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Tab,
}

/// A single user input delivered to the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Viewport scrolled to a new vertical offset.
    Scroll { y: f32 },
    /// Pointer click landing on `target`.
    Click { target: NodeId },
    /// Key pressed anywhere on the page.
    KeyDown { key: Key },
    /// Viewport resized to a new width.
    Resize { width: f32 },
}
