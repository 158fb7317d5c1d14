//! Smooth scrolling
//!
//! When the platform scrolls natively the requested offset is applied in
//! one jump and the platform owns the easing. Otherwise a manual
//! animation interpolates the scroll position with the classic
//! ease-in-out-quadratic curve over a fixed 1s, clamped to land exactly
//! on the target.

use std::time::Duration;

const SCROLL_DURATION: Duration = Duration::from_millis(1000);

/// Quadratic ease-in-out: accelerate to the midpoint, decelerate after.
/// `t` elapsed, `b` start value, `c` total change, `d` duration.
pub fn ease_in_out_quad(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    t -= 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

#[derive(Debug, Clone, Copy)]
struct Animation {
    started: Duration,
    from: f32,
    target: f32,
}

pub struct SmoothScroller {
    native: bool,
    animation: Option<Animation>,
}

impl SmoothScroller {
    pub fn new(native: bool) -> Self {
        Self {
            native,
            animation: None,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Request a scroll to `target`. With native support the new position
    /// comes back immediately; otherwise an animation starts and positions
    /// flow from `update` each tick.
    pub fn scroll_to(&mut self, from: f32, target: f32, now: Duration) -> Option<f32> {
        if self.native {
            self.animation = None;
            return Some(target);
        }
        self.animation = Some(Animation {
            started: now,
            from,
            target,
        });
        None
    }

    /// Next interpolated position, or None while idle. The final frame is
    /// pinned to the exact target.
    pub fn update(&mut self, now: Duration) -> Option<f32> {
        let anim = self.animation?;
        let elapsed = now.saturating_sub(anim.started);
        if elapsed >= SCROLL_DURATION {
            self.animation = None;
            return Some(anim.target);
        }
        Some(ease_in_out_quad(
            elapsed.as_secs_f32() * 1000.0,
            anim.from,
            anim.target - anim.from,
            SCROLL_DURATION.as_secs_f32() * 1000.0,
        ))
    }
}
