//! Animated scroll driver: a clamped cosine ease toward a target offset.

use std::f64::consts::PI;

/// Fixed tween duration in milliseconds.
pub const ANIMATION_DURATION_MS: f64 = 450.0;

/// Ease-in-out cosine curve: `-(cos(pi * t) - 1) / 2`.
///
/// Boundary conditions: `ease(0) == 0`, `ease(1) == 1`. Callers clamp `t`
/// at 1 by ending the animation, so the curve itself never needs clamping.
pub fn ease(t: f64) -> f64 {
    -((PI * t).cos() - 1.0) / 2.0
}

/// Start-of-tween capture: where the viewport was and when, recorded lazily
/// on the first frame after a target is set.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AnimationStart {
    offset: f64,
    time: f64,
}

/// What the driver wants done with this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    /// Write this scroll position to the viewport.
    Write(f64),
    /// Past the end of the curve: clear the animation and skip the write.
    Done,
}

/// One in-flight scroll tween.
///
/// The interpolation is always computed from the *original* start offset,
/// never incrementally, so the written position can neither overshoot nor
/// drift past the target: at `t <= 1` the write is a convex blend of start
/// and target, and at `t > 1` the tween reports [`Frame::Done`] without
/// writing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    target: f64,
    start: Option<AnimationStart>,
}

impl ScrollAnimation {
    /// Begin a tween toward `target`. Timing starts on the first
    /// [`frame`](Self::frame) call, not here.
    pub fn new(target: f64) -> Self {
        Self {
            target,
            start: None,
        }
    }

    /// The offset this tween is heading for.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Advance by one frame at time `now`, given the viewport's current
    /// scroll position (used only to capture the start on the first frame).
    pub fn frame(&mut self, now: f64, current_scroll: f64) -> Frame {
        let start = self.start.get_or_insert(AnimationStart {
            offset: current_scroll,
            time: now,
        });
        let t = (now - start.time) / ANIMATION_DURATION_MS;
        if t > 1.0 {
            Frame::Done
        } else {
            Frame::Write(start.offset + (self.target - start.offset) * ease(t))
        }
    }
}
