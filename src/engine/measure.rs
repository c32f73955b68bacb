//! Layout measurer: debounced geometry reads behind a settle delay.

use crate::model::SlideGeometry;
use crate::platform::Viewport;

/// How long to let layout settle before trusting fresh measurements.
///
/// Premature reads are a known-acceptable risk mitigated by this delay, not
/// eliminated; a wrong read self-corrects on the next measurement.
pub const SETTLE_DELAY_MS: f64 = 1000.0;

/// Debounce state for pending measurements.
///
/// A single outstanding deadline: each `request` replaces the previous one,
/// so a burst of resize events yields one read after the last settle delay.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measurer {
    due_at: Option<f64>,
}

impl Measurer {
    /// Schedule a measurement one settle delay from `now`, replacing any
    /// pending one.
    pub fn request(&mut self, now: f64) {
        self.due_at = Some(now + SETTLE_DELAY_MS);
    }

    /// Returns `true` once when the pending measurement comes due.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.due_at {
            Some(due) if now >= due => {
                self.due_at = None;
                true
            }
            _ => false,
        }
    }

    /// The pending deadline, for the driver's wake computation.
    pub fn deadline(&self) -> Option<f64> {
        self.due_at
    }
}

/// Read geometry off the viewport. Pure read; the engine applies the side
/// effects (metric recompute, target invalidation, height report).
pub fn read_geometry<V: Viewport>(viewport: &V) -> SlideGeometry {
    SlideGeometry::from_measurement(
        viewport.client_width(),
        viewport.scroll_width(),
        viewport.slide_offsets(),
    )
}
