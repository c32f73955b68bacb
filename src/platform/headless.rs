//! In-memory viewport for tests, benches, and headless embedders.

use super::Viewport;
use crate::config::Align;

/// A [`Viewport`] backed by plain fields instead of a real element.
///
/// Plays the role a test backend plays for a terminal UI: the engine drives
/// it exactly as it would a live viewport, and tests read back what was
/// written. Slides are laid out uniformly from `with_slides`; irregular
/// layouts can be injected with `set_slide_offsets`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessViewport {
    width: f64,
    height: f64,
    scroll_width: f64,
    scroll_left: f64,
    offsets: Vec<f64>,
    snap: Option<Align>,
    preferred_height: Option<f64>,
    scroll_writes: usize,
}

impl HeadlessViewport {
    /// Create an empty viewport of the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_width: 0.0,
            scroll_left: 0.0,
            offsets: Vec::new(),
            snap: None,
            preferred_height: None,
            scroll_writes: 0,
        }
    }

    /// Lay out `count` uniform slides of `slide_width` each.
    pub fn with_slides(mut self, count: usize, slide_width: f64) -> Self {
        self.offsets = (0..count).map(|i| i as f64 * slide_width).collect();
        self.scroll_width = slide_width * count as f64;
        self
    }

    /// Replace the slide layout with explicit offsets and content width.
    pub fn set_slide_offsets(&mut self, offsets: Vec<f64>, scroll_width: f64) {
        self.offsets = offsets;
        self.scroll_width = scroll_width;
    }

    /// Resize the viewport (the embedder still has to send
    /// [`super::InputEvent::Resize`]).
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Snap mode last written by the engine.
    pub fn snap(&self) -> Option<Align> {
        self.snap
    }

    /// Preferred height last reported by the engine, if any.
    pub fn preferred_height(&self) -> Option<f64> {
        self.preferred_height
    }

    /// How many times the engine has written the scroll position.
    pub fn scroll_writes(&self) -> usize {
        self.scroll_writes
    }
}

impl Viewport for HeadlessViewport {
    fn client_width(&self) -> f64 {
        self.width
    }

    fn client_height(&self) -> f64 {
        self.height
    }

    fn scroll_width(&self) -> f64 {
        self.scroll_width
    }

    fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    fn set_scroll_left(&mut self, offset: f64) {
        self.scroll_left = offset;
        self.scroll_writes += 1;
    }

    fn slide_offsets(&self) -> Vec<f64> {
        self.offsets.clone()
    }

    fn set_snap(&mut self, snap: Option<Align>) {
        self.snap = snap;
    }

    fn set_preferred_height(&mut self, height: f64) {
        self.preferred_height = Some(height);
    }
}
