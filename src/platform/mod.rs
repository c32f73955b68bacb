//! Platform seam: the abstract scrollable viewport the engine drives.
//!
//! The engine never touches a real DOM or window system. It talks to a
//! [`Viewport`] and receives [`InputEvent`]s from whoever owns the real
//! element; [`HeadlessViewport`] is the in-memory implementation used by
//! tests and embedders that simulate layout themselves.

pub mod headless;

pub use headless::HeadlessViewport;

use crate::config::Align;

/// The scrollable element a carousel is bound to.
///
/// Mirrors the measured surface of a horizontal scroll container: width
/// reads, a writable scroll position, per-slide offsets, and the two style
/// knobs the engine owns (snap mode and preferred height).
pub trait Viewport {
    /// Visible width of the viewport.
    fn client_width(&self) -> f64;

    /// Visible height of the viewport.
    fn client_height(&self) -> f64;

    /// Total scrollable content width.
    fn scroll_width(&self) -> f64;

    /// Current horizontal scroll position.
    fn scroll_left(&self) -> f64;

    /// Set the horizontal scroll position.
    fn set_scroll_left(&mut self, offset: f64);

    /// Left edge of each slide relative to the viewport's own origin,
    /// in track order.
    fn slide_offsets(&self) -> Vec<f64>;

    /// Enable snap-to-slide scrolling with the given alignment, or disable
    /// it entirely (`None`). The engine toggles this around animations.
    fn set_snap(&mut self, snap: Option<Align>);

    /// Report the height the carousel would like its container to adopt.
    fn set_preferred_height(&mut self, height: f64);
}

/// Input observed on the viewport, forwarded verbatim to the engine.
///
/// Touch-start and touch-move are distinct events but identical signals to
/// the engine (any touch presence cancels animation and suspends autoplay).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The viewport scrolled (user- or engine-driven).
    Scroll,
    /// A touch gesture began.
    TouchStart,
    /// A touch gesture moved.
    TouchMove,
    /// A touch gesture ended normally.
    TouchEnd,
    /// A touch gesture was cancelled by the platform.
    TouchCancel,
    /// The viewport was resized; geometry must be re-measured.
    Resize,
    /// The slide set changed; geometry must be re-measured.
    SlidesChanged,
}
