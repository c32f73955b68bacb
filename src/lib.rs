//! Position-synchronization engine for scroll-snap carousels.
//!
//! Maps a logical "current slide" index onto a scrollable viewport and
//! keeps the two synchronized under three competing drivers: programmatic
//! navigation, autoplay, and direct user scroll/touch. The engine owns the
//! arbitration (eased animated scrolls, passive index inference, touch
//! cancellation, autoplay suspension); the embedder owns the real viewport
//! element, styling, and slide content.
//!
//! Typical embedding:
//!
//! ```
//! use scroll_carousel::{
//!     CarouselConfig, CarouselEngine, HeadlessViewport, InputEvent, SlideIndex,
//! };
//!
//! let viewport = HeadlessViewport::new(200.0, 150.0).with_slides(5, 100.0);
//! let mut engine = CarouselEngine::new(viewport, CarouselConfig::default(), 0.0);
//!
//! // Let the mount measurement settle, then navigate.
//! let mut now = 0.0;
//! while now < 2000.0 {
//!     now += engine.next_wake(now).max(1.0);
//!     if let Some(proposal) = engine.tick(now) {
//!         // Apply the proposal and echo it back, as the index owner.
//!         engine.set_current_slide(proposal.index(), now);
//!     }
//! }
//! engine.set_current_slide(SlideIndex::new(2), now);
//! # let _ = InputEvent::Scroll;
//! ```
//!
//! For a live embedding, [`runner::CarouselRunner`] runs the same loop on a
//! dedicated thread per carousel.

pub mod config;
pub mod engine;
pub mod logging;
pub mod model;
pub mod platform;
pub mod runner;

pub use config::{Align, CarouselConfig};
pub use engine::{CarouselEngine, DebugReport, SlideProposal};
pub use model::{SlideGeometry, SlideIndex, ViewMetrics};
pub use platform::{HeadlessViewport, InputEvent, Viewport};
pub use runner::CarouselRunner;

#[cfg(test)]
mod tests;
