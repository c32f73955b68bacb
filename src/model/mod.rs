//! Pure data layer: index newtypes and measured geometry.
//!
//! Everything here is side-effect free and testable without a viewport.

pub mod geometry;
pub mod types;

pub use geometry::{SlideGeometry, ViewMetrics};
pub use types::SlideIndex;
