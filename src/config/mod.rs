//! Caller-facing configuration.

use serde::{Deserialize, Serialize};

/// Scroll-snap alignment hint, forwarded to the viewport verbatim.
///
/// The engine never interprets this numerically; it only decides whether
/// snapping is on or off. How `center`/`end` shift the snap point is the
/// viewport's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Snap slides to the leading edge.
    #[default]
    Start,
    /// Snap slides to the center.
    Center,
    /// Snap slides to the trailing edge.
    End,
}

/// Carousel options. All fields have defaults matching an autoplay-less,
/// snap-enabled carousel starting at slide 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Initial logical slide index (caller-owned thereafter).
    pub current_slide: i64,
    /// Autoplay period in milliseconds; `0.0` disables autoplay.
    pub autoplay_interval: f64,
    /// Quiet period after the last touch before autoplay resumes, in
    /// milliseconds.
    pub autoplay_wait: f64,
    /// Snap alignment hint forwarded to the viewport.
    pub align: Align,
    /// Master switch for snap-to-slide scrolling.
    pub snap: bool,
    /// When set, the engine logs a full state report after every
    /// measurement.
    pub debug: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            current_slide: 0,
            autoplay_interval: 0.0,
            autoplay_wait: 10_000.0,
            align: Align::Start,
            snap: true,
            debug: false,
        }
    }
}
