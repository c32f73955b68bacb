//! Measured slide geometry and the view metrics derived from it.

use super::types::SlideIndex;

/// Sentinel slide width used before the first measurement (and for empty
/// carousels). Chosen so downstream division never hits zero; the engine
/// treats `slide_width == 1.0` as "geometry not trustworthy yet".
pub const DEGENERATE_SLIDE_WIDTH: f64 = 1.0;

/// Layout measurements for one carousel, refreshed after each settle delay.
///
/// # Invariant
/// After a real measurement, `offsets.len() == slide_count`. Before the
/// first measurement the geometry is degenerate-but-safe: `viewport_width`
/// and `slide_width` are 1.0 and `offsets` is empty, so no derived quantity
/// divides by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideGeometry {
    /// Visible width of the scroll viewport.
    viewport_width: f64,
    /// Total content width divided by slide count.
    slide_width: f64,
    /// Left edge of each slide, relative to the viewport's own origin.
    offsets: Vec<f64>,
    /// Number of slides currently in the track.
    slide_count: usize,
}

impl Default for SlideGeometry {
    fn default() -> Self {
        Self {
            viewport_width: 1.0,
            slide_width: DEGENERATE_SLIDE_WIDTH,
            offsets: Vec::new(),
            slide_count: 0,
        }
    }
}

impl SlideGeometry {
    /// Build geometry from raw viewport reads.
    ///
    /// Zero slides yields the degenerate slide width instead of dividing by
    /// zero; the offsets are kept as measured (empty in that case).
    pub fn from_measurement(viewport_width: f64, scroll_width: f64, offsets: Vec<f64>) -> Self {
        let slide_count = offsets.len();
        let slide_width = if slide_count == 0 {
            DEGENERATE_SLIDE_WIDTH
        } else {
            scroll_width / slide_count as f64
        };
        Self {
            viewport_width,
            slide_width,
            offsets,
            slide_count,
        }
    }

    /// Visible viewport width.
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Width of a single slide.
    pub fn slide_width(&self) -> f64 {
        self.slide_width
    }

    /// Measured per-slide left offsets.
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Whether this geometry is still the pre-measurement placeholder.
    ///
    /// Exact float comparison is intentional: the sentinel is assigned, not
    /// computed, so it round-trips exactly.
    pub fn is_degenerate(&self) -> bool {
        self.slide_width == DEGENERATE_SLIDE_WIDTH
    }

    /// Scroll offset to animate toward for `index`.
    ///
    /// Prefers the measured offset; falls back to `index * slide_width` for
    /// slides whose precise offset is missing (stale geometry between a
    /// slide-count change and the next settled measurement).
    pub fn target_offset(&self, index: SlideIndex) -> f64 {
        usize::try_from(index.get())
            .ok()
            .and_then(|i| self.offsets.get(i).copied())
            .unwrap_or(index.get() as f64 * self.slide_width)
    }

    /// Infer the slide index nearest to a scroll position.
    pub fn infer_index(&self, scroll_left: f64) -> SlideIndex {
        SlideIndex::new((scroll_left / self.slide_width).round() as i64)
    }
}

/// Quantities derived from [`SlideGeometry`]; recomputed whenever it changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewMetrics {
    /// How many whole slides fit in the viewport at once.
    slides_per_view: usize,
    /// Count of distinct valid scroll-snap positions. Can be <= 0 while the
    /// carousel is unmeasured or has fewer slides than fit in one view.
    number_of_views: i64,
    /// Trailing pad so the last view fills the viewport exactly.
    extra_margin: f64,
}

impl ViewMetrics {
    /// Derive metrics from geometry (pure).
    pub fn from_geometry(geometry: &SlideGeometry) -> Self {
        let slides_per_view = (geometry.viewport_width() / geometry.slide_width())
            .round()
            .max(0.0) as usize;
        let number_of_views = geometry.slide_count() as i64 - slides_per_view as i64 + 1;
        let extra_margin = (geometry.viewport_width()
            - geometry.slide_width() * slides_per_view as f64)
            .max(0.0);
        Self {
            slides_per_view,
            number_of_views,
            extra_margin,
        }
    }

    /// Whole slides visible per view.
    pub fn slides_per_view(&self) -> usize {
        self.slides_per_view
    }

    /// Distinct valid scroll positions (may be <= 0 before measurement).
    pub fn number_of_views(&self) -> i64 {
        self.number_of_views
    }

    /// Trailing margin in viewport units.
    pub fn extra_margin(&self) -> f64 {
        self.extra_margin
    }
}

impl Default for ViewMetrics {
    fn default() -> Self {
        Self::from_geometry(&SlideGeometry::default())
    }
}
