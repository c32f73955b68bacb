//! The position-synchronization engine.
//!
//! Binds a caller-owned logical slide index to a physical scroll offset
//! under three competing drivers: programmatic navigation, autoplay, and
//! live user touch/scroll. Conceptually a state machine over four states:
//!
//! - **Idle**: internal == external, no animation in flight.
//! - **Normalizing**: the caller supplied an out-of-range index; the engine
//!   has proposed the corrected value and waits for the caller to echo it
//!   back before anything animates.
//! - **Animating**: a target offset is set and the scroll driver owns the
//!   viewport; passive inference is suppressed.
//! - **PassiveTracking**: no caller-driven change pending; the logical
//!   index is inferred from observed scroll position alone.
//!
//! All entry points take an explicit monotonic `now` in milliseconds, which
//! is what makes the whole engine deterministic under test. The engine
//! never owns a thread or a timer; it exposes deadlines via
//! [`CarouselEngine::next_wake`] and expects a driver (see
//! [`crate::runner`]) to call [`CarouselEngine::tick`] when they come due.

pub mod animation;
pub mod autoplay;
pub mod interaction;
pub mod measure;

pub use animation::{ANIMATION_DURATION_MS, ScrollAnimation};
pub use autoplay::Autoplay;
pub use measure::{Measurer, SETTLE_DELAY_MS};

use crate::config::CarouselConfig;
use crate::model::{SlideGeometry, SlideIndex, ViewMetrics};
use crate::platform::{InputEvent, Viewport};
use animation::Frame;
use interaction::TouchSignal;
use serde::Serialize;
use tracing::{debug, trace};

/// Delay between disabling snap and arming the animation target, letting
/// the snap-mode change take effect before the engine starts writing
/// scroll positions.
pub const ANIMATION_ARM_DELAY_MS: f64 = 100.0;

/// Delay between animation completion and re-enabling snap, so the snap
/// engine does not fight the final programmatic write.
pub const SNAP_RESTORE_DELAY_MS: f64 = 100.0;

/// Minimum spacing between passive index inferences, to avoid thrashing
/// the caller during continuous scroll.
pub const INFERENCE_DEBOUNCE_MS: f64 = 100.0;

/// Wake period while nothing is animating and no deadline is pending.
pub const IDLE_POLL_MS: f64 = 300.0;

/// Wake period while an animation is in flight (roughly one display frame).
pub const FRAME_INTERVAL_MS: f64 = 16.0;

/// An index the engine proposes to the caller.
///
/// The caller owns the external index; the engine only ever *proposes*
/// (normalization corrections, autoplay advances, passive inferences). The
/// caller applies the value and echoes it back through
/// [`CarouselEngine::set_current_slide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideProposal(pub SlideIndex);

impl SlideProposal {
    /// The proposed index.
    pub fn index(&self) -> SlideIndex {
        self.0
    }
}

/// Engine state report emitted when `config.debug` is set, and available
/// on demand for embedders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugReport {
    /// Visible viewport width.
    pub viewport_width: f64,
    /// Measured width of one slide.
    pub slide_width: f64,
    /// Per-slide left offsets.
    pub offsets: Vec<f64>,
    /// Number of slides.
    pub slide_count: usize,
    /// Whole slides per view.
    pub slides_per_view: usize,
    /// Distinct valid scroll positions.
    pub number_of_views: i64,
    /// Trailing margin padding the last view.
    pub extra_margin: f64,
}

/// The synchronization engine for one carousel.
///
/// Owns every timer handle and all animation state for its instance; no
/// shared or global state exists across carousels.
#[derive(Debug)]
pub struct CarouselEngine<V: Viewport> {
    viewport: V,
    config: CarouselConfig,
    geometry: SlideGeometry,
    metrics: ViewMetrics,
    /// Mirror of the caller-owned index, updated only via
    /// `set_current_slide`.
    external: SlideIndex,
    /// Last index the engine itself applied (by animating or inferring).
    internal: SlideIndex,
    animation: Option<ScrollAnimation>,
    /// Pending animation arm: (deadline, index to animate to).
    arm_at: Option<(f64, SlideIndex)>,
    snap_restore_at: Option<f64>,
    /// Engine-side snap gate; effective snap is `config.snap && snap_active`.
    snap_active: bool,
    autoplay: Autoplay,
    measurer: Measurer,
    last_inference_at: Option<f64>,
}

impl<V: Viewport> CarouselEngine<V> {
    /// Mount the engine on a viewport.
    ///
    /// Seeds the index state from `config.current_slide`, applies the
    /// initial snap mode, arms autoplay, and schedules the first (settled)
    /// measurement.
    pub fn new(viewport: V, config: CarouselConfig, now: f64) -> Self {
        let seed = SlideIndex::new(config.current_slide);
        let autoplay = Autoplay::new(config.autoplay_interval, config.autoplay_wait, now);
        let mut measurer = Measurer::default();
        measurer.request(now);
        let mut engine = Self {
            viewport,
            config,
            geometry: SlideGeometry::default(),
            metrics: ViewMetrics::default(),
            external: seed,
            internal: seed,
            animation: None,
            arm_at: None,
            snap_restore_at: None,
            snap_active: true,
            autoplay,
            measurer,
            last_inference_at: None,
        };
        engine.apply_snap();
        engine
    }

    /// The caller's index changed (or the caller echoed a proposal back).
    ///
    /// Out-of-range values are normalized by wraparound and re-proposed;
    /// nothing animates until the caller echoes an in-range value. An
    /// in-range value equal to `internal` is a no-op (idempotence: the same
    /// index twice triggers at most one animation). Otherwise snapping is
    /// released and an animation toward the index is armed.
    pub fn set_current_slide(&mut self, index: SlideIndex, now: f64) -> Option<SlideProposal> {
        self.external = index;

        let views = self.metrics.number_of_views();
        if views > 0 {
            let validated = index.normalize(views);
            if validated != index {
                trace!(
                    raw = index.get(),
                    corrected = validated.get(),
                    views,
                    "normalizing out-of-range index"
                );
                return Some(SlideProposal(validated));
            }
        }

        if self.internal == index {
            return None;
        }

        trace!(from = self.internal.get(), to = index.get(), "arming slide animation");
        self.snap_active = false;
        self.apply_snap();
        // A snap restore left over from the previous tween must not fire
        // mid-animation.
        self.snap_restore_at = None;
        self.arm_at = Some((now + ANIMATION_ARM_DELAY_MS, index));
        self.internal = index;
        None
    }

    /// Feed a viewport event into the engine.
    pub fn handle_event(&mut self, event: InputEvent, now: f64) -> Option<SlideProposal> {
        match event {
            InputEvent::Scroll => self.on_scroll(now),
            InputEvent::Resize | InputEvent::SlidesChanged => {
                self.measurer.request(now);
                None
            }
            _ => {
                match interaction::classify(event) {
                    Some(TouchSignal::Contact) => self.on_touch_contact(),
                    Some(TouchSignal::Release) => self.autoplay.request_resume(now),
                    None => {}
                }
                None
            }
        }
    }

    /// Advance timers and the animation by one step.
    ///
    /// Fires any due deadline (measurement, animation arm, snap restore,
    /// autoplay resume/tick), then runs one animation frame. Returns a
    /// proposal if a due autoplay tick or a post-measurement
    /// renormalization produced one.
    pub fn tick(&mut self, now: f64) -> Option<SlideProposal> {
        let mut proposal = None;

        if self.measurer.poll(now) {
            proposal = self.run_measure();
        }

        if let Some((due, index)) = self.arm_at {
            if now >= due {
                self.arm_at = None;
                let target = self.geometry.target_offset(index);
                trace!(index = index.get(), target, "animation target set");
                self.animation = Some(ScrollAnimation::new(target));
            }
        }

        if let Some(due) = self.snap_restore_at {
            if now >= due {
                self.snap_restore_at = None;
                self.snap_active = true;
                self.apply_snap();
            }
        }

        if self.autoplay.poll(now) {
            // Pre-normalization advance; the reconciler wraps it when the
            // caller echoes it back.
            proposal = proposal.or(Some(SlideProposal(self.external.next())));
        }

        if let Some(anim) = &mut self.animation {
            match anim.frame(now, self.viewport.scroll_left()) {
                Frame::Write(offset) => self.viewport.set_scroll_left(offset),
                Frame::Done => {
                    trace!("animation complete");
                    self.animation = None;
                    self.snap_restore_at = Some(now + SNAP_RESTORE_DELAY_MS);
                }
            }
        }

        proposal
    }

    /// How long the driver should sleep before the next `tick`, in
    /// milliseconds: one frame while animating, otherwise until the nearest
    /// deadline, capped at the idle poll period.
    pub fn next_wake(&self, now: f64) -> f64 {
        if self.animation.is_some() {
            return FRAME_INTERVAL_MS;
        }
        let deadlines = [
            self.arm_at.map(|(due, _)| due),
            self.snap_restore_at,
            self.measurer.deadline(),
            self.autoplay.next_deadline(),
        ];
        match deadlines.into_iter().flatten().reduce(f64::min) {
            Some(deadline) => (deadline - now).clamp(0.0, IDLE_POLL_MS),
            None => IDLE_POLL_MS,
        }
    }

    /// Current engine state snapshot for debugging.
    pub fn debug_report(&self) -> DebugReport {
        DebugReport {
            viewport_width: self.geometry.viewport_width(),
            slide_width: self.geometry.slide_width(),
            offsets: self.geometry.offsets().to_vec(),
            slide_count: self.geometry.slide_count(),
            slides_per_view: self.metrics.slides_per_view(),
            number_of_views: self.metrics.number_of_views(),
            extra_margin: self.metrics.extra_margin(),
        }
    }

    /// Measured geometry.
    pub fn geometry(&self) -> &SlideGeometry {
        &self.geometry
    }

    /// Metrics derived from the geometry.
    pub fn metrics(&self) -> ViewMetrics {
        self.metrics
    }

    /// Last index the engine applied.
    pub fn internal_index(&self) -> SlideIndex {
        self.internal
    }

    /// Whether a scroll animation currently owns the viewport.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether an animation is armed but not yet started.
    pub fn has_pending_animation(&self) -> bool {
        self.arm_at.is_some()
    }

    /// Whether the engine-side snap gate is open.
    pub fn snap_active(&self) -> bool {
        self.snap_active
    }

    /// Whether autoplay is currently ticking.
    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay.enabled()
    }

    /// The bound viewport.
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Mutable access to the bound viewport (embedders simulating layout).
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    fn apply_snap(&mut self) {
        let snap = (self.config.snap && self.snap_active).then_some(self.config.align);
        self.viewport.set_snap(snap);
    }

    /// Passive tracking: infer the index from an observed scroll position.
    ///
    /// Only runs when geometry is trustworthy, no animation owns the
    /// viewport, and the previous inference is at least the debounce
    /// interval old. This is the only path by which user scrolling updates
    /// the logical index.
    fn on_scroll(&mut self, now: f64) -> Option<SlideProposal> {
        if self.geometry.is_degenerate() {
            return None;
        }
        if self.animation.is_some() {
            return None;
        }
        if let Some(last) = self.last_inference_at {
            if now - last < INFERENCE_DEBOUNCE_MS {
                return None;
            }
        }
        self.last_inference_at = Some(now);

        let inferred = self.geometry.infer_index(self.viewport.scroll_left());
        trace!(index = inferred.get(), "inferred index from scroll position");
        self.internal = inferred;
        Some(SlideProposal(inferred))
    }

    /// Touch contact: abrupt handoff to the user. Any in-flight or armed
    /// animation dies mid-curve with no rollback, snapping is restored, and
    /// autoplay is suspended.
    fn on_touch_contact(&mut self) {
        if self.animation.is_some() || self.arm_at.is_some() {
            trace!("touch cancelled animation");
            self.animation = None;
            self.arm_at = None;
            self.snap_restore_at = None;
            self.snap_active = true;
            self.apply_snap();
        }
        self.autoplay.suspend();
    }

    /// Run a due measurement and apply its side effects.
    ///
    /// Fresh offsets change the meaning of any in-flight target, so the
    /// animation is invalidated. A pending external index is renormalized
    /// against the new view count, which may emit a correction proposal.
    fn run_measure(&mut self) -> Option<SlideProposal> {
        self.geometry = measure::read_geometry(&self.viewport);
        self.metrics = ViewMetrics::from_geometry(&self.geometry);

        let preferred = self.viewport.client_height() - 10.0;
        self.viewport.set_preferred_height(preferred);

        if self.animation.take().is_some() {
            trace!("measurement invalidated in-flight animation target");
            self.snap_active = true;
            self.apply_snap();
        }

        // An armed-but-unstarted animation survives: its target is computed
        // from the fresh geometry when the arm deadline fires. Only the
        // index needs rewrapping against the new view count.
        let views = self.metrics.number_of_views();
        if views > 0 {
            if let Some((due, index)) = self.arm_at {
                let wrapped = index.normalize(views);
                if wrapped != index {
                    self.arm_at = Some((due, wrapped));
                    self.internal = wrapped;
                }
            }
        }

        debug!(
            slide_count = self.geometry.slide_count(),
            slide_width = self.geometry.slide_width(),
            views = views,
            "geometry measured"
        );
        if self.config.debug {
            if let Ok(json) = serde_json::to_string(&self.debug_report()) {
                debug!(report = %json, "carousel state");
            }
        }

        // The external index may have fallen out of range under the new
        // view count; propose the corrected value.
        if views > 0 {
            let validated = self.external.normalize(views);
            if validated != self.external {
                return Some(SlideProposal(validated));
            }
        }
        None
    }
}
