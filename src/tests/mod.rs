//! Whitebox scenario and property tests for the synchronization engine.

mod autoplay_scenarios;

use crate::config::CarouselConfig;
use crate::engine::CarouselEngine;
use crate::platform::HeadlessViewport;

/// Five uniform slides of width 100 in a 200-wide viewport:
/// `slides_per_view = 2`, `number_of_views = 4`.
pub(crate) fn five_slide_viewport() -> HeadlessViewport {
    HeadlessViewport::new(200.0, 150.0).with_slides(5, 100.0)
}

/// Mount an engine at `t = 0` and advance past the settle delay so the
/// first measurement has landed. Returns the engine and the current time.
pub(crate) fn measured_engine(
    config: CarouselConfig,
) -> (CarouselEngine<HeadlessViewport>, f64) {
    let mut engine = CarouselEngine::new(five_slide_viewport(), config, 0.0);
    let now = 1000.0;
    let proposal = engine.tick(now);
    assert!(proposal.is_none(), "mount measurement must not propose");
    assert_eq!(engine.metrics().number_of_views(), 4);
    (engine, now)
}
