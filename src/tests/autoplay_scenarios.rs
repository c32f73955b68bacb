//! Autoplay scheduling scenarios, driven through the full engine.

use super::measured_engine;
use crate::config::CarouselConfig;
use crate::model::SlideIndex;
use crate::platform::InputEvent;

fn autoplay_config(interval: f64) -> CarouselConfig {
    CarouselConfig {
        autoplay_interval: interval,
        ..CarouselConfig::default()
    }
}

#[test]
fn three_ticks_propose_three_incremented_values() {
    let (mut engine, _) = measured_engine(autoplay_config(2000.0));
    let mut proposals = Vec::new();

    for tick_time in [2000.0, 4000.0, 6000.0] {
        if let Some(proposal) = engine.tick(tick_time) {
            proposals.push(proposal.index());
            // The caller applies the advance and echoes it back.
            engine.set_current_slide(proposal.index(), tick_time);
        }
        // Drain the armed animation so later ticks only report autoplay.
        engine.tick(tick_time + 100.0);
    }

    assert_eq!(
        proposals,
        vec![SlideIndex::new(1), SlideIndex::new(2), SlideIndex::new(3)],
        "successively incremented pre-normalization values"
    );
}

#[test]
fn autoplay_advance_wraps_through_the_reconciler() {
    let (mut engine, _) = measured_engine(autoplay_config(2000.0));
    // Jump to the last view, then let autoplay advance past it.
    engine.set_current_slide(SlideIndex::new(3), 1000.0);
    engine.tick(1100.0);

    let advance = engine.tick(2000.0).expect("autoplay tick due");
    assert_eq!(advance.index(), SlideIndex::new(4), "pre-normalization value");

    let corrected = engine.set_current_slide(advance.index(), 2000.0);
    assert_eq!(
        corrected.map(|p| p.index()),
        Some(SlideIndex::new(0)),
        "reconciler wraps the advance, not the scheduler"
    );
}

#[test]
fn zero_interval_never_ticks() {
    let (mut engine, _) = measured_engine(autoplay_config(0.0));
    assert!(!engine.autoplay_enabled());
    for t in [2000.0, 50_000.0, 1_000_000.0] {
        assert_eq!(engine.tick(t), None);
    }
}

#[test]
fn touch_suspends_ticking_until_quiet_period_elapses() {
    let (mut engine, _) = measured_engine(autoplay_config(2000.0));
    engine.handle_event(InputEvent::TouchStart, 1500.0);
    assert!(!engine.autoplay_enabled());

    // The 2000ms tick must not fire while suspended.
    assert_eq!(engine.tick(2000.0), None);

    engine.handle_event(InputEvent::TouchEnd, 3000.0);
    // Quiet period is autoplay_wait (10s): resume at 13_000, first tick a
    // full interval later.
    assert_eq!(engine.tick(12_999.0), None);
    assert!(!engine.autoplay_enabled());
    engine.tick(13_000.0);
    assert!(engine.autoplay_enabled());
    assert!(engine.tick(15_000.0).is_some());
}

#[test]
fn rapid_touches_keep_pushing_resume_out() {
    let (mut engine, _) = measured_engine(autoplay_config(2000.0));
    engine.handle_event(InputEvent::TouchStart, 1500.0);
    engine.handle_event(InputEvent::TouchEnd, 2000.0);
    engine.handle_event(InputEvent::TouchStart, 5000.0);
    engine.handle_event(InputEvent::TouchEnd, 6000.0);

    // The first touch-end's 12_000 deadline was superseded.
    engine.tick(12_000.0);
    assert!(!engine.autoplay_enabled());
    engine.tick(16_000.0);
    assert!(engine.autoplay_enabled());
}

#[test]
fn touch_move_alone_suspends_autoplay() {
    let (mut engine, _) = measured_engine(autoplay_config(2000.0));
    engine.handle_event(InputEvent::TouchMove, 1500.0);
    assert!(!engine.autoplay_enabled());
}

#[test]
fn touch_cancel_behaves_like_touch_end_for_resumption() {
    let (mut engine, _) = measured_engine(autoplay_config(2000.0));
    engine.handle_event(InputEvent::TouchStart, 1500.0);
    engine.handle_event(InputEvent::TouchCancel, 2000.0);
    engine.tick(12_000.0);
    assert!(engine.autoplay_enabled());
}
