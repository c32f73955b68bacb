//! Interaction arbiter: collapse raw touch events into the two signals the
//! engine cares about.

use crate::platform::InputEvent;

/// What a touch event means to the engine.
///
/// Start and move are deliberately indistinguishable: any touch presence
/// hands the viewport to the user (cancel animation, suspend autoplay).
/// End and cancel are likewise one signal: the gesture is over, start the
/// autoplay quiet period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchSignal {
    /// A finger is on the viewport.
    Contact,
    /// The gesture ended (normally or cancelled).
    Release,
}

/// Classify an input event as a touch signal, if it is one.
///
/// Scroll, resize, and slide-set changes are not touch signals; the
/// reconciler's passive-tracking and measurement paths handle those.
pub fn classify(event: InputEvent) -> Option<TouchSignal> {
    match event {
        InputEvent::TouchStart | InputEvent::TouchMove => Some(TouchSignal::Contact),
        InputEvent::TouchEnd | InputEvent::TouchCancel => Some(TouchSignal::Release),
        InputEvent::Scroll | InputEvent::Resize | InputEvent::SlidesChanged => None,
    }
}
