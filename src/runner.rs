//! Per-carousel scheduling thread.
//!
//! One dedicated thread owns the engine and its viewport, parks on the
//! event channel for exactly as long as [`CarouselEngine::next_wake`]
//! allows (frame cadence mid-animation, deadline-driven otherwise, capped
//! at the idle poll), and forwards index proposals to the caller's
//! callback. Dropping the runner shuts the thread down and joins it, so
//! every listener registration dies with the carousel instance.

use crate::config::CarouselConfig;
use crate::engine::CarouselEngine;
use crate::model::SlideIndex;
use crate::platform::{InputEvent, Viewport};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

enum RunnerMessage {
    Input(InputEvent),
    SetCurrentSlide(SlideIndex),
    Shutdown,
}

/// Handle to a carousel running on its own scheduling thread.
///
/// The callback passed to [`CarouselRunner::spawn`] receives every index
/// the engine proposes (normalizations, autoplay advances, passive
/// inferences). The caller applies the value to its own state and echoes
/// it back via [`CarouselRunner::set_current_slide`], exactly as an
/// embedder drives [`CarouselEngine`] directly.
pub struct CarouselRunner {
    sender: mpsc::Sender<RunnerMessage>,
    handle: Option<JoinHandle<()>>,
}

impl CarouselRunner {
    /// Spawn the scheduling thread and mount the engine.
    pub fn spawn<V, F>(viewport: V, config: CarouselConfig, mut on_proposal: F) -> Self
    where
        V: Viewport + Send + 'static,
        F: FnMut(SlideIndex) + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let handle = std::thread::spawn(move || {
            let epoch = Instant::now();
            let now_ms = move || epoch.elapsed().as_secs_f64() * 1000.0;
            let mut engine = CarouselEngine::new(viewport, config, now_ms());
            debug!("carousel runner started");

            loop {
                let wake = engine.next_wake(now_ms()).max(0.0);
                match receiver.recv_timeout(Duration::from_secs_f64(wake / 1000.0)) {
                    Ok(RunnerMessage::Input(event)) => {
                        if let Some(proposal) = engine.handle_event(event, now_ms()) {
                            on_proposal(proposal.index());
                        }
                    }
                    Ok(RunnerMessage::SetCurrentSlide(index)) => {
                        if let Some(proposal) = engine.set_current_slide(index, now_ms()) {
                            on_proposal(proposal.index());
                        }
                    }
                    Ok(RunnerMessage::Shutdown) | Err(RecvTimeoutError::Disconnected) => {
                        break;
                    }
                    Err(RecvTimeoutError::Timeout) => {}
                }
                if let Some(proposal) = engine.tick(now_ms()) {
                    on_proposal(proposal.index());
                }
            }
            debug!("carousel runner stopped");
        });

        Self {
            sender,
            handle: Some(handle),
        }
    }

    /// Forward a viewport event to the engine.
    pub fn dispatch(&self, event: InputEvent) {
        // A send failure means the thread is already gone; nothing to do.
        let _ = self.sender.send(RunnerMessage::Input(event));
    }

    /// Apply a caller-side index change (or echo a proposal back).
    pub fn set_current_slide(&self, index: SlideIndex) {
        let _ = self.sender.send(RunnerMessage::SetCurrentSlide(index));
    }
}

impl Drop for CarouselRunner {
    fn drop(&mut self) {
        let _ = self.sender.send(RunnerMessage::Shutdown);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("carousel runner thread panicked during shutdown");
            }
        }
    }
}
