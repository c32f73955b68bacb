//! Autoplay scheduler: periodic advance with touch-aware suspension.

use tracing::trace;

/// Deadline-based autoplay state.
///
/// Two independent timers, each a single outstanding deadline: the tick
/// deadline (fires an advance while enabled) and the resume deadline (armed
/// by touch release; re-arming replaces the previous one, so the last
/// touch-end wins). Wraparound of the advanced index is the reconciler's
/// job, not this module's.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autoplay {
    interval: f64,
    wait: f64,
    enabled: bool,
    next_tick_at: Option<f64>,
    resume_at: Option<f64>,
}

impl Autoplay {
    /// Create the scheduler. Autoplay starts enabled iff `interval > 0`,
    /// with the first tick due one full interval from `now`.
    pub fn new(interval: f64, wait: f64, now: f64) -> Self {
        let enabled = interval > 0.0;
        Self {
            interval,
            wait,
            enabled,
            next_tick_at: enabled.then_some(now + interval),
            resume_at: None,
        }
    }

    /// Whether autoplay is currently ticking.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Suspend immediately (touch contact). Clears both deadlines: no tick
    /// may fire, and no earlier release may re-enable mid-gesture.
    pub fn suspend(&mut self) {
        if self.enabled || self.resume_at.is_some() {
            trace!("autoplay suspended");
        }
        self.enabled = false;
        self.next_tick_at = None;
        self.resume_at = None;
    }

    /// Request resumption after the quiet period (touch release).
    /// Replaces any pending resume deadline.
    pub fn request_resume(&mut self, now: f64) {
        if self.interval > 0.0 {
            self.resume_at = Some(now + self.wait);
        }
    }

    /// Fire due deadlines. Returns `true` when a tick is due and the
    /// reconciler should propose an index advance.
    pub fn poll(&mut self, now: f64) -> bool {
        if let Some(resume_at) = self.resume_at {
            if now >= resume_at {
                self.resume_at = None;
                self.enabled = true;
                self.next_tick_at = Some(now + self.interval);
                trace!("autoplay resumed");
            }
        }
        if !self.enabled {
            return false;
        }
        match self.next_tick_at {
            Some(tick_at) if now >= tick_at => {
                self.next_tick_at = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Earliest pending deadline, for the driver's wake computation.
    pub fn next_deadline(&self) -> Option<f64> {
        match (self.resume_at, self.next_tick_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_when_interval_is_zero() {
        let mut ap = Autoplay::new(0.0, 10_000.0, 0.0);
        assert!(!ap.enabled());
        assert!(!ap.poll(1_000_000.0));
        assert_eq!(ap.next_deadline(), None);
    }

    #[test]
    fn first_tick_fires_one_interval_after_construction() {
        let mut ap = Autoplay::new(2000.0, 10_000.0, 0.0);
        assert!(!ap.poll(1999.0));
        assert!(ap.poll(2000.0));
    }

    #[test]
    fn ticks_rearm_after_firing() {
        let mut ap = Autoplay::new(2000.0, 10_000.0, 0.0);
        assert!(ap.poll(2000.0));
        assert!(!ap.poll(2001.0));
        assert!(ap.poll(4000.0));
        assert!(ap.poll(6001.0));
    }

    #[test]
    fn suspend_stops_ticks_and_pending_resume() {
        let mut ap = Autoplay::new(2000.0, 10_000.0, 0.0);
        ap.request_resume(0.0);
        ap.suspend();
        assert!(!ap.poll(100_000.0), "suspended autoplay must not tick");
        assert!(!ap.enabled(), "stale resume deadline must not survive suspend");
    }

    #[test]
    fn resume_reenables_after_quiet_period() {
        let mut ap = Autoplay::new(2000.0, 10_000.0, 0.0);
        ap.suspend();
        ap.request_resume(5000.0);
        assert!(!ap.poll(14_999.0));
        assert!(!ap.enabled());
        // Resume fires at 15000; next tick one interval later.
        assert!(!ap.poll(15_000.0));
        assert!(ap.enabled());
        assert!(ap.poll(17_000.0));
    }

    #[test]
    fn last_touch_end_wins() {
        let mut ap = Autoplay::new(2000.0, 10_000.0, 0.0);
        ap.suspend();
        ap.request_resume(1000.0);
        ap.request_resume(4000.0); // replaces the 11_000 deadline
        assert!(!ap.poll(11_000.0));
        assert!(!ap.enabled());
        ap.poll(14_000.0);
        assert!(ap.enabled());
    }

    #[test]
    fn resume_is_noop_when_autoplay_configured_off() {
        let mut ap = Autoplay::new(0.0, 10_000.0, 0.0);
        ap.request_resume(0.0);
        assert_eq!(ap.next_deadline(), None);
        assert!(!ap.poll(100_000.0));
    }
}
