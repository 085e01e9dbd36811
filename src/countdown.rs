//! Countdown engine.
//!
//! [`Countdown`] is plain state: it knows nothing about the event loop or
//! the clock. Callers feed it elapsed time through [`Countdown::tick`], and
//! it reports reaching zero exactly once per [`Countdown::start`].
//!
//! ```rust
//! use hourglass::countdown::Countdown;
//! use std::time::Duration;
//!
//! let mut countdown = Countdown::new();
//! countdown.start(Duration::from_secs(2));
//!
//! assert!(countdown.tick(Duration::from_secs(1)).is_none());
//! assert!(countdown.tick(Duration::from_secs(1)).is_some());
//! assert!(countdown.tick(Duration::from_secs(1)).is_none());
//! assert!(countdown.expired());
//! ```

use std::time::Duration;

/// Emitted by [`Countdown::tick`] when the remaining time reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutEvent;

/// Remaining-time state for a single countdown.
///
/// Invariants: `running` and `expired` are never both true, and `expired`
/// stays set until the next `start` or `reset`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Countdown {
    configured: Duration,
    remaining: Duration,
    running: bool,
    expired: bool,
}

impl Countdown {
    /// A fresh countdown: nothing configured, not running, not expired.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting down from `duration`.
    ///
    /// `duration` is expected to be positive; the duration parser rejects
    /// zero before it gets here.
    pub fn start(&mut self, duration: Duration) {
        self.configured = duration;
        self.remaining = duration;
        self.running = true;
        self.expired = false;
    }

    /// Advances the countdown by `elapsed`.
    ///
    /// Ignored while stopped. Returns the timeout event on the tick that
    /// brings the remaining time to zero, and never again after that.
    pub fn tick(&mut self, elapsed: Duration) -> Option<TimeoutEvent> {
        if !self.running {
            return None;
        }

        self.remaining = self.remaining.saturating_sub(elapsed);
        if self.remaining.is_zero() {
            self.running = false;
            self.expired = true;
            return Some(TimeoutEvent);
        }
        None
    }

    /// Pauses a running countdown or resumes a paused one. Does nothing once
    /// expired; use [`Countdown::start`] to run again.
    pub fn toggle(&mut self) {
        if !self.expired {
            self.running = !self.running;
        }
    }

    /// Restores the full configured duration and clears expiry. The running
    /// flag is left as it was.
    pub fn reset(&mut self) {
        self.remaining = self.configured;
        self.expired = false;
    }

    pub fn configured(&self) -> Duration {
        self.configured
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Remaining time formatted for display.
    pub fn remaining_view(&self) -> String {
        crate::duration::format_duration(self.remaining)
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn expired(&self) -> bool {
        self.expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_new_is_idle() {
        let c = Countdown::new();
        assert_eq!(c.remaining(), Duration::ZERO);
        assert!(!c.running());
        assert!(!c.expired());
    }

    #[test]
    fn test_start_sets_everything() {
        let mut c = Countdown::new();
        c.start(Duration::from_secs(300));
        assert_eq!(c.configured(), Duration::from_secs(300));
        assert_eq!(c.remaining(), Duration::from_secs(300));
        assert!(c.running());
        assert!(!c.expired());
    }

    #[test]
    fn test_tick_subtracts_elapsed() {
        let mut c = Countdown::new();
        c.start(Duration::from_secs(10));
        assert_eq!(c.tick(Duration::from_millis(2500)), None);
        assert_eq!(c.remaining(), Duration::from_millis(7500));
    }

    #[test]
    fn test_timeout_fires_exactly_once() {
        let mut c = Countdown::new();
        c.start(Duration::from_secs(3));

        let mut events = 0;
        for _ in 0..10 {
            if c.tick(SECOND).is_some() {
                events += 1;
            }
        }

        assert_eq!(events, 1);
        assert!(c.expired());
        assert!(!c.running());
        assert_eq!(c.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_overshooting_tick_clamps_at_zero() {
        let mut c = Countdown::new();
        c.start(SECOND);
        assert_eq!(c.tick(Duration::from_secs(60)), Some(TimeoutEvent));
        assert_eq!(c.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_ticks_ignored_while_stopped() {
        let mut c = Countdown::new();
        c.start(Duration::from_secs(5));
        c.toggle();
        assert!(!c.running());

        assert_eq!(c.tick(Duration::from_secs(10)), None);
        assert_eq!(c.remaining(), Duration::from_secs(5));
        assert!(!c.expired());
    }

    #[test]
    fn test_toggle_on_expired_is_noop() {
        let mut c = Countdown::new();
        c.start(SECOND);
        c.tick(SECOND);
        assert!(c.expired());

        c.toggle();
        assert!(!c.running());
        assert!(c.expired());
    }

    #[test]
    fn test_reset_keeps_running_flag() {
        let mut c = Countdown::new();
        c.start(Duration::from_secs(10));
        c.tick(Duration::from_secs(4));
        c.reset();
        assert_eq!(c.remaining(), Duration::from_secs(10));
        assert!(c.running());

        c.toggle();
        c.tick(Duration::from_secs(4));
        c.reset();
        assert!(!c.running());
    }

    #[test]
    fn test_reset_clears_expiry_and_restart_fires_again() {
        let mut c = Countdown::new();
        c.start(SECOND);
        assert!(c.tick(SECOND).is_some());

        c.reset();
        assert!(!c.expired());
        assert_eq!(c.remaining(), SECOND);

        c.start(SECOND);
        assert!(c.tick(SECOND).is_some());
    }

    #[test]
    fn test_remaining_view() {
        let mut c = Countdown::new();
        c.start(Duration::from_secs(300));
        assert_eq!(c.remaining_view(), "5m0s");
    }
}
