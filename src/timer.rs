//! Timer component driving a [`Countdown`] from the bubbletea-rs runtime.
//!
//! The countdown engine itself is clock-free. This component schedules a
//! tick command every `interval`, stamps each [`TickMsg`] with the instant it
//! fired, and feeds the engine the wall-clock time elapsed since the previous
//! tick. The tick that brings the countdown to zero reports
//! [`TickOutcome::Expired`] to the caller directly, so expiry is handled in
//! the same update that caused it.
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Msg};
//! use hourglass::timer::{Model, TickMsg, TickOutcome};
//! use std::time::Duration;
//!
//! struct App {
//!     timer: Model,
//!     done: bool,
//! }
//!
//! impl App {
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         let tick = msg.downcast_ref::<TickMsg>()?;
//!         match self.timer.update(tick) {
//!             TickOutcome::Ignored => None,
//!             TickOutcome::Next(cmd) => Some(cmd),
//!             TickOutcome::Expired(_) => {
//!                 self.done = true;
//!                 None
//!             }
//!         }
//!     }
//! }
//!
//! let mut app = App { timer: Model::new(Duration::from_millis(100)), done: false };
//! let _first_tick: Cmd = app.timer.start(Duration::from_secs(30));
//! assert!(app.timer.running());
//! ```

use crate::countdown::{Countdown, TimeoutEvent};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, Instant};

/// Default tick interval: ten redraws per second.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

// Internal ID management for timer instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Message sent on every tick of a running timer.
///
/// Only the timer with the matching `id` and current `tag` accepts it; ticks
/// left over from an earlier tick chain (before a pause, restart or resume)
/// carry an old tag and are dropped.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Identifier of the timer that scheduled this tick.
    pub id: i64,
    /// Tick chain the message belongs to.
    pub tag: i64,
    /// When the tick fired.
    pub at: Instant,
}

/// What a [`TickMsg`] did to the timer.
pub enum TickOutcome {
    /// The tick belongs to another timer or an old chain, or the countdown
    /// is not running.
    Ignored,
    /// The countdown advanced; run this command for the next tick.
    Next(Cmd),
    /// The countdown reached zero on this tick. No further ticks follow.
    Expired(TimeoutEvent),
}

impl TickOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, TickOutcome::Ignored)
    }
}

/// A countdown bound to the runtime's tick source.
#[derive(Debug, Clone)]
pub struct Model {
    /// Time between ticks.
    pub interval: Duration,
    countdown: Countdown,
    id: i64,
    tag: i64,
    last_tick: Option<Instant>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl Model {
    /// Creates an idle timer that will tick every `interval` once started.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            countdown: Countdown::new(),
            id: next_id(),
            tag: 0,
            last_tick: None,
        }
    }

    /// Unique identifier of this timer.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Current tick chain tag.
    pub fn tag(&self) -> i64 {
        self.tag
    }

    /// The underlying countdown state.
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn running(&self) -> bool {
        self.countdown.running()
    }

    pub fn timedout(&self) -> bool {
        self.countdown.expired()
    }

    /// Starts (or restarts) counting down from `duration` and returns the
    /// command for the first tick.
    pub fn start(&mut self, duration: Duration) -> Cmd {
        self.countdown.start(duration);
        self.last_tick = Some(Instant::now());
        self.tick()
    }

    /// Pauses or resumes the countdown. Resuming returns the command that
    /// restarts the tick chain; pausing, or toggling an expired countdown,
    /// returns `None`.
    pub fn toggle(&mut self) -> Option<Cmd> {
        self.countdown.toggle();
        if self.countdown.running() {
            self.last_tick = Some(Instant::now());
            Some(self.tick())
        } else {
            None
        }
    }

    /// Restores the full configured duration without changing whether the
    /// countdown is running.
    pub fn reset(&mut self) {
        self.countdown.reset();
    }

    /// Handles a tick, reporting whether it was ignored, advanced the
    /// countdown, or expired it.
    pub fn update(&mut self, msg: &TickMsg) -> TickOutcome {
        if msg.id != self.id || msg.tag != self.tag || !self.countdown.running() {
            return TickOutcome::Ignored;
        }

        let elapsed = self
            .last_tick
            .map(|last| msg.at.saturating_duration_since(last))
            .unwrap_or(self.interval);
        self.last_tick = Some(msg.at);

        match self.countdown.tick(elapsed) {
            Some(event) => {
                tracing::debug!(timer = self.id, "countdown reached zero");
                TickOutcome::Expired(event)
            }
            None => TickOutcome::Next(self.tick()),
        }
    }

    /// Remaining time, formatted for display.
    pub fn view(&self) -> String {
        self.countdown.remaining_view()
    }

    /// Schedules the next tick in a new chain.
    fn tick(&mut self) -> Cmd {
        self.tag += 1;
        let id = self.id;
        let tag = self.tag;

        bubbletea_tick(self.interval, move |_| {
            Box::new(TickMsg {
                id,
                tag,
                at: Instant::now(),
            }) as Msg
        })
    }
}
