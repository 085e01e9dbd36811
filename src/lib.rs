#![doc(html_root_url = "https://docs.rs/hourglass/")]

//! # hourglass
//!
//! An interactive terminal countdown timer built on
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The user picks "Start Timer" from a landing menu, types a duration such as
//! `5m`, `30s` or `1h30m`, and watches it count down. The countdown can be
//! paused, resumed and reset. On expiry a desktop notification is sent and a
//! completion menu offers to run the same duration again or go back to the
//! landing menu.
//!
//! ## Layout
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`duration`] | Parses duration text and formats remaining time |
//! | [`countdown`] | Clock-free countdown engine |
//! | [`timer`] | Drives a countdown from runtime tick messages |
//! | [`app`] | Screen state machine and rendering |
//! | [`textinput`], [`cursor`] | The duration input buffer and its caret |
//! | [`key`], [`help`] | Key bindings and the help line |
//! | [`notify`] | Notification sink and desktop notifier |
//! | [`config`], [`logging`], [`error`] | Environment config, file logging, fatal errors |
//!
//! ## Parsing durations
//!
//! ```rust
//! use hourglass::duration::{parse, format_duration, ParseError};
//! use std::time::Duration;
//!
//! assert_eq!(parse("1h30m").unwrap(), Duration::from_secs(5400));
//! assert_eq!(parse("abc"), Err(ParseError::Malformed));
//! assert_eq!(parse("0s"), Err(ParseError::NonPositive));
//! assert_eq!(format_duration(Duration::from_millis(299_900)), "4m59.9s");
//! ```
//!
//! ## Driving the state machine
//!
//! ```rust
//! use hourglass::prelude::*;
//! use std::sync::Arc;
//!
//! let (mut app, _) = App::new(AppOptions::default(), Arc::new(DisabledNotifier));
//! assert_eq!(app.screen(), Screen::Landing);
//!
//! for spec in ["enter", "5", "m", "enter"] {
//!     let key = KeyPress::parse(spec).unwrap();
//!     let _cmd = app.handle(Event::Key(key));
//! }
//! assert_eq!(app.screen(), Screen::Running);
//! assert!(app.countdown().running());
//! ```

pub mod app;
pub mod config;
pub mod countdown;
pub mod cursor;
pub mod duration;
pub mod error;
pub mod help;
pub mod key;
pub mod logging;
pub mod notify;
pub mod textinput;
pub mod timer;

pub use app::{App, AppOptions, Event, Screen, StartScreen};
pub use config::Config;
pub use countdown::Countdown;
pub use error::{HourglassError, Result};

/// Prelude module for convenient imports.
///
/// ```rust
/// use hourglass::prelude::*;
///
/// let d = parse_duration("90s").unwrap();
/// let mut countdown = Countdown::new();
/// countdown.start(d);
/// assert!(countdown.running());
/// ```
pub mod prelude {
    pub use crate::app::{App, AppOptions, Event, Screen, StartScreen};
    pub use crate::config::Config;
    pub use crate::countdown::{Countdown, TimeoutEvent};
    pub use crate::duration::{format_duration, parse as parse_duration, ParseError};
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::notify::{
        DesktopNotifier, DisabledNotifier, Notification, NotificationSink, NotifyError,
    };
    pub use crate::timer::{TickMsg, TickOutcome};
}
