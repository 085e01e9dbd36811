//! The application state machine.
//!
//! [`App`] owns every piece of mutable state: the active [`Screen`], the two
//! menus, the duration input buffer, the timer and the key bindings. Runtime
//! messages are converted to an [`Event`] and routed by screen:
//!
//! ```text
//! Landing ──enter(Start Timer)──▶ DurationInput ──enter(valid)──▶ Running
//!    ▲                                                               │
//!    └────────enter(Return to Menu)──── Completed ◀────timeout───────┘
//!                                        │    ▲
//!                                        └────┘ enter(Restart)
//! ```
//!
//! The quit binding exits from any screen.

pub mod keymap;
pub mod menu;
pub mod style;
mod view;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};
use once_cell::sync::OnceCell;
use tracing::{debug, info, trace};

use crate::countdown::Countdown;
use crate::duration;
use crate::help;
use crate::key::KeyPress;
use crate::notify::{notify_cmd, DisabledNotifier, Notification, NotificationSink};
use crate::textinput;
use crate::timer::{self, TickMsg, TickOutcome};

pub use keymap::KeyBindings;
pub use menu::{CompletionOption, LandingOption, Menu};

/// Maximum number of characters accepted in the duration input.
pub const INPUT_CHAR_LIMIT: usize = 20;

/// The active top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    DurationInput,
    Running,
    Completed,
}

/// Which screen the application opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartScreen {
    /// The landing menu, which the completion screen can also return to.
    Landing,
    /// Straight to the duration prompt, with no landing menu at all.
    DurationInput,
}

/// Construction-time options for [`App`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOptions {
    pub start_screen: StartScreen,
    /// Show the completion menu on expiry. When off, the app quits after
    /// sending the notification.
    pub completion_screen: bool,
    pub tick_interval: Duration,
    pub notify_icon: Option<Vec<u8>>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            start_screen: StartScreen::Landing,
            completion_screen: true,
            tick_interval: timer::DEFAULT_INTERVAL,
            notify_icon: None,
        }
    }
}

/// Input to the state machine.
pub enum Event {
    Key(KeyPress),
    Resize { width: u16, height: u16 },
    Tick(TickMsg),
    /// Anything else; forwarded to the input buffer (caret blinks).
    Other(Msg),
}

impl From<Msg> for Event {
    fn from(msg: Msg) -> Self {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return Event::Key(KeyPress::from(key));
        }
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            return Event::Resize {
                width: size.width,
                height: size.height,
            };
        }
        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            return Event::Tick(tick.clone());
        }
        Event::Other(msg)
    }
}

static STARTUP: OnceCell<(AppOptions, Arc<dyn NotificationSink>)> = OnceCell::new();

/// Sets the options and notification sink used by [`BubbleTeaModel::init`].
///
/// The runtime constructs the model itself, so these have to be installed
/// before the program starts. Later calls are ignored.
pub fn install(options: AppOptions, notifier: Arc<dyn NotificationSink>) {
    if STARTUP.set((options, notifier)).is_err() {
        tracing::warn!("application options already installed");
    }
}

pub struct App {
    screen: Screen,
    options: AppOptions,
    landing: Menu,
    completion: Menu,
    /// Present only while the duration prompt is on screen.
    input: Option<textinput::Model>,
    last_duration_text: String,
    timer: timer::Model,
    keymap: KeyBindings,
    help: help::Model,
    error: Option<String>,
    notifier: Arc<dyn NotificationSink>,
    quitting: bool,
    width: u16,
    height: u16,
}

impl App {
    /// Creates the application on its configured start screen. The returned
    /// command starts the caret blinking when that screen is the prompt.
    pub fn new(options: AppOptions, notifier: Arc<dyn NotificationSink>) -> (Self, Option<Cmd>) {
        let mut app = Self {
            screen: Screen::Landing,
            landing: Menu::new(LandingOption::ALL.len()),
            completion: Menu::new(CompletionOption::ALL.len()),
            input: None,
            last_duration_text: String::new(),
            timer: timer::Model::new(options.tick_interval),
            keymap: KeyBindings::default(),
            help: help::Model::new(),
            error: None,
            notifier,
            quitting: false,
            width: 0,
            height: 0,
            options,
        };

        let cmd = match app.options.start_screen {
            StartScreen::Landing => None,
            StartScreen::DurationInput => app.enter_input(),
        };
        (app, cmd)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn landing_cursor(&self) -> usize {
        self.landing.cursor()
    }

    pub fn completion_cursor(&self) -> usize {
        self.completion.cursor()
    }

    pub fn countdown(&self) -> &Countdown {
        self.timer.countdown()
    }

    pub fn timer(&self) -> &timer::Model {
        &self.timer
    }

    /// Text in the duration prompt; empty when the prompt is not shown.
    pub fn input_value(&self) -> String {
        self.input.as_ref().map(textinput::Model::value).unwrap_or_default()
    }

    /// The message shown under the prompt after a rejected duration.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The text of the last accepted duration.
    pub fn last_duration_text(&self) -> &str {
        &self.last_duration_text
    }

    pub fn keymap(&self) -> &KeyBindings {
        &self.keymap
    }

    pub fn quitting(&self) -> bool {
        self.quitting
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Processes one event to completion.
    pub fn handle(&mut self, event: Event) -> Option<Cmd> {
        match event {
            Event::Resize { width, height } => {
                self.width = width;
                self.height = height;
                self.help.width = usize::from(width);
                None
            }
            Event::Tick(tick) => self.on_tick(&tick),
            Event::Key(key) => self.on_key(&key),
            Event::Other(msg) => self.input.as_mut().and_then(|input| input.update(&msg)),
        }
    }

    fn on_key(&mut self, key: &KeyPress) -> Option<Cmd> {
        trace!(%key, screen = ?self.screen, "key");
        if self.keymap.quit.matches(key) {
            return Some(self.quit());
        }

        match self.screen {
            Screen::Landing => self.on_landing_key(key),
            Screen::DurationInput => self.on_input_key(key),
            Screen::Running => self.on_running_key(key),
            Screen::Completed => self.on_completed_key(key),
        }
    }

    fn on_landing_key(&mut self, key: &KeyPress) -> Option<Cmd> {
        if self.keymap.up.matches(key) {
            self.landing.up();
        } else if self.keymap.down.matches(key) {
            self.landing.down();
        } else if self.keymap.confirm.matches(key) {
            return match LandingOption::ALL[self.landing.cursor()] {
                LandingOption::StartTimer => self.enter_input(),
                LandingOption::Quit => Some(self.quit()),
            };
        }
        None
    }

    fn on_input_key(&mut self, key: &KeyPress) -> Option<Cmd> {
        if self.keymap.confirm.matches(key) {
            return self.submit_duration();
        }
        if let Some(input) = self.input.as_mut() {
            input.handle_key(key);
        }
        None
    }

    fn on_running_key(&mut self, key: &KeyPress) -> Option<Cmd> {
        if self.keymap.reset.matches(key) {
            self.timer.reset();
            debug!(remaining = ?self.timer.countdown().remaining(), "countdown reset");
            return None;
        }
        if self.keymap.start.matches(key) || self.keymap.stop.matches(key) {
            let cmd = self.timer.toggle();
            self.keymap.sync_running(self.timer.running());
            debug!(running = self.timer.running(), "countdown toggled");
            return cmd;
        }
        None
    }

    fn on_completed_key(&mut self, key: &KeyPress) -> Option<Cmd> {
        if self.keymap.up.matches(key) {
            self.completion.up();
        } else if self.keymap.down.matches(key) {
            self.completion.down();
        } else if self.keymap.confirm.matches(key) {
            return match CompletionOption::ALL[self.completion.cursor()] {
                CompletionOption::Restart => {
                    let duration = self.timer.countdown().configured();
                    Some(self.start_countdown(duration))
                }
                CompletionOption::ReturnToMenu => self.return_to_menu(),
            };
        }
        None
    }

    fn on_tick(&mut self, tick: &TickMsg) -> Option<Cmd> {
        if self.screen != Screen::Running {
            return None;
        }
        match self.timer.update(tick) {
            TickOutcome::Ignored => None,
            TickOutcome::Next(cmd) => Some(cmd),
            TickOutcome::Expired(_) => self.on_expired(),
        }
    }

    /// Runs in the same update as the tick that expired the countdown.
    fn on_expired(&mut self) -> Option<Cmd> {
        info!(duration = %self.last_duration_text, "countdown expired");
        let notify = notify_cmd(
            self.notifier.clone(),
            Notification::timeout(self.options.notify_icon.clone()),
        );

        if !self.options.completion_screen {
            self.quitting = true;
            return Some(Box::pin(async move {
                notify.await;
                bubbletea_rs::quit().await
            }));
        }

        self.screen = Screen::Completed;
        self.completion.reset();
        Some(notify)
    }

    fn enter_input(&mut self) -> Option<Cmd> {
        debug!(from = ?self.screen, "entering duration input");
        self.screen = Screen::DurationInput;
        self.error = None;
        let mut input = new_input();
        let blink = input.focus();
        self.input = Some(input);
        Some(blink)
    }

    fn submit_duration(&mut self) -> Option<Cmd> {
        let text = self.input_value();
        match duration::parse(&text) {
            Ok(d) => {
                self.error = None;
                self.input = None;
                self.last_duration_text = text;
                Some(self.start_countdown(d))
            }
            Err(e) => {
                debug!(input = %text, error = %e, "rejected duration");
                self.error = Some(e.to_string());
                None
            }
        }
    }

    fn start_countdown(&mut self, duration: Duration) -> Cmd {
        info!(?duration, "countdown started");
        self.screen = Screen::Running;
        let cmd = self.timer.start(duration);
        self.keymap.sync_running(self.timer.running());
        cmd
    }

    fn return_to_menu(&mut self) -> Option<Cmd> {
        self.timer = timer::Model::new(self.options.tick_interval);
        match self.options.start_screen {
            StartScreen::Landing => {
                debug!("returning to landing menu");
                self.screen = Screen::Landing;
                self.landing.reset();
                None
            }
            StartScreen::DurationInput => self.enter_input(),
        }
    }

    fn quit(&mut self) -> Cmd {
        debug!(screen = ?self.screen, "quit requested");
        self.quitting = true;
        bubbletea_rs::quit()
    }
}

fn new_input() -> textinput::Model {
    let mut input = textinput::new();
    input.set_placeholder("5m");
    input.set_char_limit(INPUT_CHAR_LIMIT);
    input.set_width(INPUT_CHAR_LIMIT);
    input
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        match STARTUP.get() {
            Some((options, notifier)) => App::new(options.clone(), notifier.clone()),
            None => App::new(AppOptions::default(), Arc::new(DisabledNotifier)),
        }
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.handle(Event::from(msg))
    }

    fn view(&self) -> String {
        self.render()
    }
}
