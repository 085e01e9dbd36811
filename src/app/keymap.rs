//! Application key bindings.

use crate::key::{Binding, KeyMap};

/// Keys for every logical action. `start` and `stop` share a key; only one
/// of them is enabled at a time, mirroring whether the countdown runs.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub up: Binding,
    pub down: Binding,
    pub confirm: Binding,
    pub quit: Binding,
    pub start: Binding,
    pub stop: Binding,
    pub reset: Binding,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: Binding::from_specs(&["up", "k"]).with_help("↑/k", "up"),
            down: Binding::from_specs(&["down", "j"]).with_help("↓/j", "down"),
            confirm: Binding::from_specs(&["enter"]).with_help("enter", "select"),
            quit: Binding::from_specs(&["q", "ctrl+c"]).with_help("q", "quit"),
            start: Binding::from_specs(&["s"]).with_help("s", "start").with_disabled(),
            stop: Binding::from_specs(&["s"]).with_help("s", "stop"),
            reset: Binding::from_specs(&["r"]).with_help("r", "reset"),
        }
    }
}

impl KeyBindings {
    /// Enables exactly one of start/stop to match the running state.
    pub fn sync_running(&mut self, running: bool) {
        self.stop.set_enabled(running);
        self.start.set_enabled(!running);
    }
}

impl KeyMap for KeyBindings {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.start, &self.stop, &self.reset, &self.quit]
    }
}
