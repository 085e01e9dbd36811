//! Menus on the landing and completion screens.

/// A selection cursor over a fixed number of options. Moving past either
/// end clamps; it never wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    cursor: usize,
    len: usize,
}

impl Menu {
    /// A menu with `len` options and the first one selected.
    pub fn new(len: usize) -> Self {
        Self { cursor: 0, len }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.cursor + 1 < self.len {
            self.cursor += 1;
        }
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

/// Options on the landing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingOption {
    StartTimer,
    Quit,
}

impl LandingOption {
    pub const ALL: [LandingOption; 2] = [LandingOption::StartTimer, LandingOption::Quit];

    pub fn label(self) -> &'static str {
        match self {
            LandingOption::StartTimer => "Start Timer",
            LandingOption::Quit => "Quit",
        }
    }
}

/// Options on the completion screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOption {
    Restart,
    ReturnToMenu,
}

impl CompletionOption {
    pub const ALL: [CompletionOption; 2] =
        [CompletionOption::Restart, CompletionOption::ReturnToMenu];
}
