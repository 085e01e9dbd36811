//! Colors and styles for the screens.
//!
//! Purely cosmetic: nothing here affects the state machine.

use lipgloss_extras::prelude::*;

/// Colors used across the screens.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub banner: &'static str,
    pub selected: &'static str,
    pub error: &'static str,
    pub complete: &'static str,
}

pub const THEME: Theme = Theme {
    banner: "#FFD700",
    selected: "#00FF00",
    error: "#FF0000",
    complete: "#00FF00",
};

pub const HOURGLASS_ASCII: &str = r"
██╗  ██╗ ██████╗ ██╗   ██╗██████╗  ██████╗ ██╗      █████╗ ███████╗███████╗
██║  ██║██╔═══██╗██║   ██║██╔══██╗██╔════╝ ██║     ██╔══██╗██╔════╝██╔════╝
███████║██║   ██║██║   ██║██████╔╝██║  ███╗██║     ███████║███████╗███████╗
██╔══██║██║   ██║██║   ██║██╔══██╗██║   ██║██║     ██╔══██║╚════██║╚════██║
██║  ██║╚██████╔╝╚██████╔╝██║  ██║╚██████╔╝███████╗██║  ██║███████║███████║
╚═╝  ╚═╝ ╚═════╝  ╚═════╝ ╚═╝  ╚═╝ ╚═════╝ ╚══════╝╚═╝  ╚═╝╚══════╝╚══════╝
";

pub fn banner() -> Style {
    Style::new().bold(true).foreground(Color::from(THEME.banner))
}

pub fn menu_item() -> Style {
    Style::new().padding(0, 1, 0, 1)
}

pub fn selected_menu_item() -> Style {
    Style::new()
        .padding(0, 1, 0, 1)
        .foreground(Color::from(THEME.selected))
}

pub fn instructions() -> Style {
    Style::new().faint(true)
}

pub fn timer() -> Style {
    Style::new().bold(true)
}

pub fn error() -> Style {
    Style::new().foreground(Color::from(THEME.error))
}

pub fn complete() -> Style {
    Style::new().bold(true).foreground(Color::from(THEME.complete))
}
