//! Key bindings.
//!
//! A [`Binding`] groups the physical keys that trigger one logical action,
//! the help text shown for it, and an enabled flag. Disabled bindings never
//! match and are hidden by the help renderer.
//!
//! ```rust
//! use hourglass::key::{Binding, KeyPress};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let quit = Binding::from_specs(&["q", "ctrl+c"]).with_help("q", "quit");
//!
//! assert!(quit.matches(&KeyPress::new(KeyCode::Char('q'), KeyModifiers::NONE)));
//! assert!(quit.matches(&KeyPress::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
//! assert!(!quit.matches(&KeyPress::from(KeyCode::Char('c'))));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use std::fmt;

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers held during the press.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Creates a key press from a code and modifiers.
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Parses a key spec such as `"k"`, `"enter"`, `"up"` or `"ctrl+c"`.
    ///
    /// Returns `None` for names that do not describe a key.
    pub fn parse(spec: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut rest = spec;
        loop {
            if let Some(r) = rest.strip_prefix("ctrl+") {
                modifiers |= KeyModifiers::CONTROL;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("alt+") {
                modifiers |= KeyModifiers::ALT;
                rest = r;
            } else {
                break;
            }
        }

        let code = match rest {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "space" => KeyCode::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };
        Some(Self::new(code, modifiers))
    }

    /// Compares two presses. Shift is ignored because it is already encoded
    /// in the case of character keys.
    fn same_as(&self, other: &KeyPress) -> bool {
        let relevant = KeyModifiers::CONTROL | KeyModifiers::ALT;
        self.code == other.code
            && (self.modifiers & relevant) == (other.modifiers & relevant)
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }
}

impl From<&KeyMsg> for KeyPress {
    fn from(msg: &KeyMsg) -> Self {
        Self::new(msg.key, msg.modifiers)
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("alt+")?;
        }
        match self.code {
            KeyCode::Up => f.write_str("up"),
            KeyCode::Down => f.write_str("down"),
            KeyCode::Left => f.write_str("left"),
            KeyCode::Right => f.write_str("right"),
            KeyCode::Enter => f.write_str("enter"),
            KeyCode::Esc => f.write_str("esc"),
            KeyCode::Tab => f.write_str("tab"),
            KeyCode::Backspace => f.write_str("backspace"),
            KeyCode::Delete => f.write_str("delete"),
            KeyCode::Home => f.write_str("home"),
            KeyCode::End => f.write_str("end"),
            KeyCode::Char(' ') => f.write_str("space"),
            KeyCode::Char(c) => write!(f, "{c}"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Help text for a binding, shown as `key desc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short label for the key, e.g. `"q"`.
    pub key: String,
    /// What the key does, e.g. `"quit"`.
    pub desc: String,
}

/// A set of keys bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from key specs; unknown specs are skipped.
    pub fn from_specs(specs: &[&str]) -> Self {
        Self {
            keys: specs.iter().filter_map(|s| KeyPress::parse(s)).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Starts the binding out disabled.
    pub fn with_disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Keys that trigger this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding is active. A binding without keys is never active.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether `key` triggers this binding.
    pub fn matches(&self, key: &KeyPress) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.same_as(key))
    }
}

/// Bindings that can describe themselves to the help renderer.
pub trait KeyMap {
    /// Bindings for the single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
}
