//! Input buffer state and editing.

use super::keymap::{default_key_map, KeyMap};
use crate::cursor::{BlinkMsg, Model as Cursor};
use crate::key::KeyPress;
use bubbletea_rs::{Cmd, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthChar;

pub struct Model {
    pub prompt: String,
    pub prompt_style: Style,
    pub text_style: Style,
    pub placeholder: String,
    pub placeholder_style: Style,
    pub cursor: Cursor,
    pub key_map: KeyMap,

    /// Visible width in cells; 0 shows the whole value.
    pub width: usize,
    /// Maximum number of characters; 0 means unlimited.
    pub char_limit: usize,

    pub(super) value: Vec<char>,
    pub(super) focus: bool,
    pub(super) pos: usize,

    // Visible window of `value` when it is wider than `width`.
    pub(super) offset: usize,
    pub(super) offset_right: usize,
}

pub fn new() -> Model {
    Model {
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: String::new(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor: Cursor::new(),
        key_map: default_key_map(),
        width: 0,
        char_limit: 0,
        value: Vec::new(),
        focus: false,
        pos: 0,
        offset: 0,
        offset_right: 0,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Cursor position, in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
        self.handle_overflow();
    }

    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Focuses the input and returns the command that starts the caret
    /// blinking.
    pub fn focus(&mut self) -> Cmd {
        self.focus = true;
        self.cursor.focus()
    }

    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.handle_overflow();
    }

    pub fn set_char_limit(&mut self, limit: usize) {
        self.char_limit = limit;
    }

    /// Forwards runtime messages; only caret blinks are of interest.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        msg.downcast_ref::<BlinkMsg>()
            .and_then(|blink| self.cursor.update(blink))
    }

    /// Applies an editing key. Ignored until focused.
    pub fn handle_key(&mut self, key: &KeyPress) {
        if !self.focus {
            return;
        }

        if self.handle_deletion_keys(key) || self.handle_movement_keys(key) {
            self.handle_overflow();
            return;
        }
        self.handle_character_input(key);
    }

    fn handle_deletion_keys(&mut self, key: &KeyPress) -> bool {
        let km = &self.key_map;
        if km.delete_word_backward.matches(key) {
            self.delete_word_backward();
        } else if km.delete_character_backward.matches(key) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if km.delete_character_forward.matches(key) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if km.delete_after_cursor.matches(key) {
            self.value.truncate(self.pos);
        } else if km.delete_before_cursor.matches(key) {
            self.value.drain(..self.pos);
            self.offset = 0;
            self.pos = 0;
        } else {
            return false;
        }
        true
    }

    fn handle_movement_keys(&mut self, key: &KeyPress) -> bool {
        let km = &self.key_map;
        if km.character_backward.matches(key) {
            self.set_cursor(self.pos.saturating_sub(1));
        } else if km.character_forward.matches(key) {
            self.set_cursor(self.pos + 1);
        } else if km.line_start.matches(key) {
            self.cursor_start();
        } else if km.line_end.matches(key) {
            self.cursor_end();
        } else {
            return false;
        }
        true
    }

    fn handle_character_input(&mut self, key: &KeyPress) {
        if let KeyCode::Char(ch) = key.code {
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_char(ch);
            }
        }
    }

    fn insert_char(&mut self, ch: char) {
        if self.char_limit > 0 && self.value.len() >= self.char_limit {
            return;
        }
        self.value.insert(self.pos, ch);
        self.pos += 1;
        self.handle_overflow();
    }

    fn delete_word_backward(&mut self) {
        if self.pos == 0 {
            return;
        }
        let old_pos = self.pos;
        let mut start = old_pos;
        while start > 0 && self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        self.value.drain(start..old_pos);
        self.pos = start;
    }

    /// Keeps the cursor inside the visible window `offset..offset_right`.
    pub(super) fn handle_overflow(&mut self) {
        let total: usize = self.value.iter().map(|c| c.width().unwrap_or(0)).sum();
        if self.width == 0 || total <= self.width {
            self.offset = 0;
            self.offset_right = self.value.len();
            return;
        }

        self.offset_right = self.offset_right.min(self.value.len());

        if self.pos < self.offset {
            self.offset = self.pos;
            let mut w = 0;
            let mut i = self.offset;
            while i < self.value.len() && w + self.value[i].width().unwrap_or(0) <= self.width {
                w += self.value[i].width().unwrap_or(0);
                i += 1;
            }
            self.offset_right = i;
        } else if self.pos >= self.offset_right {
            self.offset_right = self.pos;
            let mut w = 0;
            let mut i = self.offset_right;
            while i > 0 && w + self.value[i - 1].width().unwrap_or(0) < self.width {
                w += self.value[i - 1].width().unwrap_or(0);
                i -= 1;
            }
            self.offset = i;
        }
    }
}
