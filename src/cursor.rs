//! Blinking caret for the duration input.
//!
//! The caret alternates between a reversed block and the plain character
//! underneath it. Each blink schedules the next one; blink messages carry the
//! caret id and a tag so that a refocus does not leave two blink chains
//! running at once.

use bubbletea_rs::{tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

const DEFAULT_BLINK_SPEED: Duration = Duration::from_millis(530);

/// Toggles the caret of the cursor with the matching id and tag.
#[derive(Debug, Clone)]
pub struct BlinkMsg {
    pub id: usize,
    pub tag: usize,
}

#[derive(Debug, Clone)]
pub struct Model {
    pub blink_speed: Duration,
    /// Style of the block when the caret is shown.
    pub style: Style,
    /// Style of the character when the caret is hidden.
    pub text_style: Style,

    char: String,
    id: usize,
    focus: bool,
    // `true` while the block is hidden.
    blink: bool,
    blink_tag: usize,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            blink_speed: DEFAULT_BLINK_SPEED,
            style: Style::new(),
            text_style: Style::new(),
            char: " ".to_string(),
            id: next_id(),
            focus: false,
            blink: true,
            blink_tag: 0,
        }
    }
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Whether the block is currently drawn.
    pub fn visible(&self) -> bool {
        !self.blink
    }

    /// Shows the caret and starts blinking.
    pub fn focus(&mut self) -> Cmd {
        self.focus = true;
        self.blink = false;
        self.blink_cmd()
    }

    pub fn focused(&self) -> bool {
        self.focus
    }

    pub fn set_char(&mut self, s: &str) {
        self.char = s.to_string();
    }

    /// Handles a blink message addressed to this caret.
    pub fn update(&mut self, msg: &BlinkMsg) -> Option<Cmd> {
        if !self.focus || msg.id != self.id || msg.tag != self.blink_tag {
            return None;
        }
        self.blink = !self.blink;
        Some(self.blink_cmd())
    }

    fn blink_cmd(&mut self) -> Cmd {
        self.blink_tag += 1;
        let tag = self.blink_tag;
        let id = self.id;
        tick(self.blink_speed, move |_| Box::new(BlinkMsg { id, tag }) as Msg)
    }

    pub fn view(&self) -> String {
        if self.blink {
            return self.text_style.clone().inline(true).render(&self.char);
        }
        self.style
            .clone()
            .inline(true)
            .reverse(true)
            .render(&self.char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_shows_caret_and_blinks() {
        let mut cursor = Model::new();
        assert!(!cursor.visible());

        let _blink = cursor.focus();
        assert!(cursor.focused());
        assert!(cursor.visible());
    }

    #[test]
    fn test_blink_toggles_only_for_current_tag() {
        let mut cursor = Model::new();
        let _ = cursor.focus();
        let current = BlinkMsg {
            id: cursor.id(),
            tag: cursor.blink_tag,
        };
        let stale = BlinkMsg {
            id: cursor.id(),
            tag: cursor.blink_tag - 1,
        };

        assert!(cursor.update(&stale).is_none());
        assert!(cursor.visible());

        assert!(cursor.update(&current).is_some());
        assert!(!cursor.visible());
    }

    #[test]
    fn test_unfocused_cursor_ignores_blinks() {
        let mut cursor = Model::new();
        let msg = BlinkMsg {
            id: cursor.id(),
            tag: cursor.blink_tag,
        };
        assert!(cursor.update(&msg).is_none());
        assert!(!cursor.visible());
    }

    #[test]
    fn test_blink_from_other_cursor_ignored() {
        let mut cursor = Model::new();
        let _ = cursor.focus();
        let foreign = BlinkMsg {
            id: cursor.id() + 1,
            tag: cursor.blink_tag,
        };
        assert!(cursor.update(&foreign).is_none());
        assert!(cursor.visible());
    }

    #[test]
    fn test_refocus_restarts_blink_chain() {
        let mut cursor = Model::new();
        let _ = cursor.focus();
        let old = BlinkMsg {
            id: cursor.id(),
            tag: cursor.blink_tag,
        };
        let _ = cursor.focus();
        assert!(cursor.update(&old).is_none());
        assert!(cursor.visible());
    }
}
