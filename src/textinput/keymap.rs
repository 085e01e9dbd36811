//! Editing keys for the input buffer.

use crate::key::Binding;

#[derive(Debug, Clone)]
pub struct KeyMap {
    pub character_forward: Binding,
    pub character_backward: Binding,
    pub delete_word_backward: Binding,
    pub delete_after_cursor: Binding,
    pub delete_before_cursor: Binding,
    pub delete_character_backward: Binding,
    pub delete_character_forward: Binding,
    pub line_start: Binding,
    pub line_end: Binding,
}

pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: Binding::from_specs(&["right", "ctrl+f"]),
        character_backward: Binding::from_specs(&["left", "ctrl+b"]),
        delete_word_backward: Binding::from_specs(&["alt+backspace", "ctrl+w"]),
        delete_after_cursor: Binding::from_specs(&["ctrl+k"]),
        delete_before_cursor: Binding::from_specs(&["ctrl+u"]),
        delete_character_backward: Binding::from_specs(&["backspace", "ctrl+h"]),
        delete_character_forward: Binding::from_specs(&["delete", "ctrl+d"]),
        line_start: Binding::from_specs(&["home", "ctrl+a"]),
        line_end: Binding::from_specs(&["end", "ctrl+e"]),
    }
}
