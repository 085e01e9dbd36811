//! Single-line input buffer for typing a duration.
//!
//! The buffer holds up to `char_limit` characters and a cursor position,
//! and supports the usual editing keys: character insert, backspace and
//! delete, left/right, home/end, and the readline-style `ctrl+w`, `ctrl+u`
//! and `ctrl+k`.
//!
//! ```rust
//! use hourglass::key::KeyPress;
//! use hourglass::textinput::new;
//!
//! let mut input = new();
//! input.set_char_limit(20);
//! input.set_placeholder("5m");
//! let _blink = input.focus();
//! for spec in ["1", "h", "3", "0", "m"] {
//!     input.handle_key(&KeyPress::parse(spec).unwrap());
//! }
//! assert_eq!(input.value(), "1h30m");
//! assert_eq!(input.position(), 5);
//! ```

pub mod keymap;
pub mod model;
pub mod view;


pub use keymap::{default_key_map, KeyMap};
pub use model::{new, Model};
