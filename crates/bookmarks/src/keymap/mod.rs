//! Key token decoding.
//!
//! Turns crossterm `KeyEvent`s into the small set of named keys the list
//! understands. Tokens print the way they are written in the help text and
//! logs: `j`, `G`, `<Down>`, `<C-c>`.

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    End,
    Interrupt,
    Other,
}

/// Decode a key event. Releases return `None` so they never reach the
/// interpreter; anything unrecognised becomes `Key::Other`.
pub fn key_from_event(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);
    let meta = event.modifiers.contains(KeyModifiers::SUPER)
        || event.modifiers.contains(KeyModifiers::META);

    let key = match event.code {
        KeyCode::Char(ch) if ctrl && !alt && !meta && ch.eq_ignore_ascii_case(&'c') => {
            Key::Interrupt
        }
        KeyCode::Char(_) if ctrl || alt || meta => Key::Other,
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::End => Key::End,
        _ => Key::Other,
    };
    Some(key)
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(ch) => write!(f, "{ch}"),
            Key::Up => f.write_str("<Up>"),
            Key::Down => f.write_str("<Down>"),
            Key::End => f.write_str("<End>"),
            Key::Interrupt => f.write_str("<C-c>"),
            Key::Other => f.write_str("<Other>"),
        }
    }
}
