use super::{clipboard_entry, handle_key, resolve, Action};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::app::state::{App, Sequence};
use crate::clipboard::MemoryClipboard;
use crate::config::{Config, StoreConfig, UiConfig};
use crate::error::Error;
use crate::keymap::Key;
use crate::store::Store;

struct Harness {
    app: App,
    clipboard: MemoryClipboard,
    dir: TempDir,
}

impl Harness {
    fn new(items: &[&str], clipboard: MemoryClipboard) -> Self {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join(".bookmarks");
        fs::write(&path, items.join("\n")).expect("seed bookmarks");
        let store = Store::new(&path);
        let entries = store.load().expect("load");
        let config = Config {
            store: StoreConfig { path },
            ui: UiConfig { highlight: None },
        };
        let app = App::new(config, store, entries, Box::new(clipboard.clone()), (80, 24));
        Self { app, clipboard, dir }
    }

    fn path(&self) -> &Path {
        self.app.store.path()
    }

    fn press(&mut self, keys: &str) {
        for ch in keys.chars() {
            handle_key(&mut self.app, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
        }
    }

    fn press_code(&mut self, code: KeyCode) {
        handle_key(&mut self.app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn entries(&self) -> Vec<&str> {
        self.app
            .bookmarks
            .entries()
            .iter()
            .map(String::as_str)
            .collect()
    }

    fn file(&self) -> String {
        fs::read_to_string(self.path()).expect("read bookmarks")
    }

    fn status(&self) -> Option<(&str, bool)> {
        self.app
            .output
            .as_ref()
            .map(|status| (status.text.as_str(), status.is_error))
    }
}

#[test]
fn resolve_follows_dispatch_table() {
    assert_eq!(resolve(Key::Char('q'), None), Some(Action::Quit));
    assert_eq!(resolve(Key::Interrupt, Some(Sequence::Delete)), Some(Action::Quit));
    assert_eq!(resolve(Key::Down, None), Some(Action::MoveDown));
    assert_eq!(resolve(Key::Char('k'), None), Some(Action::MoveUp));
    assert_eq!(resolve(Key::Char('g'), None), None);
    assert_eq!(resolve(Key::Char('g'), Some(Sequence::Top)), Some(Action::JumpTop));
    assert_eq!(resolve(Key::Char('g'), Some(Sequence::Delete)), None);
    assert_eq!(resolve(Key::End, None), Some(Action::JumpBottom));
    assert_eq!(resolve(Key::Char('G'), None), Some(Action::JumpBottom));
    assert_eq!(resolve(Key::Char('d'), Some(Sequence::Delete)), Some(Action::Delete));
    assert_eq!(resolve(Key::Char('d'), Some(Sequence::Yank)), None);
    assert_eq!(resolve(Key::Char('y'), Some(Sequence::Yank)), Some(Action::Copy));
    assert_eq!(resolve(Key::Char('u'), None), Some(Action::Undo));
    assert_eq!(resolve(Key::Char('a'), None), Some(Action::Add));
    assert_eq!(resolve(Key::Char('?'), None), Some(Action::ToggleHelp));
    assert_eq!(resolve(Key::Other, None), None);
}

#[test]
fn add_appends_clipboard_text_and_saves() {
    let mut harness = Harness::new(&["a", "b"], MemoryClipboard::with_text("c"));

    harness.press("a");

    assert_eq!(harness.entries(), ["a", "b", "c"]);
    assert_eq!(harness.file(), "a\nb\nc");
    assert_eq!(harness.status(), Some(("Added c", false)));
}

#[test]
fn delete_then_undo_reappends_entry() {
    let mut harness = Harness::new(&["a", "b", "c"], MemoryClipboard::default());
    harness.press("j");
    assert_eq!(harness.app.bookmarks.selection(), Some(1));

    harness.press("dd");
    assert_eq!(harness.entries(), ["a", "c"]);
    assert_eq!(harness.app.undo.as_deref(), Some("b"));
    assert_eq!(harness.file(), "a\nc");
    assert_eq!(harness.app.bookmarks.selected(), Some("c"));

    harness.press("u");
    assert_eq!(harness.entries(), ["a", "c", "b"]);
    assert_eq!(harness.app.undo, None);
    assert_eq!(harness.file(), "a\nc\nb");
    assert_eq!(harness.status(), Some(("Restored b", false)));
}

#[test]
fn undo_without_delete_does_nothing() {
    let mut harness = Harness::new(&["a"], MemoryClipboard::default());

    harness.press("u");

    assert_eq!(harness.entries(), ["a"]);
    assert_eq!(harness.status(), None);
}

#[test]
fn delete_sequence_does_not_chain() {
    let mut harness = Harness::new(&["a", "b", "c"], MemoryClipboard::default());

    harness.press("ddd");

    assert_eq!(harness.entries(), ["b", "c"]);
    assert_eq!(harness.app.armed, Some(Sequence::Delete));
}

#[test]
fn interrupted_sequence_does_not_fire() {
    let mut harness = Harness::new(&["a", "b", "c"], MemoryClipboard::default());

    harness.press("djd");

    assert_eq!(harness.entries(), ["a", "b", "c"]);
    assert_eq!(harness.app.bookmarks.selection(), Some(1));
}

#[test]
fn armed_key_is_consumed_even_when_sequence_misses() {
    let mut harness = Harness::new(&["a", "b", "c"], MemoryClipboard::default());

    // `g` arms, `d` misses and is consumed, so the next `d` only arms.
    harness.press("gdd");

    assert_eq!(harness.entries(), ["a", "b", "c"]);
    assert_eq!(harness.app.armed, Some(Sequence::Delete));
}

#[test]
fn key_release_does_not_touch_armed_sequence() {
    let mut harness = Harness::new(&["a", "b"], MemoryClipboard::default());
    harness.press("d");

    let mut release = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    handle_key(&mut harness.app, release);
    assert_eq!(harness.app.armed, Some(Sequence::Delete));

    harness.press("d");
    assert_eq!(harness.entries(), ["b"]);
}

#[test]
fn copy_writes_selected_entry_to_clipboard() {
    let mut harness = Harness::new(&["x", "y"], MemoryClipboard::default());

    harness.press("yy");

    assert_eq!(harness.clipboard.contents().as_deref(), Some("x"));
    assert_eq!(harness.entries(), ["x", "y"]);
    assert_eq!(harness.status(), Some(("Copied x", false)));
}

#[test]
fn delete_on_empty_list_reports_error() {
    let mut harness = Harness::new(&[], MemoryClipboard::default());

    harness.press("dd");

    assert!(harness.entries().is_empty());
    assert_eq!(harness.app.undo, None);
    assert!(matches!(harness.status(), Some((_, true))));
    assert!(!harness.app.should_quit);
}

#[test]
fn copy_on_empty_list_reports_error() {
    let mut harness = Harness::new(&[], MemoryClipboard::default());

    harness.press("yy");

    assert_eq!(harness.clipboard.contents(), None);
    assert!(matches!(harness.status(), Some((_, true))));
}

#[test]
fn navigation_moves_and_clamps_selection() {
    let mut harness = Harness::new(&["a", "b", "c"], MemoryClipboard::default());

    harness.press_code(KeyCode::End);
    assert_eq!(harness.app.bookmarks.selection(), Some(2));
    harness.press("j");
    harness.press_code(KeyCode::Down);
    assert_eq!(harness.app.bookmarks.selection(), Some(2));

    harness.press("gg");
    assert_eq!(harness.app.bookmarks.selection(), Some(0));
    harness.press_code(KeyCode::Up);
    harness.press("k");
    assert_eq!(harness.app.bookmarks.selection(), Some(0));

    harness.press("G");
    assert_eq!(harness.app.bookmarks.selection(), Some(2));
}

#[test]
fn jump_bottom_on_empty_list_has_no_selection() {
    let mut harness = Harness::new(&[], MemoryClipboard::default());

    harness.press("G");

    assert_eq!(harness.app.bookmarks.selection(), None);
}

#[test]
fn add_into_empty_list_selects_it() {
    let mut harness = Harness::new(&[], MemoryClipboard::with_text("https://example.com\n"));

    harness.press("a");

    assert_eq!(harness.entries(), ["https://example.com"]);
    assert_eq!(harness.app.bookmarks.selection(), Some(0));
    assert_eq!(harness.file(), "https://example.com");
}

#[test]
fn add_rejects_multiline_clipboard() {
    let mut harness = Harness::new(&["a"], MemoryClipboard::with_text("one\ntwo"));

    harness.press("a");

    assert_eq!(harness.entries(), ["a"]);
    assert_eq!(harness.file(), "a");
    assert!(matches!(harness.status(), Some((_, true))));
}

#[test]
fn clipboard_failure_is_reported() {
    let mut harness = Harness::new(&["a"], MemoryClipboard::failing());

    harness.press("a");
    assert_eq!(harness.entries(), ["a"]);
    assert_eq!(harness.status(), Some(("clipboard: unavailable", true)));

    harness.press("yy");
    assert_eq!(harness.status(), Some(("clipboard: unavailable", true)));
}

#[test]
fn failed_save_keeps_previous_state() {
    let mut harness = Harness::new(&["a", "b"], MemoryClipboard::with_text("c"));
    // Replace the file with a directory so every save fails.
    fs::remove_file(harness.path()).expect("remove bookmarks");
    fs::create_dir(harness.dir.path().join(".bookmarks")).expect("create dir");

    harness.press("a");
    assert_eq!(harness.entries(), ["a", "b"]);
    assert!(matches!(harness.status(), Some((_, true))));

    harness.press("dd");
    assert_eq!(harness.entries(), ["a", "b"]);
    assert_eq!(harness.app.undo, None);
    assert_eq!(harness.app.bookmarks.selection(), Some(0));
}

#[test]
fn failed_undo_keeps_undo_slot() {
    let mut harness = Harness::new(&["a", "b"], MemoryClipboard::default());
    harness.press("dd");
    assert_eq!(harness.app.undo.as_deref(), Some("a"));

    fs::remove_file(harness.path()).expect("remove bookmarks");
    fs::create_dir(harness.dir.path().join(".bookmarks")).expect("create dir");
    harness.press("u");

    assert_eq!(harness.entries(), ["b"]);
    assert_eq!(harness.app.undo.as_deref(), Some("a"));
}

#[test]
fn help_toggle_requests_refresh() {
    let mut harness = Harness::new(&["a"], MemoryClipboard::default());

    harness.press("?");
    assert!(harness.app.help_visible);
    assert!(harness.app.refresh_requested);

    harness.press("?");
    assert!(!harness.app.help_visible);
}

#[test]
fn quit_keys_set_should_quit() {
    let mut harness = Harness::new(&["a"], MemoryClipboard::default());
    harness.press("q");
    assert!(harness.app.should_quit);

    let mut harness = Harness::new(&["a"], MemoryClipboard::default());
    handle_key(
        &mut harness.app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(harness.app.should_quit);
}

#[test]
fn clipboard_entry_normalises_line_endings() {
    assert_eq!(clipboard_entry("a\r\n".to_string()).expect("entry"), "a");
    assert_eq!(clipboard_entry("a".to_string()).expect("entry"), "a");
    assert!(matches!(
        clipboard_entry("a\r\nb".to_string()),
        Err(Error::InvalidEntry(_))
    ));
    assert!(matches!(
        clipboard_entry("   \n".to_string()),
        Err(Error::InvalidEntry(_))
    ));
}
