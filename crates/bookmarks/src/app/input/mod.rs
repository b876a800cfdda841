//! Key interpretation and list actions.
//!
//! Each key is resolved against the armed sequence into at most one
//! `Action`, applied to the app, and then the armed sequence advances:
//! whatever was armed is consumed, and otherwise `g`, `d` or `y` arm their
//! sequence for the next key only. `ddd` therefore deletes once.
//!
//! Mutations are applied to a copy of the list, saved, and only then
//! committed, so a failed save leaves memory matching the file.

use crossterm::event::KeyEvent;

use crate::bookmarks::BookmarkList;
use crate::error::{Error, Result};
use crate::keymap::{key_from_event, Key};

use super::state::{App, Sequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Action {
    Quit,
    MoveDown,
    MoveUp,
    JumpTop,
    JumpBottom,
    Delete,
    Copy,
    Undo,
    Add,
    ToggleHelp,
}

pub(super) fn handle_key(app: &mut App, event: KeyEvent) {
    let Some(key) = key_from_event(event) else {
        return;
    };
    let armed = app.armed.take();
    let action = resolve(key, armed);
    tracing::debug!(%key, ?armed, ?action, "key");

    if let Some(action) = action {
        apply(app, action);
    }

    app.armed = match armed {
        Some(_) => None,
        None => sequence_started_by(key),
    };
}

pub(super) fn resolve(key: Key, armed: Option<Sequence>) -> Option<Action> {
    match key {
        Key::Char('q') | Key::Interrupt => Some(Action::Quit),
        Key::Char('j') | Key::Down => Some(Action::MoveDown),
        Key::Char('k') | Key::Up => Some(Action::MoveUp),
        Key::Char('g') if armed == Some(Sequence::Top) => Some(Action::JumpTop),
        Key::Char('G') | Key::End => Some(Action::JumpBottom),
        Key::Char('d') if armed == Some(Sequence::Delete) => Some(Action::Delete),
        Key::Char('y') if armed == Some(Sequence::Yank) => Some(Action::Copy),
        Key::Char('u') => Some(Action::Undo),
        Key::Char('a') => Some(Action::Add),
        Key::Char('?') => Some(Action::ToggleHelp),
        _ => None,
    }
}

fn sequence_started_by(key: Key) -> Option<Sequence> {
    match key {
        Key::Char('g') => Some(Sequence::Top),
        Key::Char('d') => Some(Sequence::Delete),
        Key::Char('y') => Some(Sequence::Yank),
        _ => None,
    }
}

fn apply(app: &mut App, action: Action) {
    let outcome = match action {
        Action::Quit => {
            app.should_quit = true;
            Ok(None)
        }
        Action::MoveDown => {
            app.bookmarks.move_down();
            Ok(None)
        }
        Action::MoveUp => {
            app.bookmarks.move_up();
            Ok(None)
        }
        Action::JumpTop => {
            app.bookmarks.jump_top();
            Ok(None)
        }
        Action::JumpBottom => {
            app.bookmarks.jump_bottom();
            Ok(None)
        }
        Action::Delete => delete_selected(app),
        Action::Copy => copy_selected(app),
        Action::Undo => undo_delete(app),
        Action::Add => add_from_clipboard(app),
        Action::ToggleHelp => {
            app.help_visible = !app.help_visible;
            app.refresh_requested = true;
            Ok(None)
        }
    };

    match outcome {
        Ok(Some(message)) => app.set_output(message),
        Ok(None) => app.clear_output(),
        Err(err) => {
            tracing::warn!(?action, %err, "action failed");
            app.set_error(&err);
        }
    }
}

/// Save `next` and make it the current list. On failure nothing changes.
fn commit(app: &mut App, next: BookmarkList) -> Result<()> {
    app.store.save(next.entries())?;
    app.bookmarks = next;
    Ok(())
}

fn no_selection(bookmarks: &BookmarkList) -> Error {
    Error::Index {
        index: 0,
        len: bookmarks.len(),
    }
}

fn delete_selected(app: &mut App) -> Result<Option<String>> {
    let index = app
        .bookmarks
        .selection()
        .ok_or_else(|| no_selection(&app.bookmarks))?;
    let mut next = app.bookmarks.clone();
    let removed = next.remove_at(index)?;
    commit(app, next)?;
    tracing::info!(index, entry = %removed, "deleted bookmark");
    let message = format!("Deleted {removed} (u to undo)");
    app.undo = Some(removed);
    Ok(Some(message))
}

fn copy_selected(app: &mut App) -> Result<Option<String>> {
    let entry = match app.bookmarks.selected() {
        Some(entry) => entry.to_string(),
        None => return Err(no_selection(&app.bookmarks)),
    };
    app.clipboard.set_text(&entry)?;
    Ok(Some(format!("Copied {entry}")))
}

fn undo_delete(app: &mut App) -> Result<Option<String>> {
    let Some(entry) = app.undo.clone() else {
        return Ok(None);
    };
    let mut next = app.bookmarks.clone();
    next.insert(entry.clone());
    commit(app, next)?;
    app.undo = None;
    tracing::info!(entry = %entry, "restored bookmark");
    Ok(Some(format!("Restored {entry}")))
}

fn add_from_clipboard(app: &mut App) -> Result<Option<String>> {
    let text = app.clipboard.get_text()?;
    let entry = clipboard_entry(text)?;
    let mut next = app.bookmarks.clone();
    next.insert(entry.clone());
    commit(app, next)?;
    tracing::info!(entry = %entry, "added bookmark");
    Ok(Some(format!("Added {entry}")))
}

/// Turn clipboard text into a single-line entry. One trailing line break
/// is dropped; anything else that would split the line is rejected.
fn clipboard_entry(mut text: String) -> Result<String> {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    if text.contains(['\n', '\r']) {
        return Err(Error::InvalidEntry(
            "Clipboard text spans multiple lines.".to_string(),
        ));
    }
    if text.trim().is_empty() {
        return Err(Error::InvalidEntry("Clipboard is empty.".to_string()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests;
