//! In-memory bookmark list and its selection.
//!
//! The selection is `None` exactly when the list is empty. Everything else
//! keeps it inside `0..len`.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkList {
    entries: Vec<String>,
    selection: Option<usize>,
}

impl BookmarkList {
    pub fn new(entries: Vec<String>) -> Self {
        let selection = if entries.is_empty() { None } else { Some(0) };
        Self { entries, selection }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn selected(&self) -> Option<&str> {
        self.selection
            .and_then(|index| self.entries.get(index))
            .map(String::as_str)
    }

    pub fn move_down(&mut self) {
        if let Some(index) = self.selection {
            if index + 1 < self.entries.len() {
                self.selection = Some(index + 1);
            }
        }
    }

    pub fn move_up(&mut self) {
        if let Some(index) = self.selection {
            self.selection = Some(index.saturating_sub(1));
        }
    }

    pub fn jump_top(&mut self) {
        self.selection = if self.is_empty() { None } else { Some(0) };
    }

    pub fn jump_bottom(&mut self) {
        self.selection = self.entries.len().checked_sub(1);
    }

    /// Append an entry. The selection stays where it was, or lands on the
    /// new entry if the list was empty.
    pub fn insert(&mut self, entry: String) {
        self.entries.push(entry);
        if self.selection.is_none() {
            self.selection = Some(0);
        }
    }

    /// Remove the entry at `index`. The selection keeps its index, so it now
    /// points at the entry that shifted into the slot; it is clamped when the
    /// last entry goes away.
    pub fn remove_at(&mut self, index: usize) -> Result<String> {
        let len = self.entries.len();
        if index >= len {
            return Err(Error::Index { index, len });
        }
        let removed = self.entries.remove(index);
        self.selection = match self.selection {
            _ if self.entries.is_empty() => None,
            Some(selected) => Some(selected.min(self.entries.len() - 1)),
            None => Some(0),
        };
        Ok(removed)
    }
}
