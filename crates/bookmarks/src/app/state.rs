//! Application state types.
//!
//! `App` is the whole session: the list, the undo slot, the armed key
//! sequence, view flags, and the collaborators (store, clipboard) that
//! actions write through to.

use ratatui::layout::Rect;
use ratatui::widgets::ListState;

use crate::bookmarks::BookmarkList;
use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::error::Error;
use crate::store::Store;

/// Two-keystroke commands. A first `g`, `d` or `y` arms the sequence and
/// only the very next key can complete it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {
    Top,
    Delete,
    Yank,
}

/// Transient message shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
}

pub struct App {
    pub bookmarks: BookmarkList,
    pub list_state: ListState,
    pub undo: Option<String>,
    pub armed: Option<Sequence>,
    pub help_visible: bool,
    /// Help overlay placement, fixed from the terminal size at startup.
    pub help_area: Rect,
    pub output: Option<Status>,
    pub should_quit: bool,
    pub refresh_requested: bool,
    pub config: Config,
    pub store: Store,
    pub clipboard: Box<dyn Clipboard>,
}

impl App {
    pub fn new(
        config: Config,
        store: Store,
        entries: Vec<String>,
        clipboard: Box<dyn Clipboard>,
        terminal_size: (u16, u16),
    ) -> Self {
        let (width, height) = terminal_size;
        Self {
            bookmarks: BookmarkList::new(entries),
            list_state: ListState::default(),
            undo: None,
            armed: None,
            help_visible: false,
            help_area: quarter_rect(width, height),
            output: None,
            should_quit: false,
            refresh_requested: false,
            config,
            store,
            clipboard,
        }
    }

    /// Set the message shown in the status bar.
    pub fn set_output(&mut self, message: String) {
        let trimmed = message.trim().to_string();
        if trimmed.is_empty() {
            self.output = None;
        } else {
            self.output = Some(Status {
                text: trimmed,
                is_error: false,
            });
        }
    }

    pub fn set_error(&mut self, err: &Error) {
        self.output = Some(Status {
            text: err.to_string(),
            is_error: true,
        });
    }

    pub fn clear_output(&mut self) {
        self.output = None;
    }
}

/// The middle half of the screen in both directions.
fn quarter_rect(width: u16, height: u16) -> Rect {
    let x1 = width / 4;
    let y1 = height / 4;
    let x2 = (u32::from(width) * 3 / 4) as u16;
    let y2 = (u32::from(height) * 3 / 4) as u16;
    Rect::new(x1, y1, x2 - x1, y2 - y1)
}

pub const STATUS_HORIZONTAL_PADDING: u16 = 1;
