//! UI rendering.
//!
//! Layout, top to bottom: the bookmark list filling the screen, then a
//! one-line status bar when there is a message. The help overlay is drawn
//! last, on top of everything.

mod layout;
mod list;
mod overlays;

use ratatui::layout::{Constraint, Direction, Layout};

use super::state::App;

/// Main render entry point. Called after every handled event.
pub fn render(app: &mut App, frame: &mut ratatui::Frame) {
    let area = frame.area();
    let status_height = u16::from(app.output.is_some());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(status_height)])
        .split(area);

    list::render_list(app, frame, chunks[0]);
    if status_height > 0 {
        layout::render_status_bar(app, frame, chunks[1]);
    }

    if app.help_visible {
        overlays::render_help(app, frame, area);
    }
}
