use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};

use super::super::state::App;

const LIST_TITLE: &str = "Bookmarks - ? for help";

/// Render the bookmark list. `ListState` scrolls so the selection stays
/// visible.
pub(super) fn render_list(app: &mut App, frame: &mut ratatui::Frame, area: Rect) {
    let highlight = match app.config.ui.highlight {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::Cyan,
    };
    let items: Vec<ListItem> = app
        .bookmarks
        .entries()
        .iter()
        .map(|entry| ListItem::new(Line::raw(entry.as_str())))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(LIST_TITLE))
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(highlight));

    app.list_state.select(app.bookmarks.selection());
    frame.render_stateful_widget(list, area, &mut app.list_state);
}
