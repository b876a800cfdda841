use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::super::state::App;

const HELP_TEXT: &str = "q - quit
? - help menu

a - add from clipboard
dd - delete
yy - copy
u - undo

j - down
k - up
gg - scroll to top
G - scroll to bottom
";

/// Render the help panel at its startup position, clipped to the frame.
pub(super) fn render_help(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    let overlay_rect = app.help_area.intersection(area);
    if overlay_rect.is_empty() {
        return;
    }
    frame.render_widget(Clear, overlay_rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Help")
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(
        Paragraph::new(HELP_TEXT)
            .block(block)
            .style(Style::default().fg(Color::White)),
        overlay_rect,
    );
}
