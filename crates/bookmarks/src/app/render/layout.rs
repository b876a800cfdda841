use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::super::state::{App, STATUS_HORIZONTAL_PADDING};

/// Render the status bar with the latest message, errors in red.
pub(super) fn render_status_bar(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    let Some(status) = &app.output else {
        return;
    };
    let color = if status.is_error {
        Color::Red
    } else {
        Color::Gray
    };
    let line = Line::from(Span::styled(
        status.text.as_str(),
        Style::default().fg(color),
    ));
    frame.render_widget(
        Paragraph::new(line),
        inset_horizontal(area, STATUS_HORIZONTAL_PADDING),
    );
}

/// Inset a rect horizontally by padding on each side.
fn inset_horizontal(area: Rect, padding: u16) -> Rect {
    if area.width <= padding * 2 {
        return area;
    }
    Rect {
        x: area.x + padding,
        width: area.width - padding * 2,
        ..area
    }
}
