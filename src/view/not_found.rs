//! Not-found page for unknown page names.

use crate::view::helpers::empty_line;
use crate::view::styles::Theme;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Render the not-found page.
pub fn render_not_found(frame: &mut Frame, area: Rect, theme: &Theme) {
    let mut lines = vec![empty_line(); (area.height / 3) as usize];
    lines.push(Line::styled("404: Not Found", theme.heading()));
    lines.push(empty_line());
    lines.push(Line::styled(
        "The page you asked for does not exist.",
        theme.secondary(),
    ));
    lines.push(empty_line());
    lines.push(Line::styled(
        "Instead, I have a little gift for you: https://youtu.be/dQw4w9WgXcQ",
        theme.secondary(),
    ));

    let paragraph = Paragraph::new(lines)
        .style(theme.background())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
