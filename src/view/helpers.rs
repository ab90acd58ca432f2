//! Small shared rendering helpers.

use ratatui::layout::Rect;
use ratatui::text::Line;

/// An empty line for vertical spacing in composed paragraphs.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// Rect centered in `area` covering the given percentages of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}
