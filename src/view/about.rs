//! About page: heading plus one paginated card strip.

use crate::model::Profile;
use crate::state::StripState;
use crate::view::cards::render_card_strip;
use crate::view::constants::CARD_HEIGHT;
use crate::view::helpers::empty_line;
use crate::view::styles::Theme;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Render the about page. Returns the strip's area for measurement and
/// hit testing, or `None` when there was no room to render it.
pub fn render_about(
    frame: &mut Frame,
    area: Rect,
    profile: &Profile,
    strip: &StripState,
    theme: &Theme,
) -> Option<Rect> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // heading
            Constraint::Length(CARD_HEIGHT), // card strip
            Constraint::Min(0),
        ])
        .split(area);

    let heading = Paragraph::new(vec![
        empty_line(),
        Line::styled(format!("Hello, I am {}!", profile.owner), theme.heading()),
    ])
    .style(theme.background());
    frame.render_widget(heading, chunks[0]);

    let strip_area = chunks[1];
    if strip_area.height < CARD_HEIGHT {
        return None;
    }
    render_card_strip(frame, strip_area, &profile.about, strip, theme);
    Some(strip_area)
}

// ===== Tests =====
