//! Card drawer overlay.
//!
//! A centered panel over the page showing the open card's full body and
//! its external links. Dismissed with Esc or a click outside the panel.

use crate::model::Card;
use crate::view::constants::{DRAWER_HEIGHT_PERCENT, DRAWER_WIDTH_PERCENT};
use crate::view::helpers::{centered_rect, empty_line};
use crate::view::styles::Theme;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// The drawer's on-screen rect for a given frame area.
///
/// Exposed so the event loop can tell panel clicks from backdrop
/// dismissals.
pub fn drawer_area(frame_area: Rect) -> Rect {
    centered_rect(DRAWER_WIDTH_PERCENT, DRAWER_HEIGHT_PERCENT, frame_area)
}

/// Render the drawer for `card` centered on the frame.
pub fn render_drawer(frame: &mut Frame, card: &Card, theme: &Theme) {
    let area = drawer_area(frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", card.title),
            theme.heading(),
        ))
        .borders(Borders::ALL)
        .border_style(theme.card_accent(card.accent))
        .style(theme.background());

    let mut lines = Vec::new();
    if let Some(subtitle) = &card.subtitle {
        lines.push(Line::styled(
            subtitle.clone(),
            theme.secondary().add_modifier(Modifier::ITALIC),
        ));
        lines.push(empty_line());
    }
    lines.push(Line::styled(card.body.clone(), theme.primary()));

    if !card.links.is_empty() {
        lines.push(empty_line());
        if let Some(source) = &card.links.source {
            lines.push(link_line("Source", source, theme));
        }
        if let Some(demo) = &card.links.demo {
            lines.push(link_line("Demo", demo, theme));
        }
    }

    let body = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(body, area);

    // Dismissal hint on the bottom border.
    let hint_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Esc to close ",
        theme.secondary().add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

fn link_line(label: &str, url: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), theme.secondary()),
        Span::styled(
            url.to_string(),
            theme.primary().add_modifier(Modifier::UNDERLINED),
        ),
    ])
}

// ===== Tests =====
