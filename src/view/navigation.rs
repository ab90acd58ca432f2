//! Navigation bar.
//!
//! One fixed row at the top: brand on the left, page links in the
//! middle, theme mode and repository URL on the right. The current
//! page's link is underlined; switching happens via the page actions.

use crate::state::Page;
use crate::view::styles::Theme;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Render the navigation bar.
pub fn render_navigation(
    frame: &mut Frame,
    area: Rect,
    brand: &str,
    current: Page,
    repo_url: Option<&str>,
    theme: &Theme,
) {
    let mut spans = vec![
        Span::styled(format!(" {brand}"), theme.heading()),
        Span::raw("   "),
    ];

    for page in [Page::Home, Page::About, Page::Projects] {
        let style = if page == current {
            theme.primary().add_modifier(Modifier::UNDERLINED)
        } else {
            theme.secondary()
        };
        spans.push(Span::styled(page.title(), style));
        spans.push(Span::raw("  "));
    }

    // Right-aligned trailer: theme mode and repo link.
    let trailer = match repo_url {
        Some(url) => format!("[{}]  {} ", theme.mode().as_str(), url),
        None => format!("[{}] ", theme.mode().as_str()),
    };
    let used: usize = spans.iter().map(|s| s.content.width()).sum();
    let pad = (area.width as usize).saturating_sub(used + trailer.width());
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(Span::styled(trailer, theme.secondary()));

    let bar = Paragraph::new(Line::from(spans)).style(theme.background());
    frame.render_widget(bar, area);
}

// ===== Tests =====
