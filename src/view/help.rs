//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped
//! by category. Triggered by '?', dismissed by 'Esc' or '?'.

use crate::view::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use crate::view::helpers::{centered_rect, empty_line};
use crate::view::styles::Theme;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Render the help overlay centered on the screen.
///
/// Shortcuts are grouped by category: Cards, Pages, Drawer, Appearance,
/// and Application.
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(theme))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(theme.primary())
                .style(theme.background()),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint at the bottom
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        theme.secondary().add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// Build the help content lines grouped by category.
fn build_help_content(theme: &Theme) -> Vec<Line<'static>> {
    let category_style = theme.heading();
    let key_style = theme.primary().add_modifier(Modifier::BOLD);
    let desc_style = theme.secondary();

    let entry = |key: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    vec![
        Line::from(vec![Span::styled("Cards", category_style)]),
        entry("h/←", "Previous card"),
        entry("l/→", "Next card"),
        entry("g/Home", "First card"),
        entry("G/End", "Last card"),
        entry("Enter/Space", "Open card drawer"),
        empty_line(),
        Line::from(vec![Span::styled("Pages", category_style)]),
        entry("1", "Home"),
        entry("2", "About"),
        entry("3", "Projects"),
        entry("Tab", "Next page"),
        entry("j/↓  k/↑", "Scroll section / move category focus"),
        entry("o", "Toggle project category"),
        empty_line(),
        Line::from(vec![Span::styled("Drawer", category_style)]),
        entry("Esc", "Close drawer or this help"),
        empty_line(),
        Line::from(vec![Span::styled("Appearance", category_style)]),
        entry("t", "Toggle light/dark theme"),
        empty_line(),
        Line::from(vec![Span::styled("Application", category_style)]),
        entry("q/Ctrl+c", "Quit"),
        entry("?", "Show this help"),
        entry("r", "Refresh display"),
    ]
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ThemeMode;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw() -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::new(ThemeMode::Light, ColorConfig::from_env_and_args(true));
        terminal
            .draw(|frame| render_help_overlay(frame, &theme))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn help_overlay_shows_every_category() {
        let text = draw();
        for category in ["Cards", "Pages", "Drawer", "Appearance", "Application"] {
            assert!(text.contains(category), "missing category {category}");
        }
    }

    #[test]
    fn help_overlay_mentions_core_bindings() {
        let text = draw();
        assert!(text.contains("Next card"));
        assert!(text.contains("Toggle light/dark theme"));
        assert!(text.contains("Quit"));
    }

    #[test]
    fn help_overlay_shows_dismissal_hint() {
        let text = draw();
        assert!(text.contains("Press Esc or ? to close"));
    }
}
