//! Projects page: collapsible categories, each with its own card strip.
//!
//! Category headers stack vertically; the focused one is emphasized.
//! An open category reveals its strip underneath the header, with its
//! own pager. Rendering walks a y-cursor and stops when the page runs
//! out of rows.

use crate::model::Profile;
use crate::state::{CategoryState, StripState};
use crate::view::cards::render_card_strip;
use crate::view::constants::CARD_HEIGHT;
use crate::view::helpers::empty_line;
use crate::view::styles::Theme;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Render the projects page.
///
/// Returns the strip area of every open category that fit on screen,
/// indexed like `profile.projects`, for measurement and hit testing.
pub fn render_projects(
    frame: &mut Frame,
    area: Rect,
    profile: &Profile,
    strips: &[StripState],
    categories: &CategoryState,
    theme: &Theme,
) -> Vec<Option<Rect>> {
    let mut strip_areas = vec![None; profile.projects.len()];

    let heading = Paragraph::new(vec![empty_line(), Line::styled("Projects", theme.heading())])
        .style(theme.background());
    let heading_height = 3.min(area.height);
    frame.render_widget(
        heading,
        Rect {
            height: heading_height,
            ..area
        },
    );

    let mut y = area.y + heading_height;
    for (i, category) in profile.projects.iter().enumerate() {
        if y >= area.bottom() {
            break;
        }

        let open = categories.is_open(i);
        let focused = categories.focused() == i;
        render_category_header(frame, area, y, &category.name, open, focused, theme);
        y += 2;

        if !open {
            continue;
        }
        if y + CARD_HEIGHT > area.bottom() {
            break;
        }

        let strip_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: CARD_HEIGHT,
        };
        if let Some(strip) = strips.get(i) {
            render_card_strip(frame, strip_area, &category.cards, strip, theme);
            strip_areas[i] = Some(strip_area);
        }
        y += CARD_HEIGHT;
    }

    strip_areas
}

fn render_category_header(
    frame: &mut Frame,
    area: Rect,
    y: u16,
    name: &str,
    open: bool,
    focused: bool,
    theme: &Theme,
) {
    let chevron = if open { "▾" } else { "▸" };
    let style = if focused {
        theme.heading().add_modifier(Modifier::UNDERLINED)
    } else {
        theme.primary()
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {chevron} "), theme.secondary()),
        Span::styled(name.to_string(), style),
    ]))
    .style(theme.background());

    frame.render_widget(
        header,
        Rect {
            x: area.x,
            y,
            width: area.width,
            height: 1,
        },
    );
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ThemeMode;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn theme() -> Theme {
        Theme::new(ThemeMode::Light, ColorConfig::from_env_and_args(true))
    }

    fn draw(categories: &CategoryState) -> (String, Vec<Option<Rect>>) {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let profile = Profile::builtin();
        let strips: Vec<StripState> = profile
            .projects
            .iter()
            .map(|c| StripState::new(c.cards.len()))
            .collect();

        let mut areas = Vec::new();
        terminal
            .draw(|frame| {
                areas = render_projects(
                    frame,
                    frame.area(),
                    &profile,
                    &strips,
                    categories,
                    &theme(),
                );
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        (text, areas)
    }

    #[test]
    fn all_category_headers_render() {
        let categories = CategoryState::new(3);
        let (text, _) = draw(&categories);
        assert!(text.contains("Projects"));
        assert!(text.contains("Python"));
        assert!(text.contains("JS/TS"));
        assert!(text.contains("Web"));
    }

    #[test]
    fn closed_categories_hide_their_cards_and_report_no_area() {
        let categories = CategoryState::new(3);
        let (text, areas) = draw(&categories);
        assert!(!text.contains("Nyanlang"), "closed category shows no cards");
        assert!(areas.iter().all(Option::is_none));
    }

    #[test]
    fn open_category_reveals_its_strip() {
        let mut categories = CategoryState::new(3);
        categories.toggle_focused();
        let (text, areas) = draw(&categories);

        assert!(text.contains("Nyanlang"), "open category shows its first card");
        assert!(areas[0].is_some(), "open category reports its strip area");
        assert!(areas[1].is_none());
        assert!(areas[2].is_none());
    }

    #[test]
    fn open_chevron_differs_from_closed() {
        let mut categories = CategoryState::new(3);
        let (closed_text, _) = draw(&categories);
        assert!(closed_text.contains('▸'));
        assert!(!closed_text.contains('▾'));

        categories.toggle_focused();
        let (open_text, _) = draw(&categories);
        assert!(open_text.contains('▾'));
    }
}
