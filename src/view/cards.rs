//! Card strip rendering.
//!
//! All cards share one moving strip: each face is placed by
//! `StripLayout::card_rect` under the current slide offset, clipped to
//! the strip area. The prev/next affordances render at the strip edges
//! only while the measured overflow flag says content extends past the
//! viewport, and never past the pager's bounds.

use crate::model::{Card, KeyAction};
use crate::state::StripState;
use crate::view::styles::Theme;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Render a card strip into `area`.
///
/// An empty card sequence renders nothing - no faces, no affordances.
pub fn render_card_strip(
    frame: &mut Frame,
    area: Rect,
    cards: &[Card],
    strip: &StripState,
    theme: &Theme,
) {
    if cards.is_empty() || area.width == 0 || area.height == 0 {
        return;
    }

    let offset = strip.offset();
    let layout = strip.layout();
    let focused = strip.pager().index();

    for (i, card) in cards.iter().enumerate() {
        let Some(rect) = layout.card_rect(area, i, offset) else {
            continue;
        };
        render_card_face(frame, rect, card, i == focused, theme);
    }

    if strip.show_prev() {
        render_affordance(frame, area, area.left(), "◀", theme);
    }
    if strip.show_next() {
        render_affordance(frame, area, area.right().saturating_sub(1), "▶", theme);
    }
}

/// Map a click column inside the strip area to a pagination action.
///
/// The edge affordances win over the card underneath them, and only
/// respond while they are visible.
pub fn affordance_at(strip: &StripState, area: Rect, column: u16) -> Option<KeyAction> {
    if strip.show_prev() && column == area.left() {
        return Some(KeyAction::Retreat);
    }
    if strip.show_next() && column == area.right().saturating_sub(1) {
        return Some(KeyAction::Advance);
    }
    None
}

fn render_card_face(frame: &mut Frame, rect: Rect, card: &Card, focused: bool, theme: &Theme) {
    let face = theme.card_face(card.accent);
    let border_type = if focused {
        BorderType::Thick
    } else {
        BorderType::Plain
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .style(face)
        .title(Line::styled(
            format!(" {} ", card.title),
            theme.card_text().add_modifier(Modifier::BOLD),
        ));

    let mut lines = Vec::new();
    if let Some(subtitle) = &card.subtitle {
        lines.push(Line::styled(
            subtitle.clone(),
            theme.card_text().add_modifier(Modifier::ITALIC),
        ));
    }
    lines.push(Line::styled(card.body.clone(), theme.card_text()));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, rect);
}

fn render_affordance(frame: &mut Frame, area: Rect, column: u16, glyph: &str, theme: &Theme) {
    let rect = Rect {
        x: column,
        y: area.y,
        width: 1,
        height: area.height,
    };

    // Pad the glyph down to the vertical middle of the strip.
    let mut lines = vec![Line::from(""); (area.height / 2) as usize];
    lines.push(Line::styled(
        glyph.to_string(),
        theme.primary().add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(Paragraph::new(lines), rect);
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Profile, ThemeMode};
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn theme() -> Theme {
        // Explicitly disable colors so tests only look at symbols.
        Theme::new(ThemeMode::Light, ColorConfig::from_env_and_args(true))
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn draw(cards: &[Card], strip: &StripState, width: u16) -> String {
        let backend = TestBackend::new(width, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = Rect::new(0, 0, width, 9);
                render_card_strip(frame, area, cards, strip, &theme());
            })
            .unwrap();
        buffer_text(&terminal)
    }

    fn about_cards() -> Vec<Card> {
        Profile::builtin().about
    }

    #[test]
    fn renders_visible_card_titles() {
        let cards = about_cards();
        let strip = StripState::new(cards.len());
        let text = draw(&cards, &strip, 80);

        assert!(text.contains("Introduction"), "first card title visible");
        assert!(text.contains("My Skill"), "second card title visible");
    }

    #[test]
    fn empty_sequence_renders_nothing() {
        let strip = StripState::new(0);
        let text = draw(&[], &strip, 80);
        assert!(text.trim().is_empty(), "no cards, no faces, no affordances");
    }

    #[test]
    fn fitting_strip_shows_no_affordances() {
        let cards = about_cards();
        let mut strip = StripState::new(cards.len());
        // 2 cards * 32-cell stride fit comfortably in 80 cells.
        strip.measure(Rect::new(0, 0, 80, 9));

        let text = draw(&cards, &strip, 80);
        assert!(!text.contains('◀'));
        assert!(!text.contains('▶'));
    }

    #[test]
    fn overflowing_strip_shows_only_forward_at_start() {
        let cards = about_cards();
        let mut strip = StripState::new(cards.len());
        strip.measure(Rect::new(0, 0, 40, 9));

        let text = draw(&cards, &strip, 40);
        assert!(!text.contains('◀'), "nothing to go back to at the first card");
        assert!(text.contains('▶'));
    }

    #[test]
    fn overflowing_strip_shows_back_after_advancing() {
        let cards = about_cards();
        let mut strip = StripState::new(cards.len());
        strip.apply(KeyAction::Advance);
        // Let the slide settle, then measure at the new position.
        while strip.tick().animating {}
        strip.measure(Rect::new(0, 0, 40, 9));

        let text = draw(&cards, &strip, 40);
        assert!(text.contains('◀'));
        assert!(!text.contains('▶'), "last card reached, forward hidden");
    }

    #[test]
    fn advancing_slides_the_first_card_out() {
        let cards = about_cards();
        let mut strip = StripState::new(cards.len());
        strip.apply(KeyAction::Advance);
        while strip.tick().animating {}

        let text = draw(&cards, &strip, 40);
        assert!(text.contains("My Skill"), "second card slid into view");
    }

    mod affordance_hits {
        use super::*;

        fn overflowing_strip(index_moves: usize) -> StripState {
            let mut strip = StripState::new(3);
            for _ in 0..index_moves {
                strip.apply(KeyAction::Advance);
                while strip.tick().animating {}
            }
            strip.measure(Rect::new(0, 0, 40, 9));
            strip
        }

        #[test]
        fn left_edge_maps_to_retreat_when_visible() {
            let strip = overflowing_strip(1);
            let area = Rect::new(0, 0, 40, 9);
            assert_eq!(affordance_at(&strip, area, 0), Some(KeyAction::Retreat));
        }

        #[test]
        fn right_edge_maps_to_advance_when_visible() {
            let strip = overflowing_strip(0);
            let area = Rect::new(0, 0, 40, 9);
            assert_eq!(affordance_at(&strip, area, 39), Some(KeyAction::Advance));
        }

        #[test]
        fn hidden_affordances_do_not_respond() {
            let strip = overflowing_strip(0);
            let area = Rect::new(0, 0, 40, 9);
            assert_eq!(affordance_at(&strip, area, 0), None, "at_start hides retreat");
        }

        #[test]
        fn interior_columns_are_not_affordances() {
            let strip = overflowing_strip(1);
            let area = Rect::new(0, 0, 40, 9);
            assert_eq!(affordance_at(&strip, area, 20), None);
        }
    }
}
