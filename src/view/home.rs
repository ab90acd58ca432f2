//! Home page: hero section and skill categories.
//!
//! Two full-height sections, one visible at a time; the down/up
//! actions scroll between them. The hero holds the greeting, the owner
//! link, and the blinking arrow; the skills section lays the
//! categories out in columns.

use crate::model::Profile;
use crate::state::HomeSection;
use crate::view::arrow::{BlinkArrow, ARROW_HEIGHT, ARROW_WIDTH};
use crate::view::helpers::empty_line;
use crate::view::styles::Theme;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Render the home page.
pub fn render_home(
    frame: &mut Frame,
    area: Rect,
    profile: &Profile,
    section: HomeSection,
    blink_on: bool,
    theme: &Theme,
) {
    match section {
        HomeSection::Hero => render_hero(frame, area, profile, blink_on, theme),
        HomeSection::Skills => render_skills(frame, area, profile, theme),
    }
}

fn render_hero(frame: &mut Frame, area: Rect, profile: &Profile, blink_on: bool, theme: &Theme) {
    let lines = vec![
        empty_line(),
        Line::styled("Hello!", theme.heading()),
        empty_line(),
        Line::from(vec![
            Span::styled("I am ", theme.secondary()),
            Span::styled(
                profile.owner.clone(),
                theme.primary().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
            Span::styled(",", theme.secondary()),
        ]),
        Line::styled(profile.tagline.clone(), theme.secondary()),
    ];

    let hero = Paragraph::new(lines).style(theme.background());
    let hero_area = Rect {
        x: area.x + area.width / 8,
        y: area.y + area.height / 4,
        width: area.width - area.width / 8,
        height: area.height.saturating_sub(area.height / 4),
    };
    frame.render_widget(hero, hero_area);

    // Blinking arrow, bottom center, inviting the scroll down.
    if area.height > ARROW_HEIGHT + 1 && area.width > ARROW_WIDTH {
        let arrow_area = Rect {
            x: area.x + (area.width - ARROW_WIDTH) / 2,
            y: area.bottom().saturating_sub(ARROW_HEIGHT + 1),
            width: ARROW_WIDTH,
            height: ARROW_HEIGHT,
        };
        frame.render_widget(BlinkArrow::new(blink_on, theme.secondary()), arrow_area);
    }
}

fn render_skills(frame: &mut Frame, area: Rect, profile: &Profile, theme: &Theme) {
    if profile.skills.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = profile
        .skills
        .iter()
        .map(|_| Constraint::Ratio(1, profile.skills.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (category, column) in profile.skills.iter().zip(columns.iter()) {
        let mut lines = vec![
            empty_line(),
            Line::styled(category.title.clone(), theme.heading()),
            empty_line(),
        ];
        for item in &category.items {
            lines.push(Line::styled(item.clone(), theme.secondary()));
        }

        let paragraph = Paragraph::new(lines)
            .style(theme.background())
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(paragraph, *column);
    }
}

// ===== Tests =====
