//! TUI rendering and terminal management (impure shell)

pub mod about;
pub mod arrow;
pub mod cards;
pub mod constants;
pub mod drawer;
pub mod help;
mod helpers;
pub mod home;
pub mod navigation;
pub mod not_found;
pub mod projects;
pub mod styles;

pub use help::render_help_overlay;
pub use helpers::{centered_rect, empty_line};
pub use styles::{ColorConfig, Theme};

use crate::config::KeyBindings;
use crate::model::{KeyAction, Profile, ThemeMode};
use crate::state::{
    handle_overlay_action, handle_page_action, handle_strip_action, AppState, HomeSection, Page,
};
use crate::view::constants::{BLINK_INTERVAL_TICKS, NAV_HEIGHT, TICK_INTERVAL_MS};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Strip areas recorded by the last draw.
///
/// The overflow re-measure and mouse hit testing both read geometry
/// from here instead of poking at live widgets: the draw pass writes
/// plain `Rect` values, measurement consumes them later.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StripAreas {
    /// Area of the about-page strip, when rendered.
    pub about: Option<Rect>,
    /// Area of each project category's strip, when rendered.
    pub projects: Vec<Option<Rect>>,
}

impl StripAreas {
    /// Area of the strip the pagination actions currently address.
    pub fn active(&self, state: &AppState) -> Option<Rect> {
        match state.page {
            Page::About => self.about,
            Page::Projects if state.categories.focused_is_open() => self
                .projects
                .get(state.categories.focused())
                .copied()
                .flatten(),
            _ => None,
        }
    }
}

/// Render one frame of the application.
///
/// Returns the strip areas this frame produced, for measurement and
/// mouse hit testing.
pub fn render_root(frame: &mut Frame, state: &AppState, colors: ColorConfig) -> StripAreas {
    let theme = Theme::new(state.theme, colors);
    let area = frame.area();

    // Page background under everything.
    frame.render_widget(Block::default().style(theme.background()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT), // Navigation bar
            Constraint::Min(0),             // Page content
        ])
        .split(area);

    navigation::render_navigation(
        frame,
        chunks[0],
        &state.profile.owner,
        state.page,
        state.profile.repo_url.as_deref(),
        &theme,
    );

    let content = chunks[1];
    let mut areas = StripAreas {
        about: None,
        projects: vec![None; state.profile.projects.len()],
    };

    match state.page {
        Page::Home => home::render_home(
            frame,
            content,
            &state.profile,
            state.home_section,
            state.blink_on,
            &theme,
        ),
        Page::About => {
            areas.about =
                about::render_about(frame, content, &state.profile, &state.about_strip, &theme);
        }
        Page::Projects => {
            areas.projects = projects::render_projects(
                frame,
                content,
                &state.profile,
                &state.project_strips,
                &state.categories,
                &theme,
            );
        }
        Page::NotFound => not_found::render_not_found(frame, content, &theme),
    }

    // Overlays: drawer first, help on top.
    if let Some(card_index) = state.drawer.open_card() {
        if let Some(card) = state.active_cards().get(card_index.get()) {
            drawer::render_drawer(frame, card, &theme);
        }
    }
    if state.help_visible {
        render_help_overlay(frame, &theme);
    }

    areas
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    colors: ColorConfig,
    /// Strip areas from the last draw (for measurement and mouse hits)
    strip_areas: StripAreas,
    /// Timer ticks elapsed, for the blink cadence
    tick_count: u64,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse
    /// capture enabled.
    pub fn new(
        profile: Profile,
        theme: ThemeMode,
        page: Page,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let app_state = AppState::new(profile, theme, page);

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            colors,
            strip_areas: StripAreas::default(),
            tick_count: 0,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C). Event-driven: redraws
    /// on input events, and on timer ticks only while a slide animates,
    /// a deferred measurement fires, or the arrow blinks.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);

        // Initial render - ensures screen has content immediately
        self.draw()?;

        loop {
            if event::poll(tick_interval)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(()); // User quit
                        }
                        self.draw()?;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                        // Redraw records the new strip areas, then the
                        // overflow flags re-measure against them.
                        self.draw()?;
                        self.measure_strips();
                        self.draw()?;
                    }
                    _ => {}
                }
            } else {
                self.on_tick()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle one timer tick: animations, deferred measurements, blink.
    fn on_tick(&mut self) -> Result<(), TuiError> {
        self.tick_count = self.tick_count.wrapping_add(1);

        let outcome = self.app_state.tick_strips();
        let mut redraw = outcome.animating;

        if outcome.measure_due {
            self.measure_strips();
            redraw = true;
        }

        let arrow_visible = self.app_state.page == Page::Home
            && self.app_state.home_section == HomeSection::Hero;
        if arrow_visible && self.tick_count % BLINK_INTERVAL_TICKS == 0 {
            self.app_state.toggle_blink();
            redraw = true;
        }

        if redraw {
            self.draw()?;
        }
        Ok(())
    }

    /// Recompute overflow flags from the last drawn strip areas.
    fn measure_strips(&mut self) {
        if let Some(area) = self.strip_areas.about {
            self.app_state.about_strip.measure(area);
        }
        for (strip, area) in self
            .app_state
            .project_strips
            .iter_mut()
            .zip(self.strip_areas.projects.iter())
        {
            if let Some(area) = area {
                strip.measure(*area);
            }
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if the app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if not in the bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        self.dispatch(action)
    }

    /// Route a domain action to the matching handler.
    ///
    /// Returns true if the app should quit
    fn dispatch(&mut self, action: KeyAction) -> bool {
        debug!(?action, "dispatching action");
        match action {
            KeyAction::Quit => return true,
            KeyAction::Refresh => {
                // Force a full repaint on the next draw.
                let _ = self.terminal.clear();
            }
            KeyAction::ActivateCard | KeyAction::Dismiss | KeyAction::Help => {
                self.app_state = handle_overlay_action(self.app_state.clone(), action);
            }
            action if action.is_strip_action() => {
                self.app_state = handle_strip_action(self.app_state.clone(), action);
            }
            _ => {
                self.app_state = handle_page_action(self.app_state.clone(), action);
            }
        }
        false
    }

    /// Handle a mouse event: wheel pagination, card activation,
    /// affordance clicks, and backdrop dismissal.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollRight | MouseEventKind::ScrollDown => {
                if self.mouse_over_active_strip(mouse.column, mouse.row) {
                    self.dispatch(KeyAction::Advance);
                }
            }
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollUp => {
                if self.mouse_over_active_strip(mouse.column, mouse.row) {
                    self.dispatch(KeyAction::Retreat);
                }
            }
            MouseEventKind::Down(_) => self.handle_click(mouse.column, mouse.row),
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        // An open drawer is modal: clicks inside it stay, clicks on
        // the backdrop dismiss it.
        if self.app_state.drawer.is_open() {
            let area = self
                .terminal
                .size()
                .map(|size| drawer::drawer_area(Rect::new(0, 0, size.width, size.height)))
                .unwrap_or_default();
            if !area.contains(ratatui::layout::Position::new(column, row)) {
                self.app_state = handle_overlay_action(self.app_state.clone(), KeyAction::Dismiss);
            }
            return;
        }
        if self.app_state.help_visible {
            self.app_state = handle_overlay_action(self.app_state.clone(), KeyAction::Dismiss);
            return;
        }

        let Some(area) = self.strip_areas.active(&self.app_state) else {
            return;
        };
        if row < area.top() || row >= area.bottom() {
            return;
        }

        let (affordance, card_hit) = {
            let Some(strip) = self.app_state.active_strip() else {
                return;
            };
            let layout = strip.layout();
            (
                cards::affordance_at(strip, area, column),
                layout.card_at(area, strip.pager().count(), strip.offset(), column),
            )
        };

        // Edge affordances win over the cards underneath them.
        if let Some(action) = affordance {
            self.dispatch(action);
            return;
        }

        // A click on a card opens that card's drawer.
        if let Some(card) = card_hit {
            self.app_state
                .drawer
                .open(crate::view_state::CardIndex::new(card));
        }
    }

    /// Whether the pointer is over the active strip's area.
    fn mouse_over_active_strip(&self, column: u16, row: u16) -> bool {
        self.strip_areas
            .active(&self.app_state)
            .is_some_and(|area| area.contains(ratatui::layout::Position::new(column, row)))
    }

    /// Draw the current state and record the produced strip areas.
    fn draw(&mut self) -> Result<(), TuiError> {
        let app_state = &self.app_state;
        let colors = self.colors;
        let strip_areas = &mut self.strip_areas;
        self.terminal.draw(|frame| {
            *strip_areas = render_root(frame, app_state, colors);
        })?;
        Ok(())
    }
}

/// Initialize and run the TUI application.
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by the caller.
pub fn run(
    profile: Profile,
    theme: ThemeMode,
    page: Page,
    colors: ColorConfig,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(profile, theme, page, colors)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Profile;
    use ratatui::backend::TestBackend;

    fn no_colors() -> ColorConfig {
        ColorConfig::from_env_and_args(true)
    }

    fn draw_state(state: &AppState) -> (String, StripAreas) {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut areas = StripAreas::default();
        terminal
            .draw(|frame| {
                areas = render_root(frame, state, no_colors());
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
    fn tui_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::Other, "boom");
        let tui_error: TuiError = io_error.into();
        assert!(tui_error.to_string().contains("boom"));
    }

    #[test]
    fn home_frame_shows_nav_and_hero() {
        let state = AppState::new(Profile::builtin(), ThemeMode::Light, Page::Home);
        let (text, areas) = draw_state(&state);

        assert!(text.contains("Ritonis"));
        assert!(text.contains("Hello!"));
        assert_eq!(areas.about, None);
        assert!(areas.projects.iter().all(Option::is_none));
    }

    #[test]
    fn about_frame_records_the_strip_area() {
        let mut state = AppState::new(Profile::builtin(), ThemeMode::Light, Page::Home);
        state.go_to(Page::About);
        let (text, areas) = draw_state(&state);

        assert!(text.contains("Introduction"));
        let area = areas.about.expect("about strip area recorded");
        assert_eq!(areas.active(&state), Some(area));
    }

    #[test]
    fn drawer_overlay_renders_on_top_of_the_page() {
        let mut state = AppState::new(Profile::builtin(), ThemeMode::Light, Page::Home);
        state.go_to(Page::About);
        state = handle_overlay_action(state, KeyAction::ActivateCard);

        let (text, _) = draw_state(&state);
        assert!(text.contains("Esc to close"), "drawer hint visible");
    }

    #[test]
    fn drawer_for_out_of_range_card_is_skipped() {
        let mut state = AppState::new(Profile::builtin(), ThemeMode::Light, Page::Home);
        state.go_to(Page::About);
        state.drawer.open(crate::view_state::CardIndex::new(99));

        let (text, _) = draw_state(&state);
        assert!(
            !text.contains("Esc to close"),
            "missing measurement target is skipped silently"
        );
    }

    #[test]
    fn help_overlay_renders_above_everything() {
        let mut state = AppState::new(Profile::builtin(), ThemeMode::Light, Page::Home);
        state.help_visible = true;
        let (text, _) = draw_state(&state);
        assert!(text.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn not_found_page_renders_for_unknown_page() {
        let state = AppState::new(Profile::builtin(), ThemeMode::Light, Page::NotFound);
        let (text, _) = draw_state(&state);
        assert!(text.contains("404"));
    }

    #[test]
    fn active_area_on_projects_requires_open_category() {
        let mut state = AppState::new(Profile::builtin(), ThemeMode::Light, Page::Home);
        state.go_to(Page::Projects);
        let (_, areas) = draw_state(&state);
        assert_eq!(areas.active(&state), None);

        state.categories.toggle_focused();
        let (_, areas) = draw_state(&state);
        assert!(areas.active(&state).is_some());
    }
}
