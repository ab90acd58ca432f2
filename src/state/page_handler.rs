//! Page navigation and appearance action handler.
//!
//! Pure functions covering the non-strip, non-overlay actions: page
//! switching, vertical movement within a page, category folding, and
//! the theme toggle.

use crate::model::KeyAction;
use crate::state::{AppState, HomeSection, Page};

/// Handle a navigation/appearance action.
///
/// Page switches remount the target page (see [`AppState::go_to`]).
/// While the drawer or help overlay is open these actions are dropped;
/// overlays are dismissed through the overlay handler.
pub fn handle_page_action(mut state: AppState, action: KeyAction) -> AppState {
    if state.drawer.is_open() || state.help_visible {
        return state;
    }

    match action {
        KeyAction::GoHome => state.go_to(Page::Home),
        KeyAction::GoAbout => state.go_to(Page::About),
        KeyAction::GoProjects => state.go_to(Page::Projects),
        KeyAction::CyclePage => {
            let next = state.page.next();
            state.go_to(next);
        }

        KeyAction::MoveDown => match state.page {
            Page::Home => state.home_section = HomeSection::Skills,
            Page::Projects => state.categories.focus_next(),
            _ => {}
        },
        KeyAction::MoveUp => match state.page {
            Page::Home => state.home_section = HomeSection::Hero,
            Page::Projects => state.categories.focus_prev(),
            _ => {}
        },
        KeyAction::ToggleCategory => {
            if state.page == Page::Projects {
                state.categories.toggle_focused();
            }
        }

        KeyAction::ToggleTheme => state.theme = state.theme.toggled(),

        _ => {}
    }

    state
}

// ===== Tests =====
