//! Drawer and help overlay action handler.
//!
//! Activation opens the focused card's drawer; dismissal closes
//! whichever overlay is on top. Exactly one drawer can be open because
//! the open card lives in a single `DrawerState` value.

use crate::model::KeyAction;
use crate::state::AppState;

/// Handle drawer/help actions.
pub fn handle_overlay_action(mut state: AppState, action: KeyAction) -> AppState {
    match action {
        KeyAction::ActivateCard => {
            // Help stays on top; no drawer interaction underneath it.
            if state.help_visible {
                return state;
            }
            if let Some(strip) = state.active_strip() {
                if !strip.pager().is_empty() {
                    let card = strip.pager().card();
                    state.drawer.toggle(card);
                }
            }
        }

        KeyAction::Dismiss => {
            if state.help_visible {
                state.help_visible = false;
            } else if state.drawer.is_open() {
                state.drawer.close();
            }
        }

        KeyAction::Help => {
            state.help_visible = !state.help_visible;
        }

        _ => {}
    }

    state
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Profile, ThemeMode};
    use crate::state::Page;
    use crate::view_state::CardIndex;

    fn about_state() -> AppState {
        let mut state = AppState::new(Profile::builtin(), ThemeMode::Light, Page::Home);
        state.go_to(Page::About);
        state
    }

    #[test]
    fn activate_opens_the_focused_cards_drawer() {
        let state = handle_overlay_action(about_state(), KeyAction::ActivateCard);
        assert_eq!(state.drawer.open_card(), Some(CardIndex::new(0)));
    }

    #[test]
    fn activate_tracks_the_pager_position() {
        let mut state = about_state();
        state.about_strip.apply(KeyAction::Advance);
        let state = handle_overlay_action(state, KeyAction::ActivateCard);
        assert_eq!(state.drawer.open_card(), Some(CardIndex::new(1)));
    }

    #[test]
    fn activate_again_closes_the_same_drawer() {
        let state = handle_overlay_action(about_state(), KeyAction::ActivateCard);
        let state = handle_overlay_action(state, KeyAction::ActivateCard);
        assert!(!state.drawer.is_open());
    }

    #[test]
    fn activate_without_an_active_strip_does_nothing() {
        let state = AppState::new(Profile::builtin(), ThemeMode::Light, Page::Home);
        let state = handle_overlay_action(state, KeyAction::ActivateCard);
        assert!(!state.drawer.is_open());
    }

    #[test]
    fn activate_on_empty_strip_does_nothing() {
        let mut profile = Profile::builtin();
        profile.about.clear();
        let mut state = AppState::new(profile, ThemeMode::Light, Page::Home);
        state.go_to(Page::About);

        let state = handle_overlay_action(state, KeyAction::ActivateCard);
        assert!(!state.drawer.is_open(), "no drawer for an empty card sequence");
    }

    #[test]
    fn dismiss_closes_the_drawer() {
        let state = handle_overlay_action(about_state(), KeyAction::ActivateCard);
        let state = handle_overlay_action(state, KeyAction::Dismiss);
        assert!(!state.drawer.is_open());
    }

    #[test]
    fn dismiss_prefers_help_over_drawer() {
        let mut state = handle_overlay_action(about_state(), KeyAction::ActivateCard);
        state.help_visible = true;

        let state = handle_overlay_action(state, KeyAction::Dismiss);
        assert!(!state.help_visible, "topmost overlay closes first");
        assert!(state.drawer.is_open());
    }

    #[test]
    fn help_toggles_the_overlay() {
        let state = handle_overlay_action(about_state(), KeyAction::Help);
        assert!(state.help_visible);
        let state = handle_overlay_action(state, KeyAction::Help);
        assert!(!state.help_visible);
    }

    #[test]
    fn activate_under_help_is_blocked() {
        let mut state = about_state();
        state.help_visible = true;
        let state = handle_overlay_action(state, KeyAction::ActivateCard);
        assert!(!state.drawer.is_open());
    }
}
