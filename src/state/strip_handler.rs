//! Pagination keyboard action handler.
//!
//! Pure function that transforms `AppState` in response to strip
//! actions. Page-aware: the action lands on the active strip (about
//! page, or the focused open project category), and is dropped when no
//! strip is active or a modal overlay captures input.

use crate::model::KeyAction;
use crate::state::AppState;

/// Handle a pagination action, dispatching to the active strip.
///
/// Returns the state unchanged when the action is not a strip action,
/// the drawer or help overlay is open, or the current page has no
/// active strip.
pub fn handle_strip_action(mut state: AppState, action: KeyAction) -> AppState {
    if !action.is_strip_action() {
        return state;
    }
    if state.drawer.is_open() || state.help_visible {
        return state;
    }

    if let Some(strip) = state.active_strip_mut() {
        strip.apply(action);
    }
    state
}

// ===== Tests =====
