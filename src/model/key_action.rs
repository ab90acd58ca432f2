//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Card strip pagination
    /// Slide the active card strip one card forward. Default: l/→
    Advance,
    /// Slide the active card strip one card back. Default: h/←
    Retreat,
    /// Jump to the first card. Default: g/Home
    FirstCard,
    /// Jump to the last card. Default: G/End
    LastCard,

    // Drawer
    /// Open the focused card's drawer. Default: Enter/Space
    ActivateCard,
    /// Dismiss the drawer or help overlay. Default: Esc
    Dismiss,

    // Page navigation
    /// Go to the home page. Default: 1
    GoHome,
    /// Go to the about page. Default: 2
    GoAbout,
    /// Go to the projects page. Default: 3
    GoProjects,
    /// Cycle Home → About → Projects → Home. Default: Tab
    CyclePage,

    // Vertical movement (home sections, projects category focus)
    /// Move down a section or category. Default: j/↓
    MoveDown,
    /// Move up a section or category. Default: k/↑
    MoveUp,
    /// Toggle the focused project category open/closed. Default: o
    ToggleCategory,

    // Appearance
    /// Switch between the light and dark palettes. Default: t
    ToggleTheme,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show the help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Redraw from scratch. Default: r
    Refresh,
}

impl KeyAction {
    /// Whether this action targets the active card strip.
    pub fn is_strip_action(self) -> bool {
        matches!(
            self,
            KeyAction::Advance | KeyAction::Retreat | KeyAction::FirstCard | KeyAction::LastCard
        )
    }
}
