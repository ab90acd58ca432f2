//! Card drawer state.
//!
//! The drawer is a secondary panel revealing a card's full body and
//! links. One app-level value tracks which card (if any) is open, so
//! two drawers can never be open at once: opening a card's drawer
//! replaces whatever was open before.

use crate::view_state::CardIndex;

/// Open/closed state of the card drawer.
///
/// States: closed, or open on exactly one card of the active strip.
/// Transitions: closed→open on card activation, open→closed on explicit
/// close or backdrop dismissal. No timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawerState {
    open_card: Option<CardIndex>,
}

impl DrawerState {
    /// Drawer starts closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any card's drawer is open.
    pub fn is_open(&self) -> bool {
        self.open_card.is_some()
    }

    /// The card whose drawer is open, if any.
    pub fn open_card(&self) -> Option<CardIndex> {
        self.open_card
    }

    /// Open the drawer on `card`, replacing any open drawer.
    pub fn open(&mut self, card: CardIndex) {
        self.open_card = Some(card);
    }

    /// Close the drawer.
    pub fn close(&mut self) {
        self.open_card = None;
    }

    /// Activate `card`: open its drawer, or close it when it is already
    /// the open one.
    pub fn toggle(&mut self, card: CardIndex) {
        if self.open_card == Some(card) {
            self.open_card = None;
        } else {
            self.open_card = Some(card);
        }
    }
}
