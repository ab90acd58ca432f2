//! Layout and timing constants shared across the view.

/// Width of one card face in cells.
pub const CARD_WIDTH: u16 = 30;

/// Gap between adjacent cards in cells.
pub const CARD_GAP: u16 = 2;

/// Height of a card strip in rows.
pub const CARD_HEIGHT: u16 = 9;

/// Height of the navigation bar in rows.
pub const NAV_HEIGHT: u16 = 1;

/// Event-loop timer tick, in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 80;

/// Ticks a strip slide takes to settle (~320 ms).
pub const SLIDE_TICKS: u16 = 4;

/// Ticks between an index change and the overflow re-measure (~240 ms),
/// so the slide has settled when the edges are read.
pub const REMEASURE_DELAY_TICKS: u16 = 3;

/// Timer ticks between arrow blink phase flips (~480 ms).
pub const BLINK_INTERVAL_TICKS: u64 = 6;

/// Drawer overlay size as a percentage of the screen.
pub const DRAWER_WIDTH_PERCENT: u16 = 60;
/// Drawer overlay height percentage.
pub const DRAWER_HEIGHT_PERCENT: u16 = 50;

/// Help overlay size as a percentage of the screen.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;
/// Help overlay height percentage.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;
