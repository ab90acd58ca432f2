//! Blinking "scroll down" arrow.
//!
//! Two stacked chevrons under the hero text, inviting a scroll to the
//! skills section. The event-loop timer flips the blink phase and the
//! two chevrons alternate, reading as a downward pulse.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

/// Width of the chevron glyph rows.
pub const ARROW_WIDTH: u16 = 5;
/// Total height of both chevrons.
pub const ARROW_HEIGHT: u16 = 4;

/// The blinking down-arrow widget.
#[derive(Debug, Clone, Copy)]
pub struct BlinkArrow {
    phase: bool,
    style: Style,
}

impl BlinkArrow {
    /// Arrow in the given blink phase, drawn with `style`.
    pub fn new(phase: bool, style: Style) -> Self {
        Self { phase, style }
    }
}

impl Widget for BlinkArrow {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < ARROW_WIDTH || area.height < ARROW_HEIGHT {
            return;
        }

        let bright = self.style.add_modifier(Modifier::BOLD);
        let faint = self.style.add_modifier(Modifier::DIM);
        let (upper, lower) = if self.phase {
            (bright, faint)
        } else {
            (faint, bright)
        };

        let chevron = [r"\   /", r" \ / "];
        for (row, text) in chevron.iter().enumerate() {
            buf.set_string(area.x, area.y + row as u16, text, upper);
        }
        for (row, text) in chevron.iter().enumerate() {
            buf.set_string(area.x, area.y + 2 + row as u16, text, lower);
        }
    }
}
