//! Card strip geometry.
//!
//! All cards in a strip share one moving origin: card `i` sits at
//! `i * stride` cells from the strip origin, and the whole strip is
//! shifted by the current [`CellOffset`]. Advancing the pager retargets
//! the offset to `-(stride * index)`, which slides earlier cards out to
//! the left. Everything here is pure arithmetic over explicit values;
//! the renderer and the overflow check both consume it.

use super::types::CellOffset;
use ratatui::layout::Rect;

/// Fixed per-strip card metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripLayout {
    /// Width of one card in cells.
    pub card_width: u16,
    /// Gap between adjacent cards in cells.
    pub card_gap: u16,
}

impl StripLayout {
    /// Create a layout from card width and gap.
    pub fn new(card_width: u16, card_gap: u16) -> Self {
        Self { card_width, card_gap }
    }

    /// Distance between the leading edges of adjacent cards.
    pub fn stride(&self) -> u16 {
        self.card_width + self.card_gap
    }

    /// Strip offset that brings the card at `index` to the strip origin.
    pub fn target_offset(&self, index: usize) -> CellOffset {
        CellOffset::new(-(self.stride() as i32 * index as i32))
    }

    /// Leading (left) edge of card `card`, in absolute cells, given the
    /// strip area and the current offset. May be negative or beyond the
    /// area; callers clip.
    pub fn card_leading_edge(&self, area: Rect, card: usize, offset: CellOffset) -> i32 {
        area.x as i32 + self.stride() as i32 * card as i32 + offset.get()
    }

    /// Trailing (right, exclusive) edge of card `card` in absolute cells.
    pub fn card_trailing_edge(&self, area: Rect, card: usize, offset: CellOffset) -> i32 {
        self.card_leading_edge(area, card, offset) + self.card_width as i32
    }

    /// Trailing edge of the last card, or `None` for an empty strip.
    pub fn last_trailing_edge(
        &self,
        area: Rect,
        count: usize,
        offset: CellOffset,
    ) -> Option<i32> {
        count
            .checked_sub(1)
            .map(|last| self.card_trailing_edge(area, last, offset))
    }

    /// Leading edge of the first card, or `None` for an empty strip.
    pub fn first_leading_edge(
        &self,
        area: Rect,
        count: usize,
        offset: CellOffset,
    ) -> Option<i32> {
        (count > 0).then(|| self.card_leading_edge(area, 0, offset))
    }

    /// On-screen rect for card `card`, clipped to `area`.
    ///
    /// Returns `None` when the card is entirely outside the strip area
    /// (slid off either edge), so the renderer can skip it.
    pub fn card_rect(&self, area: Rect, card: usize, offset: CellOffset) -> Option<Rect> {
        let leading = self.card_leading_edge(area, card, offset);
        let trailing = leading + self.card_width as i32;

        let clipped_left = leading.max(area.left() as i32);
        let clipped_right = trailing.min(area.right() as i32);
        if clipped_right <= clipped_left {
            return None;
        }

        Some(Rect {
            x: clipped_left as u16,
            y: area.y,
            width: (clipped_right - clipped_left) as u16,
            height: area.height,
        })
    }

    /// Which card a click at absolute column `x` lands on, given the
    /// current offset. Gap cells belong to no card.
    pub fn card_at(&self, area: Rect, count: usize, offset: CellOffset, x: u16) -> Option<usize> {
        let rel = x as i32 - area.x as i32 - offset.get();
        if rel < 0 {
            return None;
        }
        let card = rel as usize / self.stride() as usize;
        let within = rel as usize % self.stride() as usize;
        (card < count && within < self.card_width as usize).then_some(card)
    }
}
