//! Strip overflow detection.
//!
//! A strip "overflows" when some card content lies outside the visible
//! strip area: the last card's trailing edge past the area's right
//! edge, or the first card's leading edge before the area's left edge.
//! The flag gates the prev/next affordances; a strip that fits entirely
//! on screen renders no controls.
//!
//! Measurement is a pure function over explicit edge values. The
//! deferred re-measure after an index change is modeled by
//! [`Remeasure`]: a countdown in event-loop ticks that lets the slide
//! transition settle before the edges are read. Scheduling a new
//! re-measure replaces any pending one, so a burst of index changes
//! yields a single measurement at the end.

/// Decide whether a strip overflows its area.
///
/// `first_leading` / `last_trailing` are the absolute edges of the
/// outermost cards, or `None` when the strip is empty or not yet laid
/// out — which counts as "not overflowing".
pub fn strip_overflows(
    first_leading: Option<i32>,
    last_trailing: Option<i32>,
    area_left: i32,
    area_right: i32,
) -> bool {
    let past_right = last_trailing.is_some_and(|edge| edge > area_right);
    let past_left = first_leading.is_some_and(|edge| edge < area_left);
    past_right || past_left
}

/// Pending deferred re-measure, counted in event-loop ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remeasure {
    ticks_remaining: Option<u16>,
}

impl Remeasure {
    /// No measurement pending.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Schedule a measurement `delay` ticks from now, replacing any
    /// pending one.
    pub fn schedule(&mut self, delay: u16) {
        self.ticks_remaining = Some(delay);
    }

    /// Drop any pending measurement.
    pub fn cancel(&mut self) {
        self.ticks_remaining = None;
    }

    /// Advance one tick. Returns true exactly when the countdown fires.
    pub fn tick(&mut self) -> bool {
        match self.ticks_remaining {
            Some(0) => {
                self.ticks_remaining = None;
                true
            }
            Some(n) => {
                self.ticks_remaining = Some(n - 1);
                false
            }
            None => false,
        }
    }

    /// Whether a measurement is scheduled.
    pub fn is_pending(&self) -> bool {
        self.ticks_remaining.is_some()
    }
}
