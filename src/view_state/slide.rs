//! Strip slide transition.
//!
//! Index changes don't jump the strip; they retarget a short eased
//! animation driven by the event-loop tick. Retargeting mid-flight
//! starts the easing from the current interpolated position.

use super::types::CellOffset;

/// An eased horizontal transition between two strip offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    from: CellOffset,
    to: CellOffset,
    elapsed: u16,
    duration: u16,
}

impl Slide {
    /// A slide already settled at `offset`.
    pub fn settled_at(offset: CellOffset, duration: u16) -> Self {
        Self {
            from: offset,
            to: offset,
            elapsed: duration,
            duration,
        }
    }

    /// Begin easing toward `to` from the current interpolated position.
    ///
    /// A no-op when `to` is already the target, so repeated clamped
    /// advance calls at the strip end don't restart the animation.
    pub fn retarget(&mut self, to: CellOffset) {
        if to == self.to {
            return;
        }
        self.from = self.current();
        self.to = to;
        self.elapsed = 0;
    }

    /// Advance one tick. Returns true while the slide is still moving.
    pub fn tick(&mut self) -> bool {
        if self.elapsed < self.duration {
            self.elapsed += 1;
            self.elapsed < self.duration
        } else {
            false
        }
    }

    /// Current interpolated offset (ease-out cubic).
    pub fn current(&self) -> CellOffset {
        if self.elapsed >= self.duration || self.duration == 0 {
            return self.to;
        }
        let progress = self.elapsed as f32 / self.duration as f32;
        let eased = 1.0 - (1.0 - progress).powi(3);
        let distance = (self.to - self.from) as f32;
        CellOffset::new(self.from.get() + (distance * eased).round() as i32)
    }

    /// The offset this slide is heading to.
    pub fn target(&self) -> CellOffset {
        self.to
    }

    /// Whether the slide has reached its target.
    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICKS: u16 = 4;

    #[test]
    fn settled_slide_reports_its_offset() {
        let slide = Slide::settled_at(CellOffset::new(-32), TICKS);
        assert!(slide.is_settled());
        assert_eq!(slide.current(), CellOffset::new(-32));
        assert_eq!(slide.target(), CellOffset::new(-32));
    }

    #[test]
    fn tick_on_settled_slide_is_inert() {
        let mut slide = Slide::settled_at(CellOffset::default(), TICKS);
        assert!(!slide.tick());
        assert_eq!(slide.current(), CellOffset::default());
    }

    #[test]
    fn retarget_starts_moving_toward_new_offset() {
        let mut slide = Slide::settled_at(CellOffset::default(), TICKS);
        slide.retarget(CellOffset::new(-32));

        assert!(!slide.is_settled());
        assert_eq!(slide.current(), CellOffset::default(), "no movement before first tick");

        slide.tick();
        let mid = slide.current().get();
        assert!(mid < 0 && mid > -32, "first tick should land strictly between endpoints, got {mid}");
    }

    #[test]
    fn slide_settles_exactly_on_target_after_duration_ticks() {
        let mut slide = Slide::settled_at(CellOffset::default(), TICKS);
        slide.retarget(CellOffset::new(-64));

        let mut moving = true;
        let mut ticks = 0;
        while moving {
            moving = slide.tick();
            ticks += 1;
            assert!(ticks <= TICKS, "slide must settle within its duration");
        }

        assert!(slide.is_settled());
        assert_eq!(slide.current(), CellOffset::new(-64));
    }

    #[test]
    fn ease_out_moves_fastest_early() {
        let mut slide = Slide::settled_at(CellOffset::default(), TICKS);
        slide.retarget(CellOffset::new(-100));

        slide.tick();
        let first_leg = -slide.current().get();
        while slide.tick() {}
        let total = -slide.current().get();

        assert!(
            first_leg * (TICKS as i32) > total,
            "ease-out should cover more than a proportional share early (first leg {first_leg} of {total})"
        );
    }

    #[test]
    fn retarget_mid_flight_continues_from_current_position() {
        let mut slide = Slide::settled_at(CellOffset::default(), TICKS);
        slide.retarget(CellOffset::new(-64));
        slide.tick();
        let mid = slide.current();

        slide.retarget(CellOffset::new(0));
        assert_eq!(slide.current(), mid, "reversal starts where the slide was");

        while slide.tick() {}
        assert_eq!(slide.current(), CellOffset::new(0));
    }

    #[test]
    fn retarget_to_existing_target_does_not_restart() {
        let mut slide = Slide::settled_at(CellOffset::new(-32), TICKS);
        slide.retarget(CellOffset::new(-32));
        assert!(slide.is_settled(), "same-target retarget must not restart the animation");
    }

    #[test]
    fn zero_duration_slide_jumps_immediately() {
        let mut slide = Slide::settled_at(CellOffset::default(), 0);
        slide.retarget(CellOffset::new(-32));
        assert_eq!(slide.current(), CellOffset::new(-32));
    }
}
