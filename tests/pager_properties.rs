//! Property-based tests for pagination invariants.
//!
//! Tests validate:
//! 1. The index stays within `[0, count-1]` under any action sequence
//! 2. Boundary operations are idempotent
//! 3. The slide always settles on the offset implied by the index
//! 4. An empty strip is completely inert

use folio::model::KeyAction;
use folio::state::{Pager, StripState};
use proptest::prelude::*;

/// Strategy for an arbitrary pagination action.
fn strip_action() -> impl Strategy<Value = KeyAction> {
    prop_oneof![
        Just(KeyAction::Advance),
        Just(KeyAction::Retreat),
        Just(KeyAction::FirstCard),
        Just(KeyAction::LastCard),
    ]
}

proptest! {
    #[test]
    fn index_stays_in_bounds_under_any_action_sequence(
        count in 0usize..20,
        actions in prop::collection::vec(strip_action(), 0..64),
    ) {
        let mut pager = Pager::new(count);
        for action in actions {
            match action {
                KeyAction::Advance => pager.advance(),
                KeyAction::Retreat => pager.retreat(),
                KeyAction::FirstCard => pager.first(),
                KeyAction::LastCard => pager.last(),
                _ => unreachable!(),
            }
            if count == 0 {
                prop_assert_eq!(pager.index(), 0, "empty strip pins the index at zero");
            } else {
                prop_assert!(
                    pager.index() <= count - 1,
                    "index {} escaped [0, {}]", pager.index(), count - 1
                );
            }
        }
    }

    #[test]
    fn retreat_at_zero_is_idempotent(count in 0usize..20) {
        let mut pager = Pager::new(count);
        pager.first();
        let before = pager.index();
        pager.retreat();
        prop_assert_eq!(pager.index(), before);
    }

    #[test]
    fn advance_at_end_is_idempotent(count in 0usize..20) {
        let mut pager = Pager::new(count);
        pager.last();
        let before = pager.index();
        pager.advance();
        prop_assert_eq!(pager.index(), before);
    }

    #[test]
    fn advances_from_zero_land_on_min_of_steps_and_last(
        count in 1usize..20,
        steps in 0usize..40,
    ) {
        let mut pager = Pager::new(count);
        for _ in 0..steps {
            pager.advance();
        }
        prop_assert_eq!(pager.index(), steps.min(count - 1));
    }

    #[test]
    fn slide_settles_on_the_offset_implied_by_the_index(
        count in 1usize..10,
        actions in prop::collection::vec(strip_action(), 1..16),
    ) {
        let mut strip = StripState::new(count);
        for action in actions {
            strip.apply(action);
        }
        // Run the animation dry.
        while strip.tick().animating {}

        let expected = strip.layout().target_offset(strip.pager().index());
        prop_assert_eq!(strip.offset(), expected);
    }

    #[test]
    fn empty_strip_is_inert_under_any_actions(
        actions in prop::collection::vec(strip_action(), 0..16),
    ) {
        let mut strip = StripState::new(0);
        for action in actions {
            strip.apply(action);
        }
        while strip.tick().animating {}

        prop_assert_eq!(strip.pager().index(), 0);
        prop_assert_eq!(strip.offset(), strip.layout().target_offset(0));
        prop_assert!(!strip.show_prev());
        prop_assert!(!strip.show_next());
    }
}

#[test]
fn three_advances_over_three_cards_stop_at_two() {
    let mut pager = Pager::new(3);
    pager.advance();
    pager.advance();
    pager.advance();
    assert_eq!(pager.index(), 2, "index must clamp at count - 1, not reach 3");
}
